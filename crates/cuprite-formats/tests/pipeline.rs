#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end pipeline tests: catalog source text through all three exports

use cuprite_formats::catalog::{self, CatalogError};
use cuprite_formats::exports::{class_list, loot_groups, price_list};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SOURCE: &str = "\
[CUP Optics]
// red dots and scopes
class CUP_optic_Holo { quality = 2; price = 100; };
class CUP_optic_Elcan { quality = 3; price = 250; };

[CUP Pistols]
class CUP_hgun_Glock { quality = 2; price = 150; };
class CUP_hgun_Deagle_gold { quality = 5; price = 900; };

[CUP Launchers]
class CUP_launcher_Javelin { quality = 5; price = 5000; };
";

#[test]
fn single_item_catalog_end_to_end() {
    let source = "[CUP Optics]\nclass CUP_optic_Test { quality = 2; price = 100; };\n";
    let catalog = catalog::parse(source).expect("source should parse");

    assert_eq!(catalog.category_count(), 1);
    let optics = catalog.get("CUP Optics").expect("category should exist");
    assert_eq!(optics.len(), 1);

    // Optics markup is 20 or 30, rounded to tens: 120 or 130
    let item = &optics.items()[0];
    assert!(item.price == 120 || item.price == 130, "price {}", item.price);

    // One class, so no trailing comma anywhere
    assert_eq!(class_list::format(&catalog, 0), "\"CUP_optic_Test\"");

    let loot = loot_groups::format(&catalog);
    let lines: Vec<&str> = loot.lines().collect();
    assert_eq!(lines[1], "> CUPOptics");
    let (chance, name) = lines[2].split_once(", ").expect("weight line expected");
    assert_eq!(name, "CUP_optic_Test");
    assert!(chance.parse::<u32>().expect("weight should be numeric") >= 1);
}

#[test]
fn full_pipeline_with_seeded_rng() {
    let mut rng = StdRng::seed_from_u64(2024);
    let catalog = catalog::parse_with(SOURCE, &mut rng).expect("source should parse");

    assert_eq!(catalog.category_count(), 3);
    assert_eq!(catalog.item_count(), 5);

    let classes = class_list::format(&catalog, 3);
    assert_eq!(classes.lines().count(), 5);
    assert!(classes.starts_with("\t\t\t\"CUP_optic_Holo\","));
    assert!(classes.ends_with("\"CUP_launcher_Javelin\""));

    let prices = price_list::format(&catalog, 1);
    for header in ["CUP Optics", "CUP Pistols", "CUP Launchers"] {
        assert!(prices.contains(&format!("\t//{header}\n")));
    }
    // Every item line renders with its normalized price
    for item in catalog.iter().flat_map(|c| c.items()) {
        assert!(prices.contains(&format!("price = {};", item.price)));
    }

    let loot = loot_groups::format_with(&catalog, &mut rng);
    assert!(loot.contains("\n> CUPOptics\n"));
    assert!(loot.contains("\n> CUPPistols\n"));
    assert!(loot.contains("\n> CUPLaunchers\n"));
    for line in loot.lines().filter(|l| !l.is_empty() && !l.starts_with('>')) {
        let (chance, _) = line.split_once(", ").expect("weight line expected");
        assert!(chance.parse::<u32>().expect("weight should be numeric") >= 1);
    }
}

#[test]
fn exports_agree_on_order() {
    let catalog = catalog::parse(SOURCE).expect("source should parse");

    let classes = class_list::format(&catalog, 0);
    let prices = price_list::format(&catalog, 0);
    let loot = loot_groups::format(&catalog);

    // The same class sequence appears in all three artifacts
    let expected = [
        "CUP_optic_Holo",
        "CUP_optic_Elcan",
        "CUP_hgun_Glock",
        "CUP_hgun_Deagle_gold",
        "CUP_launcher_Javelin",
    ];
    for artifact in [&classes, &prices, &loot] {
        let mut cursor = 0;
        for class in expected {
            let at = artifact[cursor..]
                .find(class)
                .unwrap_or_else(|| panic!("{class} missing or out of order"));
            cursor += at + class.len();
        }
    }
}

#[test]
fn parse_failure_reports_line_and_content() {
    let source = "[CUP Optics]\nclass Ok { quality = 1; price = 10; };\nclass broken {\n";
    let err = catalog::parse(source).expect_err("broken item should abort");

    assert!(matches!(
        &err,
        CatalogError::MalformedLine { line_number: 3, content } if content == "class broken {"
    ));
}

#[test]
fn artifacts_round_trip_through_files() {
    let catalog = catalog::parse(SOURCE).expect("source should parse");
    let dir = tempfile::tempdir().expect("tempdir should be created");

    let classes = dir.path().join("configcpp.txt");
    let prices = dir.path().join("cupprices.txt");
    let loot = dir.path().join("lootgroups.h.txt");

    class_list::write_to_file(&classes, &catalog, 3).expect("class list should write");
    price_list::write_to_file(&prices, &catalog, 1).expect("price list should write");
    loot_groups::write_to_file(&loot, &catalog).expect("loot groups should write");

    let classes = std::fs::read_to_string(&classes).expect("file should be readable");
    assert_eq!(classes, class_list::format(&catalog, 3));

    let prices = std::fs::read_to_string(&prices).expect("file should be readable");
    assert_eq!(prices, price_list::format(&catalog, 1));

    let loot = std::fs::read_to_string(&loot).expect("file should be readable");
    assert!(loot.contains("> CUPOptics"));
}
