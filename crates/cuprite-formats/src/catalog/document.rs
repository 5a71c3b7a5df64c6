use crate::catalog::types::{Category, Item};
use std::collections::HashMap;

/// Pseudo-header active before any `[Header]` line has been seen
///
/// Real inputs start with a header line, so nothing normally lands in this
/// bucket, but the parser supports it without failure.
pub const DEFAULT_HEADER: &str = "errors";

/// A complete parsed catalog: categories in first-appearance order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Categories in the order their headers first appeared
    categories: Vec<Category>,
    /// Header name to position in `categories`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under a header, creating the category on first use
    ///
    /// Category order is fixed by the first appearance of each header;
    /// later items for a known header join the existing category.
    pub fn push_item(&mut self, header: &str, item: Item) {
        let position = *self.index.entry(header.to_string()).or_insert_with(|| {
            self.categories.push(Category::new(header));
            self.categories.len() - 1
        });
        self.categories[position].push(item);
    }

    /// Get all categories in first-appearance order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by header name
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&Category> {
        self.index.get(header).map(|&i| &self.categories[i])
    }

    /// Get the number of categories
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Get the total number of items across all categories
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Check whether the catalog holds no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Create an iterator over categories
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Flatten the catalog into a deduplicated class index
    ///
    /// Iterates categories in order and upserts every item by class name:
    /// a repeated class name keeps its first-seen position but takes the
    /// later occurrence's quality and price.
    #[must_use]
    pub fn class_index(&self) -> ClassIndex {
        let mut class_index = ClassIndex::default();
        for category in &self.categories {
            for item in category.items() {
                class_index.upsert(item);
            }
        }
        class_index
    }
}

/// Deduplicated, order-preserving view of every class in a catalog
///
/// Derived from [`Catalog::class_index`]; entries iterate in first-seen
/// order regardless of later overwrites.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    entries: Vec<Item>,
    index: HashMap<String, usize>,
}

impl ClassIndex {
    /// Insert or update an entry
    ///
    /// A new class name is appended; a known one keeps its position and
    /// takes the new quality and price.
    pub fn upsert(&mut self, item: &Item) {
        match self.index.get(&item.classname) {
            Some(&position) => self.entries[position] = item.clone(),
            None => {
                self.index.insert(item.classname.clone(), self.entries.len());
                self.entries.push(item.clone());
            }
        }
    }

    /// Get the entries in first-seen order
    #[must_use]
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    /// Get the number of distinct class names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
