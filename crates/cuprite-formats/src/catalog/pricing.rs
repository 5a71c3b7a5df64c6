//! Price normalization applied while parsing
//!
//! Every raw catalog price gets a randomized markup keyed on the current
//! category header, is rounded to a sale-friendly step, and is clamped to
//! a floor of 10. The markup draw makes prices vary run-to-run by design;
//! callers that need determinism pass a seeded RNG.

use rand::RngExt;

/// Headers that take the high markup band (20-30)
const HIGH_MARKUP_HEADERS: &[&str] = &["CUP Optics", "CUP RailAttachments"];

/// Headers that take the low markup band (10-20)
const LOW_MARKUP_HEADERS: &[&str] = &["CUP Light Ammo", "CUP Heavy Ammo", "CUP Muzzle Attachments"];

/// Lowest sale price ever produced
pub const MIN_PRICE: u32 = 10;

/// Prices at or above this round to steps of 50 instead of 10
const COARSE_ROUNDING_THRESHOLD: u32 = 300;

/// Round a price to its sale step
///
/// Prices below 300 round to the nearest multiple of 10, prices at 300 and
/// above to the nearest multiple of 50. Ties round up.
///
/// # Examples
///
/// ```
/// use cuprite_formats::catalog::pricing::round_price;
///
/// assert_eq!(round_price(123), 120);
/// assert_eq!(round_price(125), 130);
/// assert_eq!(round_price(299), 300);
/// assert_eq!(round_price(320), 300);
/// assert_eq!(round_price(1330), 1350);
/// ```
#[must_use]
pub fn round_price(price: u32) -> u32 {
    if price >= COARSE_ROUNDING_THRESHOLD {
        (price + 25) / 50 * 50
    } else {
        (price + 5) / 10 * 10
    }
}

/// Draw the markup for a category header
///
/// Optics and rail attachments take 20-30, ammo and muzzle attachments
/// 10-20, everything else 10-30, always in steps of 10. The header lists
/// are checked in that fixed precedence order.
fn markup<R: RngExt>(header: &str, rng: &mut R) -> u32 {
    let steps = if HIGH_MARKUP_HEADERS.contains(&header) {
        rng.random_range(2..=3)
    } else if LOW_MARKUP_HEADERS.contains(&header) {
        rng.random_range(1..=2)
    } else {
        rng.random_range(1..=3)
    };
    steps * 10
}

/// Compute the normalized sale price for a raw base price
///
/// Adds the category markup, rounds via [`round_price`], and clamps the
/// result to [`MIN_PRICE`]. Cannot fail.
pub fn normalize_price<R: RngExt>(base: u32, header: &str, rng: &mut R) -> u32 {
    round_price(base + markup(header, rng)).max(MIN_PRICE)
}
