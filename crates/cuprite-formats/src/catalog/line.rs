//! Line classification for the catalog format
//!
//! Every input line is exactly one of three kinds: a `[Header]` section
//! line, an ignorable comment/blank line, or an item declaration. A line
//! that fits none of the three is malformed and aborts the parse.

/// Maximum header name length in characters
const MAX_HEADER_LEN: usize = 32;

/// Maximum number of digits in a raw price
const MAX_PRICE_DIGITS: usize = 4;

/// A classified catalog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A `[Header]` section line; carries the bracket contents
    Header(&'a str),
    /// A blank line or comment line, carrying nothing
    Ignorable,
    /// An item declaration line
    Item {
        /// Class name identifier
        classname: &'a str,
        /// Single-digit quality code
        quality: u8,
        /// Raw price before normalization
        price: u32,
    },
}

impl<'a> Line<'a> {
    /// Classify one line of catalog text
    ///
    /// Returns `None` for a malformed line: not a header, not ignorable,
    /// and not a well-formed item declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuprite_formats::catalog::Line;
    ///
    /// assert_eq!(Line::classify("[CUP Optics]"), Some(Line::Header("CUP Optics")));
    /// assert_eq!(Line::classify("// comment"), Some(Line::Ignorable));
    /// assert_eq!(
    ///     Line::classify("class CUP_optic_Holo { quality = 2; price = 100; };"),
    ///     Some(Line::Item { classname: "CUP_optic_Holo", quality: 2, price: 100 })
    /// );
    /// assert_eq!(Line::classify("not a valid line"), None);
    /// ```
    #[must_use]
    pub fn classify(line: &'a str) -> Option<Self> {
        if let Some(name) = parse_header(line) {
            return Some(Self::Header(name));
        }
        if is_ignorable(line) {
            return Some(Self::Ignorable);
        }
        parse_item(line)
    }
}

/// Parse a `[Header]` line, returning the bracket contents
///
/// Header names are 1-32 characters drawn from letters, digits, space,
/// hyphen and underscore.
fn parse_header(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix('[')?;
    let name = rest.strip_suffix(']')?;
    let len = name.chars().count();
    if len == 0 || len > MAX_HEADER_LEN {
        return None;
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
    {
        Some(name)
    } else {
        None
    }
}

/// Check whether a line carries no content
///
/// Blank lines, runs of `/` or `#` comment markers (after leading
/// whitespace), and `*/`/`*#` block-comment edges are all ignorable.
fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty()
        || trimmed.starts_with(['/', '#'])
        || trimmed.starts_with("*/")
        || trimmed.starts_with("*#")
}

/// Parse an item declaration line
///
/// Expected shape: `class <NAME> { quality = <D>; price = <P>; };` where
/// `<D>` is exactly one digit and `<P>` is 1-4 digits. Surrounding
/// whitespace is tolerated; anything after the price field is not
/// inspected.
fn parse_item(line: &str) -> Option<Line<'_>> {
    let rest = line.trim().strip_prefix("class")?;
    // The keyword must be followed by whitespace, not more identifier
    let after_keyword = rest.trim_start();
    if after_keyword.len() == rest.len() {
        return None;
    }

    let name_end = after_keyword
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after_keyword.len());
    let (classname, rest) = after_keyword.split_at(name_end);
    if classname.is_empty() {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('{')?;
    let (quality_digits, rest) = parse_field(rest, "quality")?;
    if quality_digits.len() != 1 {
        return None;
    }
    let (price_digits, _rest) = parse_field(rest, "price")?;
    if price_digits.is_empty() || price_digits.len() > MAX_PRICE_DIGITS {
        return None;
    }

    // Lengths are bounded, so the numeric parses cannot overflow
    let quality = quality_digits.parse::<u8>().ok()?;
    let price = price_digits.parse::<u32>().ok()?;

    Some(Line::Item {
        classname,
        quality,
        price,
    })
}

/// Parse one `<key> = <digits>;` field, returning the digits and the
/// remaining input after the terminating semicolon
fn parse_field<'a>(input: &'a str, key: &str) -> Option<(&'a str, &'a str)> {
    let rest = input.trim_start().strip_prefix(key)?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start();

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    let rest = rest[digits_end..].trim_start().strip_prefix(';')?;

    Some((digits, rest))
}
