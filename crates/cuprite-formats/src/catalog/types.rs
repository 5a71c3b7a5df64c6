use thiserror::Error;

/// A single item declaration from the catalog
///
/// Immutable once parsed; `price` is the normalized sale price, not the raw
/// value from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Class name identifier, non-empty
    pub classname: String,
    /// Single-digit quality code; its meaning is external to this crate
    pub quality: u8,
    /// Normalized sale price
    pub price: u32,
}

impl Item {
    /// Create a new item
    pub fn new(classname: impl Into<String>, quality: u8, price: u32) -> Self {
        Self {
            classname: classname.into(),
            quality,
            price,
        }
    }
}

/// A named, ordered group of items from one `[Header]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    header: String,
    items: Vec<Item>,
}

impl Category {
    /// Create an empty category
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            items: Vec::new(),
        }
    }

    /// Get the category header name
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Get the items in file-appearance order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append an item, keeping appearance order
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Get the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the category holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors that can occur while parsing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A line that is neither a header, an ignorable comment/blank line,
    /// nor a well-formed item declaration
    #[error("Malformed line {line_number}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the input
        line_number: usize,
        /// The offending line content
        content: String,
    },

    /// IO error while reading the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
