use serde::{Deserialize, Serialize};

/// Unit appended to a capacity when it is shown to a shopper.
pub const CAPACITY_UNIT: &str = "GB";

/// Label used for products where storage capacity does not apply
/// (headphones, watches).
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

/// A single catalog entry as displayed on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 1-based source row position for imported records; stable literal for
    /// hand-authored ones. Unique within a catalog.
    pub id: u32,
    pub brand: String,
    pub category: String,
    pub model: String,
    /// Non-negative, currency agnostic.
    pub price: f64,
    pub color: String,
    pub storage: Storage,
}

impl Product {
    /// Returns `true` when the record carries the fields required to render a
    /// product card: a model name and a category.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        !self.model.is_empty() && !self.category.is_empty()
    }
}

/// Storage capacity of a product.
///
/// Serialized as its display label (`"128 GB"` or `"N/A"`) so catalog JSON
/// matches what the storefront renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Storage {
    /// Capacity text without the unit, e.g. `"128"` or `"1024"`.
    Capacity(String),
    NotApplicable,
}

impl Storage {
    /// Builds a capacity from raw cell text. Blank text means not applicable.
    #[must_use]
    pub fn from_capacity(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Storage::NotApplicable
        } else {
            Storage::Capacity(trimmed.to_string())
        }
    }

    /// Parses a display label (`"128 GB"`), a bare capacity (`"128"`), or the
    /// not-applicable sentinel (`"N/A"`, case-insensitive).
    ///
    /// The Cyrillic `ГБ` unit written by older catalog exports is accepted too.
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_APPLICABLE_LABEL) {
            return Storage::NotApplicable;
        }

        let bare = strip_unit(trimmed, CAPACITY_UNIT)
            .or_else(|| strip_unit(trimmed, "ГБ"))
            .unwrap_or(trimmed);
        Storage::from_capacity(bare)
    }

    /// The bare capacity, if any. This is the value written back to
    /// spreadsheets on export.
    #[must_use]
    pub fn capacity(&self) -> Option<&str> {
        match self {
            Storage::Capacity(c) => Some(c.as_str()),
            Storage::NotApplicable => None,
        }
    }

    #[must_use]
    pub fn is_applicable(&self) -> bool {
        matches!(self, Storage::Capacity(_))
    }
}

/// Strips a trailing unit (case-insensitive), with or without a separating
/// space. Returns `None` when the unit is absent.
fn strip_unit<'a>(label: &'a str, unit: &str) -> Option<&'a str> {
    let split = label.len().checked_sub(unit.len())?;
    if !label.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = label.split_at(split);
    if tail.to_lowercase() == unit.to_lowercase() {
        Some(head.trim_end())
    } else {
        None
    }
}

impl std::fmt::Display for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Storage::Capacity(c) => write!(f, "{c} {CAPACITY_UNIT}"),
            Storage::NotApplicable => f.write_str(NOT_APPLICABLE_LABEL),
        }
    }
}

impl From<Storage> for String {
    fn from(storage: Storage) -> Self {
        storage.to_string()
    }
}

impl From<String> for Storage {
    fn from(label: String) -> Self {
        Storage::parse_label(&label)
    }
}
