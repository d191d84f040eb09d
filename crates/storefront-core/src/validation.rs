//! Data-quality report for a loaded catalog.
//!
//! Validation never removes records: the storefront still shows whatever was
//! imported, and the report is surfaced separately (the `validate` command).

use crate::products::Product;

/// A field-level problem found on one catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    MissingModel,
    MissingCategory,
    /// Price is zero, negative, or not a finite number.
    InvalidPrice,
    MissingColor,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::MissingModel => write!(f, "missing model"),
            IssueKind::MissingCategory => write!(f, "missing category"),
            IssueKind::InvalidPrice => write!(f, "invalid price"),
            IssueKind::MissingColor => write!(f, "missing color"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 1-based position of the record in the validated list.
    pub position: usize,
    pub product_id: u32,
    pub kind: IssueKind,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {} (product {}): {}",
            self.position, self.product_id, self.kind
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks every record for a model, category, positive price and color.
///
/// Issues are listed in record order, and within a record in the order
/// model, category, price, color.
#[must_use]
pub fn validate_products(products: &[Product]) -> ValidationReport {
    let mut issues = Vec::new();

    for (idx, product) in products.iter().enumerate() {
        let mut push = |kind| {
            issues.push(ValidationIssue {
                position: idx + 1,
                product_id: product.id,
                kind,
            });
        };

        if product.model.is_empty() {
            push(IssueKind::MissingModel);
        }
        if product.category.is_empty() {
            push(IssueKind::MissingCategory);
        }
        if !product.price.is_finite() || product.price <= 0.0 {
            push(IssueKind::InvalidPrice);
        }
        if product.color.is_empty() {
            push(IssueKind::MissingColor);
        }
    }

    ValidationReport { issues }
}
