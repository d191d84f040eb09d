//! Positional mapping from worksheet rows to [`storefront_core::Product`]s.
//!
//! Columns A–F are Model, Brand, Category, Price, Color, Capacity; row 0 is
//! the header. Malformed rows are defaulted or skipped, never reported.

use storefront_core::{Product, Storage};

use crate::cell::Cell;

/// Rows with fewer cells than this produce no record.
pub const MIN_ROW_CELLS: usize = 6;

const COL_MODEL: usize = 0;
const COL_BRAND: usize = 1;
const COL_CATEGORY: usize = 2;
const COL_PRICE: usize = 3;
const COL_COLOR: usize = 4;
const COL_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Brand used when the brand cell is blank.
    pub default_brand: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            default_brand: "Apple".to_string(),
        }
    }
}

/// Maps header-prefixed rows to products.
///
/// Each product's id is the row's position in `rows` (the first data row is
/// 1), so skipped rows leave gaps in the id sequence.
#[must_use]
pub fn products_from_rows(rows: &[Vec<Cell>], opts: &ImportOptions) -> Vec<Product> {
    let products: Vec<Product> = rows
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(position, row)| product_from_row(position, row, opts))
        .collect();

    tracing::debug!(
        rows = rows.len().saturating_sub(1),
        imported = products.len(),
        "normalized worksheet rows"
    );
    products
}

fn product_from_row(position: usize, row: &[Cell], opts: &ImportOptions) -> Option<Product> {
    if row.len() < MIN_ROW_CELLS {
        return None;
    }
    let id = u32::try_from(position).ok()?;

    let model = row[COL_MODEL].text_or_empty();
    let category = row[COL_CATEGORY].text_or_empty();
    if model.is_empty() || category.is_empty() {
        return None;
    }

    let brand = row[COL_BRAND]
        .as_text()
        .unwrap_or_else(|| opts.default_brand.clone());

    // Unparsable, non-finite and negative prices all read as 0.
    let price = row[COL_PRICE]
        .as_number()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0);

    let storage = row[COL_CAPACITY]
        .as_text()
        .map_or(Storage::NotApplicable, |raw| Storage::parse_label(&raw));

    Some(Product {
        id,
        brand,
        category,
        model,
        price,
        color: row[COL_COLOR].text_or_empty(),
        storage,
    })
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;
