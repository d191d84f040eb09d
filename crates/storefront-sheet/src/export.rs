//! Catalog export to `.xlsx` and JSON.
//!
//! The workbook layout is the import layout: header row, then
//! Model, Brand, Category, Price, Color, GB with the capacity unit stripped.
//! Storage that does not apply is written as `N/A` so the row keeps all six
//! cells on re-import.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use storefront_core::{Product, NOT_APPLICABLE_LABEL};

use crate::error::SheetError;

pub const DEFAULT_EXPORT_FILE: &str = "products.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Products";
pub const EXPORT_HEADER: [&str; 6] = ["Model", "Brand", "Category", "Price", "Color", "GB"];

/// Highest data row a worksheet can hold below the header.
const MAX_DATA_ROWS: u32 = 1_048_575;

fn build_workbook(products: &[Product]) -> Result<Workbook, SheetError> {
    if products.len() > MAX_DATA_ROWS as usize {
        return Err(SheetError::TooManyRows {
            rows: products.len(),
            max: MAX_DATA_ROWS,
        });
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, title) in (0u16..).zip(EXPORT_HEADER) {
        worksheet.write_string(0, col, title)?;
    }

    for (row, product) in (1u32..).zip(products) {
        write_text(worksheet, row, 0, &product.model)?;
        write_text(worksheet, row, 1, &product.brand)?;
        write_text(worksheet, row, 2, &product.category)?;
        worksheet.write_number(row, 3, product.price)?;
        write_text(worksheet, row, 4, &product.color)?;
        let capacity = product.storage.capacity().unwrap_or(NOT_APPLICABLE_LABEL);
        write_text(worksheet, row, 5, capacity)?;
    }

    Ok(workbook)
}

/// Blank labels are left as empty cells so they re-import as blank.
fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, text: &str) -> Result<(), SheetError> {
    if !text.is_empty() {
        worksheet.write_string(row, col, text)?;
    }
    Ok(())
}

/// Writes `products` to an `.xlsx` workbook at `path`.
///
/// # Errors
///
/// Returns [`SheetError::Write`] if the workbook cannot be built or saved.
pub fn export_xlsx(products: &[Product], path: &Path) -> Result<(), SheetError> {
    let mut workbook = build_workbook(products)?;
    workbook.save(path)?;
    tracing::info!(path = %path.display(), exported = products.len(), "exported catalog workbook");
    Ok(())
}

/// Builds the export workbook in memory.
///
/// # Errors
///
/// Returns [`SheetError::Write`] if the workbook cannot be built.
pub fn export_xlsx_to_buffer(products: &[Product]) -> Result<Vec<u8>, SheetError> {
    let mut workbook = build_workbook(products)?;
    Ok(workbook.save_to_buffer()?)
}

/// Pretty-printed JSON for `products`.
///
/// # Errors
///
/// Returns [`SheetError::Json`] if serialization fails.
pub fn to_json_string(products: &[Product]) -> Result<String, SheetError> {
    serde_json::to_string_pretty(products).map_err(|source| SheetError::Json {
        context: "catalog".to_string(),
        source,
    })
}

/// Writes `products` as pretty-printed UTF-8 JSON to `path`.
///
/// # Errors
///
/// Returns [`SheetError::Json`] on serialization failure or
/// [`SheetError::Io`] if the file cannot be written.
pub fn export_json(products: &[Product], path: &Path) -> Result<(), SheetError> {
    let json = to_json_string(products)?;
    std::fs::write(path, json).map_err(|source| SheetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), exported = products.len(), "exported catalog json");
    Ok(())
}
