//! Workbook loading: first worksheet of an `.xlsx` file to ragged rows.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use storefront_core::Product;

use crate::cell::Cell;
use crate::error::SheetError;
use crate::rows::{products_from_rows, ImportOptions};

/// Reads the first worksheet of the workbook at `path`.
///
/// # Errors
///
/// Returns [`SheetError::Workbook`] if the file cannot be opened or parsed as
/// `.xlsx`, or [`SheetError::NoWorksheet`] if it contains no sheets.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<Vec<Cell>>, SheetError> {
    let context = path.display().to_string();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| SheetError::Workbook {
        context: context.clone(),
        source,
    })?;
    first_sheet_rows(&mut workbook, &context)
}

/// Reads the first worksheet of an in-memory `.xlsx` workbook.
///
/// # Errors
///
/// Same as [`read_rows_from_path`].
pub fn read_rows_from_bytes(bytes: Vec<u8>) -> Result<Vec<Vec<Cell>>, SheetError> {
    let context = "<memory>".to_string();
    let mut workbook = open_workbook_bytes(bytes, &context)?;
    first_sheet_rows(&mut workbook, &context)
}

pub(crate) fn open_workbook_bytes(
    bytes: Vec<u8>,
    context: &str,
) -> Result<Xlsx<Cursor<Vec<u8>>>, SheetError> {
    Xlsx::new(Cursor::new(bytes)).map_err(|source| SheetError::Workbook {
        context: context.to_string(),
        source,
    })
}

fn first_sheet_rows<RS>(workbook: &mut Xlsx<RS>, context: &str) -> Result<Vec<Vec<Cell>>, SheetError>
where
    RS: Read + Seek,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheet {
            context: context.to_string(),
        })?
        .map_err(|source| SheetError::Workbook {
            context: context.to_string(),
            source,
        })?;
    Ok(range_to_rows(&range))
}

/// Converts a worksheet range into ragged rows anchored at cell A1.
///
/// calamine ranges start at the first used cell, so leading empty rows and
/// columns are restored here to keep positional column mapping and row ids
/// stable. Trailing empty cells are dropped from each row.
#[must_use]
pub fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<Cell>> = (0..start_row).map(|_| Vec::new()).collect();
    for raw in range.rows() {
        let mut row: Vec<Cell> = (0..start_col).map(|_| Cell::Empty).collect();
        row.extend(raw.iter().map(Cell::from));
        while matches!(row.last(), Some(Cell::Empty)) {
            row.pop();
        }
        rows.push(row);
    }
    rows
}

/// Reads and normalizes the first worksheet at `path`.
///
/// # Errors
///
/// Propagates workbook read failures; malformed rows are skipped, not errors.
pub fn load_products_from_path(path: &Path, opts: &ImportOptions) -> Result<Vec<Product>, SheetError> {
    let rows = read_rows_from_path(path)?;
    let products = products_from_rows(&rows, opts);
    tracing::info!(path = %path.display(), imported = products.len(), "loaded catalog workbook");
    Ok(products)
}

/// Reads and normalizes the first worksheet of an in-memory workbook.
///
/// # Errors
///
/// Propagates workbook read failures; malformed rows are skipped, not errors.
pub fn load_products_from_bytes(bytes: Vec<u8>, opts: &ImportOptions) -> Result<Vec<Product>, SheetError> {
    let rows = read_rows_from_bytes(bytes)?;
    Ok(products_from_rows(&rows, opts))
}

/// Reads a catalog previously written by [`crate::export::export_json`].
///
/// # Errors
///
/// Returns [`SheetError::Io`] if the file cannot be read or
/// [`SheetError::Json`] if it is not a product list.
pub fn load_products_from_json(path: &Path) -> Result<Vec<Product>, SheetError> {
    let context = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| SheetError::Io {
        path: context.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SheetError::Json { context, source })
}
