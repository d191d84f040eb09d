//! Import of the multi-sheet price matrix workbook.
//!
//! The matrix keeps one sheet per product group with the positional columns
//! `category, brand, lineup, model, submodel, variant, color, _, gb, price`.
//! Unlike the flat catalog layout, a row is only kept when it has a positive
//! price.

use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use storefront_core::{Product, Storage, ACCESSORIES_CATEGORY};

use crate::cell::Cell;
use crate::error::SheetError;
use crate::reader::range_to_rows;
use crate::rows::ImportOptions;

/// Product-group sheets read from a matrix workbook, in import order.
pub const MATRIX_SHEETS: [&str; 5] = ["Смартфоны", "Планшеты", "Ноутбуки", "Часы", "Наушники"];

/// Marker used in the matrix for "no value".
const DASH: &str = "—";

static EMPTY_CELL: Cell = Cell::Empty;

const COL_CATEGORY: usize = 0;
const COL_BRAND: usize = 1;
const COL_LINEUP: usize = 2;
const COL_MODEL: usize = 3;
const COL_SUBMODEL: usize = 4;
const COL_VARIANT: usize = 5;
const COL_COLOR: usize = 6;
const COL_GB: usize = 8;
const COL_PRICE: usize = 9;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixSummary {
    /// Imported product count per sheet, for sheets that were present.
    pub per_sheet: Vec<(String, usize)>,
    /// Imported product count per storefront category, in first-seen order.
    pub per_category: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixImport {
    pub products: Vec<Product>,
    pub summary: MatrixSummary,
}

/// Maps a matrix category and lineup to the storefront category.
#[must_use]
pub fn web_category(matrix_category: &str, lineup: &str) -> String {
    let has = |needles: &[&str], haystack: &str| needles.iter().any(|n| haystack.contains(n));

    if has(&["Смартфон", "Smartphone"], matrix_category) || lineup.contains("iPhone") {
        "iPhone".to_string()
    } else if has(&["Планшет", "Tablet"], matrix_category) || lineup.contains("iPad") {
        "iPad".to_string()
    } else if has(&["Ноутбук", "Laptop"], matrix_category) || lineup.contains("Mac") {
        "Mac".to_string()
    } else if has(&["Часы", "Watch"], matrix_category)
        || lineup.contains("Watch")
        || has(&["Наушники", "Headphones"], matrix_category)
        || lineup.contains("AirPods")
    {
        ACCESSORIES_CATEGORY.to_string()
    } else {
        matrix_category.to_string()
    }
}

/// Builds products from already-read matrix sheets.
///
/// Ids are assigned sequentially across all sheets, starting at 1.
#[must_use]
pub fn products_from_matrix_sheets(
    sheets: &[(String, Vec<Vec<Cell>>)],
    opts: &ImportOptions,
) -> MatrixImport {
    let mut import = MatrixImport::default();

    for (sheet_name, rows) in sheets {
        let before = import.products.len();
        for row in rows.iter().skip(1) {
            let next_id = u32::try_from(import.products.len() + 1).unwrap_or(u32::MAX);
            if let Some(product) = product_from_matrix_row(next_id, row, opts) {
                bump(&mut import.summary.per_category, &product.category);
                import.products.push(product);
            }
        }
        let imported = import.products.len() - before;
        tracing::debug!(sheet = %sheet_name, imported, "processed matrix sheet");
        import
            .summary
            .per_sheet
            .push((sheet_name.clone(), imported));
    }

    import
}

/// Opens a matrix workbook and imports every sheet listed in
/// [`MATRIX_SHEETS`] that it contains.
///
/// A listed sheet that cannot be read is logged and skipped.
///
/// # Errors
///
/// Returns [`SheetError::Workbook`] if the workbook itself cannot be opened.
pub fn load_matrix_from_path(path: &Path, opts: &ImportOptions) -> Result<MatrixImport, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| SheetError::Workbook {
        context: path.display().to_string(),
        source,
    })?;

    let available = workbook.sheet_names();
    let mut sheets = Vec::new();
    for name in MATRIX_SHEETS {
        if !available.iter().any(|s| s == name) {
            tracing::debug!(sheet = name, "matrix sheet not present");
            continue;
        }
        match workbook.worksheet_range(name) {
            Ok(range) => sheets.push((name.to_string(), range_to_rows(&range))),
            Err(e) => {
                tracing::warn!(sheet = name, error = %e, "skipping unreadable matrix sheet");
            }
        }
    }

    let import = products_from_matrix_sheets(&sheets, opts);
    tracing::info!(
        path = %path.display(),
        sheets = sheets.len(),
        imported = import.products.len(),
        "loaded matrix workbook"
    );
    Ok(import)
}

fn product_from_matrix_row(id: u32, row: &[Cell], opts: &ImportOptions) -> Option<Product> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);
    let text = |idx: usize| cell(idx).text_or_empty();

    let category = cell(COL_CATEGORY).as_text()?;
    if category.starts_with(DASH) || category.starts_with("Категория") {
        return None;
    }

    let brand = cell(COL_BRAND)
        .as_text()
        .unwrap_or_else(|| opts.default_brand.clone());
    let lineup = text(COL_LINEUP);

    let mut model = format!("{} {}", text(COL_MODEL), text(COL_SUBMODEL))
        .trim()
        .to_string();
    let variant = text(COL_VARIANT);
    if !variant.is_empty() && variant != DASH {
        model.push(' ');
        model.push_str(&variant);
    }

    let storage = match cell(COL_GB).as_text() {
        Some(gb) if gb != DASH && !gb.eq_ignore_ascii_case("nan") => Storage::parse_label(&gb),
        _ => Storage::NotApplicable,
    };

    let price = matrix_price(cell(COL_PRICE));
    let category = web_category(&category, &lineup);

    if model.is_empty() || category.is_empty() || price <= 0.0 {
        return None;
    }

    Some(Product {
        id,
        brand,
        category,
        model,
        price,
        color: text(COL_COLOR),
        storage,
    })
}

/// Whole-unit price. Text must be digits with optional dots; anything else
/// reads as 0.
fn matrix_price(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Text(s) => {
            let s = s.trim();
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.') {
                s.parse::<f64>().ok()
            } else {
                None
            }
        }
        other => other.as_number(),
    };
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map_or(0.0, f64::trunc)
}

fn bump(counts: &mut Vec<(String, usize)>, key: &str) {
    if let Some((_, count)) = counts.iter_mut().find(|(k, _)| k == key) {
        *count += 1;
    } else {
        counts.push((key.to_string(), 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    fn matrix_row(
        category: &str,
        brand: &str,
        lineup: &str,
        model: &str,
        submodel: &str,
        variant: &str,
        color: &str,
        gb: &str,
        price: Cell,
    ) -> Vec<Cell> {
        vec![
            Cell::from(category),
            Cell::from(brand),
            Cell::from(lineup),
            Cell::from(model),
            Cell::from(submodel),
            Cell::from(variant),
            Cell::from(color),
            Cell::Empty,
            Cell::from(gb),
            price,
        ]
    }

    fn header() -> Vec<Cell> {
        vec![Cell::from("Категория"), Cell::from("Бренд")]
    }

    fn import(sheets: Vec<(&str, Vec<Vec<Cell>>)>) -> MatrixImport {
        let sheets: Vec<(String, Vec<Vec<Cell>>)> = sheets
            .into_iter()
            .map(|(name, rows)| (name.to_string(), rows))
            .collect();
        products_from_matrix_sheets(&sheets, &ImportOptions::default())
    }

    #[test]
    fn builds_full_model_name_with_variant() {
        let result = import(vec![(
            "Смартфоны",
            vec![
                header(),
                matrix_row(
                    "Смартфон", "Apple", "iPhone 15", "iPhone 15", "Pro", "Max", "Black", "256",
                    Cell::Float(119_990.0),
                ),
            ],
        )]);
        let product = &result.products[0];
        assert_eq!(product.model, "iPhone 15 Pro Max");
        assert_eq!(product.category, "iPhone");
        assert_eq!(product.price, 119_990.0);
        assert_eq!(product.storage.to_string(), "256 GB");
    }

    #[test]
    fn dash_variant_is_ignored() {
        let result = import(vec![(
            "Смартфоны",
            vec![
                header(),
                matrix_row(
                    "Смартфон", "Apple", "iPhone 15", "iPhone 15", "", "—", "Blue", "128",
                    Cell::Int(79_990),
                ),
            ],
        )]);
        assert_eq!(result.products[0].model, "iPhone 15");
    }

    #[test]
    fn skips_separator_and_header_like_rows() {
        let result = import(vec![(
            "Планшеты",
            vec![
                header(),
                matrix_row("— iPad —", "", "", "", "", "", "", "", Cell::Empty),
                matrix_row("Категория", "Бренд", "", "", "", "", "", "", Cell::Empty),
                matrix_row("", "Apple", "iPad", "iPad Air", "", "", "Pink", "64", Cell::Int(1)),
                matrix_row(
                    "Планшет", "Apple", "iPad", "iPad Air", "", "", "Pink", "64",
                    Cell::Int(59_990),
                ),
            ],
        )]);
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].category, "iPad");
    }

    #[test]
    fn rows_without_positive_price_are_dropped() {
        let result = import(vec![(
            "Ноутбуки",
            vec![
                header(),
                matrix_row("Ноутбук", "Apple", "Mac", "MacBook Air", "M3", "", "Silver", "256", Cell::Empty),
                matrix_row("Ноутбук", "Apple", "Mac", "MacBook Air", "M3", "", "Silver", "256", Cell::from("on request")),
                matrix_row("Ноутбук", "Apple", "Mac", "MacBook Air", "M3", "", "Silver", "256", Cell::from("0")),
            ],
        )]);
        assert!(result.products.is_empty());
    }

    #[test]
    fn text_price_with_dot_is_truncated() {
        let result = import(vec![(
            "Ноутбуки",
            vec![
                header(),
                matrix_row(
                    "Ноутбук", "Apple", "Mac", "MacBook Air", "M3", "", "Silver", "256",
                    Cell::from("129990.50"),
                ),
            ],
        )]);
        assert_eq!(result.products[0].price, 129_990.0);
    }

    #[test]
    fn missing_gb_is_not_applicable() {
        let result = import(vec![(
            "Наушники",
            vec![
                header(),
                matrix_row("Наушники", "", "AirPods", "AirPods Pro", "2", "", "White", "—", Cell::Int(19_990)),
                matrix_row("Наушники", "", "AirPods", "AirPods", "4", "", "White", "nan", Cell::Int(12_990)),
            ],
        )]);
        assert!(result
            .products
            .iter()
            .all(|p| p.storage == Storage::NotApplicable));
        assert!(result.products.iter().all(|p| p.brand == "Apple"));
        assert!(result
            .products
            .iter()
            .all(|p| p.category == ACCESSORIES_CATEGORY));
    }

    #[test]
    fn ids_are_sequential_across_sheets() {
        let result = import(vec![
            (
                "Смартфоны",
                vec![
                    header(),
                    matrix_row("Смартфон", "Apple", "iPhone", "iPhone 15", "", "", "Blue", "128", Cell::Int(1)),
                    matrix_row("Смартфон", "Apple", "iPhone", "iPhone 15", "Plus", "", "Blue", "128", Cell::Int(2)),
                ],
            ),
            (
                "Часы",
                vec![
                    header(),
                    matrix_row("Часы", "Apple", "Watch", "Apple Watch", "S9", "", "Pink", "", Cell::Int(3)),
                ],
            ),
        ]);
        let ids: Vec<u32> = result.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            result.summary.per_sheet,
            vec![("Смартфоны".to_string(), 2), ("Часы".to_string(), 1)]
        );
        assert_eq!(
            result.summary.per_category,
            vec![
                ("iPhone".to_string(), 2),
                (ACCESSORIES_CATEGORY.to_string(), 1)
            ]
        );
    }

    #[test]
    fn web_category_mapping() {
        assert_eq!(web_category("Смартфоны", ""), "iPhone");
        assert_eq!(web_category("", "iPad Pro"), "iPad");
        assert_eq!(web_category("Ноутбуки", ""), "Mac");
        assert_eq!(web_category("Часы", ""), ACCESSORIES_CATEGORY);
        assert_eq!(web_category("", "AirPods Max"), ACCESSORIES_CATEGORY);
        assert_eq!(web_category("Колонки", "HomePod"), "Колонки");
    }
}
