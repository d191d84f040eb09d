//! Plain-text rendering of a catalog view.

use std::fmt::{self, Write as _};

use storefront_core::{format_price, Product, ViewMode};

pub(crate) const EMPTY_TITLE: &str = "No products found";
pub(crate) const EMPTY_HINT: &str = "Try changing the filter settings";

const MODEL_WIDTH: usize = 40;

/// Render `products` as a table, or the empty state when there are none.
pub(crate) fn render_view(products: &[Product], mode: ViewMode) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if products.is_empty() {
        writeln!(out, "{EMPTY_TITLE}")?;
        writeln!(out, "{EMPTY_HINT}")?;
        return Ok(out);
    }

    match mode {
        ViewMode::Full => {
            writeln!(
                out,
                "{:<5}{:<42}{:<14}{:<16}{:<10}PRICE",
                "ID", "MODEL", "CATEGORY", "COLOR", "STORAGE"
            )?;
            for p in products {
                writeln!(
                    out,
                    "{:<5}{:<42}{:<14}{:<16}{:<10}{}",
                    p.id,
                    truncate(&p.model),
                    p.category,
                    p.color,
                    p.storage.to_string(),
                    format_price(p.price)
                )?;
            }
        }
        ViewMode::Compact => {
            for p in products {
                writeln!(
                    out,
                    "{:<42}{:<10}{}",
                    truncate(&p.model),
                    p.storage.to_string(),
                    format_price(p.price)
                )?;
            }
        }
    }
    Ok(out)
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MODEL_WIDTH {
        format!("{}...", text.chars().take(MODEL_WIDTH).collect::<String>())
    } else {
        text.to_string()
    }
}
