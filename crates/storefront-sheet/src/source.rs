use std::path::{Path, PathBuf};

use storefront_core::Product;

use crate::error::SheetError;
use crate::fetch::WorkbookFetcher;
use crate::reader::{load_products_from_json, load_products_from_path};
use crate::rows::ImportOptions;

/// Where a catalog is imported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// Local `.xlsx` workbook, or a `.json` catalog written by export.
    Path(PathBuf),
    /// `http://` or `https://` workbook URL.
    Url(String),
}

impl ImportSource {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImportSource::Url(trimmed.to_string())
        } else {
            ImportSource::Path(PathBuf::from(trimmed))
        }
    }

    /// Imports the catalog from this source.
    ///
    /// # Errors
    ///
    /// Propagates fetch, file and workbook errors for the source type.
    pub async fn load(
        &self,
        fetcher: &WorkbookFetcher,
        opts: &ImportOptions,
    ) -> Result<Vec<Product>, SheetError> {
        match self {
            ImportSource::Url(url) => fetcher.fetch_products(url, opts).await,
            ImportSource::Path(path) if is_json(path) => load_products_from_json(path),
            ImportSource::Path(path) => load_products_from_path(path, opts),
        }
    }
}

impl std::fmt::Display for ImportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportSource::Path(path) => write!(f, "{}", path.display()),
            ImportSource::Url(url) => f.write_str(url),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
