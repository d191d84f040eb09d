//! Derivation of the rendered view from the full catalog.
//!
//! The view is a pure function of `(catalog, query)`: it is rebuilt from
//! scratch on every change and never mutates the catalog.

use std::cmp::Ordering;

use crate::products::{Product, Storage};

/// Ordering applied to the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog id ascending.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Model name, case-insensitive.
    Name,
}

impl SortKey {
    /// Parses a sort selector value. Unrecognized values select
    /// [`SortKey::Default`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "name" => SortKey::Name,
            _ => SortKey::Default,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Name => "name",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facet selections, free-text search and sort key for one view.
///
/// `None` facets match every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    pub storage: Option<Storage>,
    pub search: Option<String>,
    pub sort: SortKey,
}

impl ViewQuery {
    /// Clears every facet, the search text and the sort key.
    pub fn reset(&mut self) {
        *self = ViewQuery::default();
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.color.is_none()
            && self.storage.is_none()
            && self.search_needle().is_none()
    }

    /// Lowercased, trimmed search text; `None` when blank.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns `true` when `product` passes every active facet and the search.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_needle(product, self.search_needle().as_deref())
    }

    fn matches_with_needle(&self, product: &Product, needle: Option<&str>) -> bool {
        let category_match = self
            .category
            .as_deref()
            .is_none_or(|c| product.category == c);
        let color_match = self.color.as_deref().is_none_or(|c| product.color == c);
        let storage_match = self.storage.as_ref().is_none_or(|s| &product.storage == s);
        let search_match = needle.is_none_or(|q| {
            product.model.to_lowercase().contains(q)
                || product.category.to_lowercase().contains(q)
                || product.color.to_lowercase().contains(q)
        });

        category_match && color_match && storage_match && search_match
    }
}

/// Builds the view for `query` from `catalog`.
///
/// Filtering is conjunctive across facets and search. Sorting is stable, so
/// products that compare equal keep their catalog order.
#[must_use]
pub fn derive_view(catalog: &[Product], query: &ViewQuery) -> Vec<Product> {
    let needle = query.search_needle();
    let mut view: Vec<Product> = catalog
        .iter()
        .filter(|p| query.matches_with_needle(p, needle.as_deref()))
        .cloned()
        .collect();

    sort_products(&mut view, query.sort);
    view
}

/// Sorts `products` in place by `key`.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => products.sort_by_key(|p| p.id),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Name => products.sort_by(|a, b| compare_names(&a.model, &b.model)),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
