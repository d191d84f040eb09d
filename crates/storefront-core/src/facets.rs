use std::collections::HashSet;

use crate::products::{Product, Storage};

/// Distinct values offered by each facet selector, in first-seen catalog
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub colors: Vec<String>,
    pub storages: Vec<Storage>,
}

impl FacetOptions {
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            categories: distinct(products.iter().map(|p| p.category.clone())),
            colors: distinct(products.iter().map(|p| p.color.clone())),
            storages: distinct(products.iter().map(|p| p.storage.clone())),
        }
    }
}

fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
    I: Iterator<Item = T>,
{
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
