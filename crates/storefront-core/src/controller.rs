//! Application context that owns the catalog and its derived view.
//!
//! Features that change the catalog (import) or the query (filter controls)
//! go through [`CatalogController`]; features that render subscribe to it.

use crate::products::Product;
use crate::view::{derive_view, ViewQuery};
use crate::view_mode::ViewMode;

/// Change notifications published by [`CatalogController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// The whole catalog was replaced, e.g. after an import.
    CatalogReplaced { count: usize },
    /// The derived view was recomputed.
    ViewChanged { shown: usize, total: usize },
}

/// Receives [`CatalogEvent`]s from a controller it is subscribed to.
pub trait CatalogObserver {
    fn on_event(&mut self, event: &CatalogEvent);
}

impl<F> CatalogObserver for F
where
    F: FnMut(&CatalogEvent),
{
    fn on_event(&mut self, event: &CatalogEvent) {
        self(event);
    }
}

pub struct CatalogController {
    catalog: Vec<Product>,
    query: ViewQuery,
    view: Vec<Product>,
    view_mode: ViewMode,
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("catalog_len", &self.catalog.len())
            .field("view_len", &self.view.len())
            .field("query", &self.query)
            .field("view_mode", &self.view_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CatalogController {
    /// Creates a controller whose view initially shows the whole catalog in
    /// id order.
    #[must_use]
    pub fn new(catalog: Vec<Product>, view_mode: ViewMode) -> Self {
        let query = ViewQuery::default();
        let view = derive_view(&catalog, &query);
        Self {
            catalog,
            query,
            view,
            view_mode,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CatalogObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the catalog wholesale and recomputes the view under the
    /// current query.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products;
        tracing::debug!(count = self.catalog.len(), "catalog replaced");
        self.notify(&CatalogEvent::CatalogReplaced {
            count: self.catalog.len(),
        });
        self.refresh_view();
    }

    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
        self.refresh_view();
    }

    /// Clears all facets, the search and the sort key.
    pub fn reset_query(&mut self) {
        self.query.reset();
        self.refresh_view();
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    #[must_use]
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Looks a product up by id in the full catalog, not just the view.
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// `"Showing X of Y products"` for the current view.
    #[must_use]
    pub fn counter_line(&self) -> String {
        format!(
            "Showing {} of {} products",
            self.view.len(),
            self.catalog.len()
        )
    }

    fn refresh_view(&mut self) {
        self.view = derive_view(&self.catalog, &self.query);
        self.notify(&CatalogEvent::ViewChanged {
            shown: self.view.len(),
            total: self.catalog.len(),
        });
    }

    fn notify(&mut self, event: &CatalogEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}
