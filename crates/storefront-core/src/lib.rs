pub mod app_config;
pub mod config;
pub mod controller;
pub mod demo;
pub mod error;
pub mod facets;
pub mod format;
pub mod products;
pub mod validation;
pub mod view;
pub mod view_mode;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use controller::{CatalogController, CatalogEvent, CatalogObserver};
pub use demo::{demo_catalog, ACCESSORIES_CATEGORY};
pub use error::ConfigError;
pub use facets::FacetOptions;
pub use format::format_price;
pub use products::{Product, Storage, CAPACITY_UNIT, NOT_APPLICABLE_LABEL};
pub use validation::{validate_products, IssueKind, ValidationIssue, ValidationReport};
pub use view::{derive_view, sort_products, SortKey, ViewQuery};
pub use view_mode::ViewMode;
