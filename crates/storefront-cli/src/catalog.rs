//! Catalog loading and the read-only browse commands.
//!
//! Every command starts from the demo catalog and, when a source is
//! configured, replaces it with the imported one. An import failure is
//! logged, announced with a banner on stderr, and the demo catalog stays.

use storefront_core::{
    demo_catalog, format_price, validate_products, AppConfig, CatalogController, CatalogEvent,
    FacetOptions, Product, ViewMode, ViewQuery,
};
use storefront_sheet::{ImportOptions, ImportSource, SheetError, WorkbookFetcher};

use crate::render::render_view;

pub(crate) const FALLBACK_BANNER: &str =
    "Failed to load catalog from spreadsheet; using demo data.";

pub(crate) fn import_options(config: &AppConfig) -> ImportOptions {
    ImportOptions {
        default_brand: config.default_brand.clone(),
    }
}

/// Builds the controller for a command run, importing from `source` when set.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed; import
/// failures fall back to the demo catalog.
pub(crate) async fn load_controller(
    config: &AppConfig,
    source: Option<&str>,
    view_mode: ViewMode,
) -> anyhow::Result<CatalogController> {
    let mut controller = CatalogController::new(demo_catalog(), view_mode);
    controller.subscribe(|event: &CatalogEvent| match event {
        CatalogEvent::CatalogReplaced { count } => {
            tracing::info!(count, "catalog replaced from import");
        }
        CatalogEvent::ViewChanged { shown, total } => {
            tracing::debug!(shown, total, "view recomputed");
        }
    });

    let Some(raw) = source else {
        tracing::debug!("no catalog source configured; using demo catalog");
        return Ok(controller);
    };

    let source = ImportSource::parse(raw);
    let fetcher = WorkbookFetcher::new(config.fetch_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build workbook fetcher: {e}"))?;

    let imported = source.load(&fetcher, &import_options(config)).await;
    apply_import(&mut controller, &source, imported);
    Ok(controller)
}

/// Installs an import result, returning the facet options rebuilt from it.
///
/// On failure the current catalog is kept and `None` is returned.
pub(crate) fn apply_import(
    controller: &mut CatalogController,
    source: &ImportSource,
    imported: Result<Vec<Product>, SheetError>,
) -> Option<FacetOptions> {
    match imported {
        Ok(products) => {
            let options = FacetOptions::from_products(&products);
            tracing::info!(
                categories = options.categories.len(),
                colors = options.colors.len(),
                storages = options.storages.len(),
                "facet options rebuilt from import"
            );
            controller.replace_catalog(products);
            Some(options)
        }
        Err(e) => {
            tracing::error!(source = %source, error = %e, "catalog import failed");
            eprintln!("{FALLBACK_BANNER}");
            None
        }
    }
}

/// Print the counter line and the view for `query`.
pub(crate) async fn run_list(
    config: &AppConfig,
    source: Option<&str>,
    query: &ViewQuery,
    view_mode: ViewMode,
) -> anyhow::Result<()> {
    let mut controller = load_controller(config, source, view_mode).await?;
    controller.set_query(query.clone());

    println!("{}", controller.counter_line());
    print!("{}", render_view(controller.view(), controller.view_mode())?);
    Ok(())
}

/// Print one product's detail, looked up in the full catalog.
///
/// # Errors
///
/// Returns an error if no product has `id`.
pub(crate) async fn run_show(
    config: &AppConfig,
    source: Option<&str>,
    id: u32,
) -> anyhow::Result<()> {
    let controller = load_controller(config, source, config.view_mode).await?;
    let product = controller
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("product {id} not found"))?;

    println!("{}", product.model);
    println!("  brand:    {}", product.brand);
    println!("  category: {}", product.category);
    println!("  color:    {}", product.color);
    println!("  storage:  {}", product.storage);
    println!("  price:    {}", format_price(product.price));
    Ok(())
}

pub(crate) async fn run_facets(config: &AppConfig, source: Option<&str>) -> anyhow::Result<()> {
    let controller = load_controller(config, source, config.view_mode).await?;
    let options = FacetOptions::from_products(controller.catalog());

    println!("categories: {}", options.categories.join(", "));
    println!("colors:     {}", options.colors.join(", "));
    let storages: Vec<String> = options.storages.iter().map(ToString::to_string).collect();
    println!("storage:    {}", storages.join(", "));
    Ok(())
}

/// Print the validation report.
///
/// # Errors
///
/// Returns an error when the catalog has any issue, so the process exits
/// non-zero.
pub(crate) async fn run_validate(config: &AppConfig, source: Option<&str>) -> anyhow::Result<()> {
    let controller = load_controller(config, source, config.view_mode).await?;
    let report = validate_products(controller.catalog());

    if report.is_valid() {
        println!("catalog is valid: {} products", controller.catalog().len());
        return Ok(());
    }

    for issue in &report.issues {
        println!("{issue}");
    }
    anyhow::bail!(
        "catalog has {} validation issue(s) across {} products",
        report.issues.len(),
        controller.catalog().len()
    )
}
