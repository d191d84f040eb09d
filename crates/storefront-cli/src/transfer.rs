//! Export and matrix conversion command handlers.

use std::path::Path;

use storefront_core::AppConfig;
use storefront_sheet::{export_json, export_xlsx, load_matrix_from_path, to_json_string};

use crate::catalog::{import_options, load_controller};
use crate::ExportFormat;

/// Export the full loaded catalog (never the filtered view).
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) async fn run_export(
    config: &AppConfig,
    source: Option<&str>,
    output: &Path,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let controller = load_controller(config, source, config.view_mode).await?;
    let products = controller.catalog();

    let written = match format {
        ExportFormat::Xlsx => export_xlsx(products, output),
        ExportFormat::Json => export_json(products, output),
    };
    if let Err(e) = written {
        tracing::error!(path = %output.display(), error = %e, "catalog export failed");
        return Err(e.into());
    }

    tracing::info!(path = %output.display(), count = products.len(), "catalog exported");
    println!("exported {} products to {}", products.len(), output.display());
    Ok(())
}

/// Convert a price matrix workbook into a JSON catalog.
///
/// Prints imported counts per source sheet and per web category.
///
/// # Errors
///
/// Returns an error if the workbook cannot be opened or the JSON cannot be
/// written.
pub(crate) fn run_convert_matrix(
    config: &AppConfig,
    workbook: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let import = load_matrix_from_path(workbook, &import_options(config))?;

    if import.products.is_empty() {
        println!("no products found in {}", workbook.display());
    }

    for (sheet, count) in &import.summary.per_sheet {
        println!("{sheet}: {count} products");
    }
    println!();
    println!("{:<24}COUNT", "CATEGORY");
    for (category, count) in &import.summary.per_category {
        println!("{category:<24}{count}");
    }

    if output.as_os_str() == "-" {
        println!("{}", to_json_string(&import.products)?);
    } else {
        export_json(&import.products, output)?;
        println!(
            "wrote {} products to {}",
            import.products.len(),
            output.display()
        );
    }
    Ok(())
}
