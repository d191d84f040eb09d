mod catalog;
mod render;
mod transfer;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use storefront_core::{Storage, SortKey, ViewMode, ViewQuery};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront product catalog: browse, filter, import and export")]
struct Cli {
    /// Catalog workbook path, `.json` catalog, or `http(s)` URL.
    /// Falls back to `STOREFRONT_SOURCE`, then to the demo catalog.
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the filtered, sorted catalog view
    List {
        #[command(flatten)]
        view: ViewArgs,
        /// Print model, storage and price only
        #[arg(long)]
        compact: bool,
    },
    /// Show one product by id
    Show { id: u32 },
    /// List the distinct category, color and storage values
    Facets,
    /// Report records with missing fields or invalid prices
    Validate,
    /// Export the loaded catalog
    Export {
        /// Output file (defaults to `STOREFRONT_EXPORT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,
    },
    /// Import a multi-sheet price matrix workbook and write it as JSON
    ConvertMatrix {
        workbook: PathBuf,
        #[arg(long, default_value = "products.json")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Xlsx,
    Json,
}

#[derive(Debug, Default, Args)]
struct ViewArgs {
    /// Exact category to show
    #[arg(long)]
    category: Option<String>,
    /// Exact color to show
    #[arg(long)]
    color: Option<String>,
    /// Storage capacity, e.g. `128`, `128 GB` or `N/A`
    #[arg(long)]
    storage: Option<String>,
    /// Case-insensitive text matched against model, category and color
    #[arg(long)]
    search: Option<String>,
    /// One of default, price-asc, price-desc, name
    #[arg(long, default_value = "default")]
    sort: String,
}

impl ViewArgs {
    fn to_query(&self) -> ViewQuery {
        ViewQuery {
            category: self.category.clone(),
            color: self.color.clone(),
            storage: self.storage.as_deref().map(Storage::parse_label),
            search: self.search.clone(),
            sort: SortKey::parse(&self.sort),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, view_mode = %config.view_mode, "configuration loaded");

    let cli = Cli::parse();
    let source = cli.source.or_else(|| config.source.clone());

    match cli.command {
        Some(Commands::List { view, compact }) => {
            let mode = if compact {
                ViewMode::Compact
            } else {
                config.view_mode
            };
            catalog::run_list(&config, source.as_deref(), &view.to_query(), mode).await
        }
        Some(Commands::Show { id }) => catalog::run_show(&config, source.as_deref(), id).await,
        Some(Commands::Facets) => catalog::run_facets(&config, source.as_deref()).await,
        Some(Commands::Validate) => catalog::run_validate(&config, source.as_deref()).await,
        Some(Commands::Export { output, format }) => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.export_path));
            transfer::run_export(&config, source.as_deref(), &output, format).await
        }
        Some(Commands::ConvertMatrix { workbook, output }) => {
            transfer::run_convert_matrix(&config, &workbook, &output)
        }
        None => {
            catalog::run_list(
                &config,
                source.as_deref(),
                &ViewQuery::default(),
                config.view_mode,
            )
            .await
        }
    }
}
