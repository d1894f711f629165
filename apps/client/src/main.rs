//! # Storefront CLI
//!
//! ```text
//! storefront cart list | add <id> | remove <id> | clear
//! storefront catalog billboard <id> | categories | category <id> [--size-id --color-id]
//!                    colors | sizes | filters | product <id>
//!                    products [--category-id --size-id --color-id --featured]
//! storefront home
//! storefront product <id>
//! storefront preview <id>
//! storefront config show | init [--force]
//! ```
//!
//! Results are printed as JSON on stdout. Failures are printed as an
//! `ApiError` JSON object on stderr with a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use storefront_client::commands::{cart, catalog, preview};
use storefront_client::config::ClientConfig;
use storefront_client::error::{ApiError, ApiResult};
use storefront_client::notify::LogSink;
use storefront_client::{init_tracing, Storefront};
use storefront_core::ProductQuery;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront client")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or change the cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Read the catalog API
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Billboard and featured products
    Home,

    /// A product with related products from its category
    Product { id: String },

    /// Open a product in the preview and print the preview state
    Preview { id: String },

    /// Show or write configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
enum CartCommand {
    List,
    Add { product_id: String },
    Remove { product_id: String },
    Clear,
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    Billboard {
        id: String,
    },
    Categories,
    Category {
        id: String,
        #[arg(long)]
        size_id: Option<String>,
        #[arg(long)]
        color_id: Option<String>,
    },
    Colors,
    Sizes,
    /// Categories, sizes and colors together
    Filters,
    Products {
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        size_id: Option<String>,
        #[arg(long)]
        color_id: Option<String>,
        #[arg(long)]
        featured: bool,
    },
    Product {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let rendered = serde_json::to_string(&err).unwrap_or_else(|_| err.to_string());
            eprintln!("{rendered}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ApiResult<()> {
    if let Command::Config(command) = &cli.command {
        return run_config(cli.config.as_deref(), command);
    }

    let config = ClientConfig::load(cli.config.as_deref())?;
    let app = Storefront::open(config, Arc::new(LogSink)).await?;

    match cli.command {
        Command::Cart(command) => match command {
            CartCommand::List => print(&cart::get_cart(&app.cart)),
            CartCommand::Add { product_id } => {
                print(&cart::add_to_cart(&app.catalog, &app.cart, &product_id).await?)
            }
            CartCommand::Remove { product_id } => {
                print(&cart::remove_from_cart(&app.cart, &product_id).await?)
            }
            CartCommand::Clear => print(&cart::clear_cart(&app.cart).await?),
        },
        Command::Catalog(command) => run_catalog(&app, command).await,
        Command::Home => {
            let billboard_id = app.config.api.home_billboard_id.as_deref();
            print(&catalog::home_feed(&app.catalog, billboard_id).await?)
        }
        Command::Product { id } => print(&catalog::product_detail(&app.catalog, &id).await?),
        Command::Preview { id } => {
            print(&preview::preview_product(&app.catalog, &app.preview, &id).await?)
        }
        Command::Config(_) => Ok(()),
    }
}

async fn run_catalog(app: &Storefront, command: CatalogCommand) -> ApiResult<()> {
    let client = &app.catalog;
    match command {
        CatalogCommand::Billboard { id } => print(&client.get_billboard(&id).await?),
        CatalogCommand::Categories => print(&client.get_categories().await?),
        CatalogCommand::Category {
            id,
            size_id,
            color_id,
        } => print(
            &catalog::category_page(client, &id, size_id.as_deref(), color_id.as_deref()).await?,
        ),
        CatalogCommand::Colors => print(&client.get_colors().await?),
        CatalogCommand::Sizes => print(&client.get_sizes().await?),
        CatalogCommand::Filters => print(&catalog::catalog_filters(client).await?),
        CatalogCommand::Products {
            category_id,
            size_id,
            color_id,
            featured,
        } => {
            let query = ProductQuery {
                category_id,
                size_id,
                color_id,
                is_featured: featured.then_some(true),
            };
            print(&client.get_products(&query).await?)
        }
        CatalogCommand::Product { id } => print(&client.get_product(&id).await?),
    }
}

fn run_config(path: Option<&std::path::Path>, command: &ConfigCommand) -> ApiResult<()> {
    match command {
        ConfigCommand::Show => print(&ClientConfig::load(path)?),
        ConfigCommand::Init { force } => {
            let path = match path {
                Some(p) => p.to_path_buf(),
                None => ClientConfig::default_config_path()
                    .ok_or_else(|| ApiError::validation("No config directory; pass --config"))?,
            };

            if path.exists() && !force {
                return Err(ApiError::validation(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            ClientConfig::default().save(&path)?;
            info!(path = %path.display(), "Wrote default configuration");
            print(&serde_json::json!({ "path": path }))
        }
    }
}

fn print<T: Serialize>(value: &T) -> ApiResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
