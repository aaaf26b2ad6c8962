//! Catalog operator CLI
//!
//! Runs the resolution engine against a catalog database and prints JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Rows for a category, second page of 20
//! catalog --db database.sqlite resolve-category "Electronics & Gadgets" --limit 20 --offset 20
//!
//! # Rows for a page, narrowed to one category
//! catalog resolve-page prime-picks --category Laptops
//!
//! # Child categories of a parent
//! catalog children "Electronics & Gadgets"
//!
//! # Categories present on a page
//! catalog page-categories deals-hub
//!
//! # Top-level categories with AI app rows
//! catalog browse --type aiapps
//! ```
//!
//! Logging goes to stderr and is controlled by `CATALOG_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use catalog_core::models::{ListingScope, RawResolutionParams, Surface};
use catalog_core::CatalogConfig;
use catalog_resolver::ResolutionEngine;
use catalog_storage::StorageEngine;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Resolve catalog categories and pages to published rows")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides config and CATALOG_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rows for a category name
    ResolveCategory {
        category: String,
        #[command(flatten)]
        listing: Listing,
    },
    /// Rows for a page slug
    ResolvePage {
        page: String,
        /// Secondary category filter
        #[arg(long)]
        category: Option<String>,
        #[command(flatten)]
        listing: Listing,
    },
    /// Active children of a parent category
    Children { parent: String },
    /// Distinct categories visible on a page
    PageCategories { page: String },
    /// Top-level categories with published rows
    Browse {
        /// products, services, aiapps, or all
        #[arg(long = "type")]
        surface: Option<String>,
    },
}

#[derive(Args, Debug)]
struct Listing {
    /// Page size (clamped to the configured maximum)
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,

    /// Gender filter; "all" means no filter
    #[arg(long)]
    gender: Option<String>,

    /// Use the admin limit ceiling
    #[arg(long)]
    admin: bool,
}

impl Listing {
    fn scope(&self) -> ListingScope {
        if self.admin {
            ListingScope::Admin
        } else {
            ListingScope::Public
        }
    }

    fn params(&self) -> RawResolutionParams {
        RawResolutionParams {
            limit: self.limit.clone(),
            offset: self.offset.clone(),
            gender: self.gender.clone(),
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    catalog_core::tracing::init_tracing();
    let cli = Cli::parse();

    let mut config = CatalogConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(db) = &cli.db {
        config.storage.db_path = db.display().to_string();
    }

    let store = StorageEngine::from_config(&config)
        .with_context(|| format!("opening catalog database {}", config.storage.db_path))?;
    let engine = ResolutionEngine::new(&store, &store, &config);

    let output = match cli.command {
        Command::ResolveCategory { category, listing } => {
            let raw = RawResolutionParams {
                category: Some(category),
                ..listing.params()
            };
            serde_json::to_value(engine.resolve_category(&raw, listing.scope())?)?
        }
        Command::ResolvePage {
            page,
            category,
            listing,
        } => {
            let raw = RawResolutionParams {
                page: Some(page),
                category,
                ..listing.params()
            };
            serde_json::to_value(engine.resolve_page(&raw, listing.scope())?)?
        }
        Command::Children { parent } => serde_json::to_value(engine.list_children(&parent)?)?,
        Command::PageCategories { page } => {
            serde_json::to_value(engine.categories_for_page(&page)?)?
        }
        Command::Browse { surface } => serde_json::to_value(
            engine.browse_categories(Surface::parse(surface.as_deref()))?,
        )?,
    };

    info!(db = %config.storage.db_path, "command complete");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
