//! # Storefront CLI
//!
//! Command-line front end for the storefront core.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in catalogs
//! storefront catalogs
//!
//! # Browse a category, searching and sorting
//! storefront browse --category drinks --search lat --sort price-desc
//!
//! # Ring up an order and print the receipt
//! storefront checkout --add latte --add croissant \
//!     --addon 0:extra-shot:2 --quantity 1:2 --discount percentage:10
//!
//! # Serve the JSON API for a browser front end
//! storefront serve --listen 127.0.0.1:8080
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use storefront::{
    Session, StorefrontError,
    catalog::builtin,
    config::{CatalogSource, ServerConfig, StoreConfig},
    filter::SortKey,
    pricing::{DiscountKind, format_money},
    receipt::{self, ReceiptStamp},
    server,
};

/// Storefront - point-of-sale cart utility
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Catalog selection shared by every command.
#[derive(Args, Debug)]
struct CatalogArgs {
    /// Built-in catalog name (see `storefront catalogs`)
    #[arg(long, conflicts_with = "file")]
    catalog: Option<String>,

    /// Path to a JSON catalog document
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in catalogs
    Catalogs,

    /// Show the products of a category
    Browse {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Category id (defaults to the first category)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search on product names
        #[arg(long, default_value = "")]
        search: String,

        /// name-asc, name-desc, price-asc or price-desc
        #[arg(long, default_value = "name-asc")]
        sort: String,
    },

    /// Build a cart and print its receipt
    Checkout {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Product id to add as a new line (repeatable)
        #[arg(long = "add", value_name = "PRODUCT")]
        products: Vec<String>,

        /// Line quantity as LINE:QTY (repeatable, lines count from 0)
        #[arg(long = "quantity", value_name = "LINE:QTY")]
        quantities: Vec<String>,

        /// Add-on as LINE:ADDON:QTY (repeatable, QTY 0 deselects)
        #[arg(long = "addon", value_name = "LINE:ADDON:QTY")]
        addons: Vec<String>,

        /// Discount as fixed:AMOUNT or percentage:PERCENT
        #[arg(long)]
        discount: Option<String>,

        /// Store name printed in the header
        #[arg(long)]
        name: Option<String>,

        /// Receipt width in characters
        #[arg(long)]
        width: Option<usize>,
    },

    /// Serve the JSON API over HTTP
    Serve {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Address to listen on (default: $STOREFRONT_LISTEN or 127.0.0.1:8080)
        #[arg(long)]
        listen: Option<String>,

        /// Store name printed on receipts
        #[arg(long)]
        name: Option<String>,

        /// Receipt width in characters
        #[arg(long)]
        width: Option<usize>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storefront=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

fn error_message(e: &StorefrontError) -> String {
    format!("Error: {}", e)
}

fn run() -> Result<(), StorefrontError> {
    let cli = Cli::parse();
    let mut config = StoreConfig::from_env()?;

    match cli.command {
        Commands::Catalogs => {
            println!("Available catalogs:");
            for name in builtin::list() {
                println!("  {}", name);
            }
        }

        Commands::Browse {
            catalog,
            category,
            search,
            sort,
        } => {
            apply_catalog_args(&mut config, catalog);
            let mut session = Session::new(config.catalog.load()?);
            if let Some(category) = category {
                session.select_category(&category);
            }
            session.set_search(&search);
            let sort: SortKey = match sort.parse() {
                Ok(key) => key,
                Err(never) => match never {},
            };
            session.set_sort(sort);
            print_browse(&session);
        }

        Commands::Checkout {
            catalog,
            products,
            quantities,
            addons,
            discount,
            name,
            width,
        } => {
            apply_catalog_args(&mut config, catalog);
            apply_receipt_args(&mut config, name, width)?;
            let mut session = Session::new(config.catalog.load()?);

            for product in &products {
                session.add_product(product)?;
            }
            for spec in &quantities {
                let (line, qty) = parse_quantity_arg(spec)?;
                session.cart_mut().set_quantity(line, qty);
            }
            for spec in &addons {
                let (line, addon, qty) = parse_addon_arg(spec)?;
                session.cart_mut().toggle_addon(line, &addon, qty);
            }
            if let Some(spec) = discount {
                let (kind, value) = parse_discount_arg(&spec)?;
                let panel = session.discount_panel_mut();
                panel.toggle();
                panel.set_kind(kind);
                panel.set_value(value);
            }

            let stamp = ReceiptStamp::now(&session);
            print!(
                "{}",
                receipt::render(&session, &config.store_name, &stamp, config.receipt_width)
            );
        }

        Commands::Serve {
            catalog,
            listen,
            name,
            width,
        } => {
            apply_catalog_args(&mut config, catalog);
            apply_receipt_args(&mut config, name, width)?;
            let server_config = ServerConfig {
                listen_addr: listen.unwrap_or_else(ServerConfig::listen_addr_from_env),
                store: config,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(server_config))?;
        }
    }

    Ok(())
}

fn apply_catalog_args(config: &mut StoreConfig, args: CatalogArgs) {
    if let Some(path) = args.file {
        config.catalog = CatalogSource::File(path);
    } else if let Some(name) = args.catalog {
        config.catalog = CatalogSource::parse(&name);
    }
}

fn apply_receipt_args(
    config: &mut StoreConfig,
    name: Option<String>,
    width: Option<usize>,
) -> Result<(), StorefrontError> {
    if let Some(name) = name {
        config.store_name = name;
    }
    if let Some(width) = width {
        config.receipt_width = width;
    }
    config.validate()
}

/// Print the category tabs and the visible product list.
fn print_browse(session: &Session) {
    let tabs: Vec<String> = session
        .catalog()
        .categories()
        .iter()
        .map(|c| {
            if c.id == session.selected_category() {
                format!("[{}]", c.name)
            } else {
                c.name.clone()
            }
        })
        .collect();
    println!("{}", tabs.join("  "));
    println!(
        "search: {:?}  sort: {}",
        session.search_term(),
        session.sort().label()
    );
    println!();

    let products = session.visible_products();
    if products.is_empty() {
        println!("  (no products)");
        return;
    }
    for product in products {
        println!(
            "  {} {:<28} {:>9}  {}",
            product.image,
            product.name,
            format_money(product.price),
            product.id
        );
        if let Some(description) = &product.description {
            println!("      {}", description);
        }
        for addon in &product.addons {
            println!("      + {} ({})", addon.name, format_money(addon.price));
        }
    }
}

fn parse_index(value: &str, spec: &str) -> Result<usize, StorefrontError> {
    value.trim().parse().map_err(|_| {
        StorefrontError::InvalidArgument(format!("bad line index '{}' in '{}'", value, spec))
    })
}

fn parse_count(value: &str, spec: &str) -> Result<i64, StorefrontError> {
    value.trim().parse().map_err(|_| {
        StorefrontError::InvalidArgument(format!("bad quantity '{}' in '{}'", value, spec))
    })
}

/// `LINE:QTY`
fn parse_quantity_arg(spec: &str) -> Result<(usize, i64), StorefrontError> {
    let (line, qty) = spec.split_once(':').ok_or_else(|| {
        StorefrontError::InvalidArgument(format!("expected LINE:QTY, got '{}'", spec))
    })?;
    Ok((parse_index(line, spec)?, parse_count(qty, spec)?))
}

/// `LINE:ADDON:QTY`
fn parse_addon_arg(spec: &str) -> Result<(usize, String, i64), StorefrontError> {
    let mut parts = spec.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(line), Some(addon), Some(qty)) => Ok((
            parse_index(line, spec)?,
            addon.to_string(),
            parse_count(qty, spec)?,
        )),
        _ => Err(StorefrontError::InvalidArgument(format!(
            "expected LINE:ADDON:QTY, got '{}'",
            spec
        ))),
    }
}

/// `fixed:AMOUNT` or `percentage:PERCENT`
fn parse_discount_arg(spec: &str) -> Result<(DiscountKind, f64), StorefrontError> {
    let (kind, value) = spec.split_once(':').ok_or_else(|| {
        StorefrontError::InvalidArgument(format!("expected KIND:VALUE, got '{}'", spec))
    })?;
    let kind: DiscountKind = kind.parse().map_err(StorefrontError::InvalidArgument)?;
    let value: f64 = value.trim().parse().map_err(|_| {
        StorefrontError::InvalidArgument(format!("bad discount value '{}'", value))
    })?;
    Ok((kind, value))
}
