//! Kasira demo walkthrough.
//!
//! Loads (or synthesizes) a catalog, replays one scripted sales entry and
//! one scripted purchase entry against the engine, and prints the snapshots
//! that would be handed to a save action.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kasira_core::catalog::{CatalogSeed, InMemoryCatalog, Product};
use kasira_core::entry::{EntrySession, PurchasePaymentStatus, TransactionKind};
use kasira_shared::types::ProductId;
use kasira_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kasira=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let catalog = load_catalog(&config.catalog.seed_path)?;
    info!(
        products = catalog.product_count(),
        currency = %config.display.currency,
        "Catalog ready"
    );

    let product = first_product_id(&catalog)?;

    run_sale(&catalog, product)?;
    run_purchase(&catalog, product)?;

    Ok(())
}

/// Loads the catalog from the configured seed file, falling back to a small
/// built-in seed when the file is absent.
fn load_catalog(seed_path: &str) -> anyhow::Result<InMemoryCatalog> {
    match std::fs::read_to_string(seed_path) {
        Ok(json) => InMemoryCatalog::from_json(&json)
            .with_context(|| format!("Malformed catalog seed at {seed_path}")),
        Err(_) => {
            info!(seed_path, "No catalog seed file, using built-in demo seed");
            Ok(InMemoryCatalog::from_seed(builtin_seed()))
        }
    }
}

fn builtin_seed() -> CatalogSeed {
    CatalogSeed {
        products: vec![
            Product {
                id: ProductId::new(),
                name: "Kopi Susu".to_string(),
                unit_price: Decimal::from(15_000),
                unit_cost: Decimal::from(9_000),
            },
            Product {
                id: ProductId::new(),
                name: "Teh Botol".to_string(),
                unit_price: Decimal::from(4_500),
                unit_cost: Decimal::from(3_000),
            },
        ],
        customers: vec![],
        suppliers: vec![],
    }
}

fn first_product_id(catalog: &InMemoryCatalog) -> anyhow::Result<ProductId> {
    catalog
        .products()
        .map(|p| p.id)
        .next()
        .context("Catalog has no products to demo with")
}

fn run_sale(catalog: &InMemoryCatalog, product: ProductId) -> anyhow::Result<()> {
    let resolve = catalog.resolver(TransactionKind::Sale);

    let mut session = EntrySession::new_sale();
    session.select_product(0, Some(product), &resolve)?;
    session.set_quantity(0, "2")?;
    session.add_item();
    session.set_unit_amount(1, "500")?;
    session.set_amount_paid("40000")?;

    info!(total = %session.total(), change = ?session.change(), "Sale entry complete");
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

fn run_purchase(catalog: &InMemoryCatalog, product: ProductId) -> anyhow::Result<()> {
    let resolve = catalog.resolver(TransactionKind::Purchase);

    let mut session = EntrySession::new_purchase();
    session.select_product(0, Some(product), &resolve)?;
    session.set_quantity(0, "10")?;
    session.set_payment_status(PurchasePaymentStatus::Partial)?;
    session.set_due_date(NaiveDate::from_ymd_opt(2026, 9, 30))?;

    info!(
        total = %session.total(),
        requires_due_date = session.requires_due_date(),
        "Purchase entry complete"
    );
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
