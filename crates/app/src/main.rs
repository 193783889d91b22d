use anyhow::Context;

use catalog_app::{demo, run_purchase, AppConfig};
use catalog_products::ProductService;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    catalog_observability::init_with(config.log_format);

    let repository = demo::seeded_repository().context("failed to seed sample catalog")?;
    tracing::info!(products = repository.len(), "sample catalog loaded");

    let service = ProductService::new(repository);
    let report = run_purchase(&service, config.product_id, config.quantity);

    println!("{}", serde_json::to_string(&report)?);

    match report.error {
        None => Ok(()),
        Some(message) => Err(anyhow::anyhow!(message)),
    }
}
