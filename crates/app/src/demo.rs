//! Sample catalog and the purchase run used by the binary.

use serde::Serialize;

use catalog_core::{DomainResult, ProductId};
use catalog_infra::repository::InMemoryProductRepository;
use catalog_products::{Product, ProductRepository, ProductService, ProductStatus};

/// Outcome of one purchase, as printed by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseReport {
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// `total` as currency, e.g. `$1,999.98`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PurchaseReport {
    pub fn is_success(&self) -> bool {
        self.total.is_some()
    }
}

/// A small catalog covering every purchase outcome:
/// 1 Laptop, 2 Monitor, 3 Keyboard (no stock), 4 Old Phone (inactive).
pub fn sample_catalog() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::new(ProductId::new(1)?, "Laptop", 999.99, 10)?,
        Product::new(ProductId::new(2)?, "Monitor", 500.0, 10)?,
        Product::new(ProductId::new(3)?, "Keyboard", 49.5, 0)?,
        Product::new(ProductId::new(4)?, "Old Phone", 100.0, 5)?.with_status(ProductStatus::Inactive),
    ])
}

pub fn seeded_repository() -> DomainResult<InMemoryProductRepository> {
    Ok(InMemoryProductRepository::with_products(sample_catalog()?))
}

/// Run one purchase and describe the result; domain failures become part of
/// the report rather than an `Err`.
pub fn run_purchase<R: ProductRepository>(
    service: &ProductService<R>,
    product_id: ProductId,
    quantity: i64,
) -> PurchaseReport {
    match service.purchase_product(product_id, quantity) {
        Ok(total) => PurchaseReport {
            product_id,
            quantity,
            total: Some(total),
            total_display: Some(format_currency(total)),
            error_kind: None,
            error: None,
        },
        Err(err) => PurchaseReport {
            product_id,
            quantity,
            total: None,
            total_display: None,
            error_kind: Some(err.kind().as_str()),
            error: Some(err.to_string()),
        },
    }
}

/// Dollar amount with two decimals and comma thousands separators.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
