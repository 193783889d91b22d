use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Product availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

/// Entity: Product.
///
/// Fields are private; every write path goes through a validating constructor
/// or mutator, so a `Product` value always satisfies `price > 0` and
/// `stock >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
    status: ProductStatus,
}

impl Product {
    /// Create an active product.
    ///
    /// Price is checked before stock. The name is stored as given.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> DomainResult<Self> {
        validate_price(price)?;
        validate_stock(stock)?;

        Ok(Self {
            id,
            name: name.into(),
            price,
            stock,
            status: ProductStatus::Active,
        })
    }

    /// Materialize the product in the given status (stores, fixtures).
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn has_stock(&self) -> bool {
        self.stock > 0
    }

    /// Total for `quantity` units: `price * quantity`.
    ///
    /// Out-of-stock is reported before quantity validation, so a zero-stock
    /// product never yields an invalid-quantity error. Stock is left as is.
    pub fn calculate_total_price(&self, quantity: i64) -> DomainResult<f64> {
        if !self.has_stock() {
            return Err(DomainError::out_of_stock(self.id));
        }

        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity",
                "must be greater than zero",
            ));
        }

        Ok(self.price * quantity as f64)
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: i64) -> DomainResult<()> {
        validate_stock(stock)?;
        self.stock = stock;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::invalid_argument(
            "price",
            "must be greater than zero",
        ));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> DomainResult<()> {
    if stock < 0 {
        return Err(DomainError::invalid_argument("stock", "cannot be negative"));
    }
    Ok(())
}
