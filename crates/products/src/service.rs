use catalog_core::{DomainError, DomainResult, ProductId};

use crate::repository::ProductRepository;

/// Purchase use case: lookup, precondition checks, total.
///
/// Holds no state of its own besides the injected repository.
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repository: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Compute the total for buying `quantity` units of `product_id`.
    ///
    /// Fails with `NotFound`, then `NotActive`, then whatever
    /// [`Product::calculate_total_price`](crate::Product::calculate_total_price)
    /// reports. The stored product is not modified and nothing is saved.
    pub fn purchase_product(&self, product_id: ProductId, quantity: i64) -> DomainResult<f64> {
        tracing::debug!(%product_id, quantity, "looking up product for purchase");

        let result = self.try_purchase(product_id, quantity);
        match &result {
            Ok(total) => {
                tracing::info!(%product_id, quantity, total, "purchase total computed");
            }
            Err(err) => {
                tracing::warn!(%product_id, quantity, kind = %err.kind(), "purchase rejected: {err}");
            }
        }
        result
    }

    fn try_purchase(&self, product_id: ProductId, quantity: i64) -> DomainResult<f64> {
        let product = self
            .repository
            .find_by_id(product_id)
            .ok_or_else(|| DomainError::not_found(product_id))?;

        if !product.is_active() {
            return Err(DomainError::not_active(product_id));
        }

        // TODO: decrement stock and save once reservations are modelled.
        product.calculate_total_price(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::product::{Product, ProductStatus};

    /// Minimal map-backed repository that also counts `save` calls.
    #[derive(Default)]
    struct StubRepository {
        products: Mutex<HashMap<ProductId, Product>>,
        saves: Mutex<usize>,
    }

    impl StubRepository {
        fn with(products: impl IntoIterator<Item = Product>) -> Self {
            let repo = Self::default();
            {
                let mut map = repo.products.lock().unwrap();
                for p in products {
                    map.insert(p.id_typed(), p);
                }
            }
            repo
        }

        fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl ProductRepository for StubRepository {
        fn find_by_id(&self, id: ProductId) -> Option<Product> {
            self.products.lock().unwrap().get(&id).cloned()
        }

        fn save(&self, product: Product) {
            *self.saves.lock().unwrap() += 1;
            self.products.lock().unwrap().insert(product.id_typed(), product);
        }
    }

    fn id(n: u64) -> ProductId {
        ProductId::new(n).unwrap()
    }

    fn laptop() -> Product {
        Product::new(id(1), "Laptop", 999.99, 10).unwrap()
    }

    #[test]
    fn purchase_returns_price_times_quantity() {
        let product = Product::new(id(2), "Monitor", 500.0, 10).unwrap();
        let service = ProductService::new(StubRepository::with([product]));

        assert_eq!(service.purchase_product(id(2), 3).unwrap(), 1500.0);
    }

    #[test]
    fn purchase_leaves_stock_unchanged_and_saves_nothing() {
        let service = ProductService::new(StubRepository::with([laptop()]));

        service.purchase_product(id(1), 4).unwrap();

        let stored = service.repository().find_by_id(id(1)).unwrap();
        assert_eq!(stored.stock(), 10);
        assert_eq!(service.repository().save_count(), 0);
    }

    #[test]
    fn purchase_rejects_unknown_product() {
        let service = ProductService::new(StubRepository::with([laptop()]));

        let err = service.purchase_product(id(99), 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound(id(99)));
    }

    #[test]
    fn purchase_rejects_inactive_product_before_stock_checks() {
        let inactive_empty = Product::new(id(5), "Old Phone", 100.0, 0)
            .unwrap()
            .with_status(ProductStatus::Inactive);
        let service = ProductService::new(StubRepository::with([inactive_empty]));

        for quantity in [1, 0, -1] {
            let err = service.purchase_product(id(5), quantity).unwrap_err();
            assert_eq!(err, DomainError::NotActive(id(5)));
        }
    }

    #[test]
    fn purchase_propagates_out_of_stock() {
        let empty = Product::new(id(3), "Keyboard", 49.5, 0).unwrap();
        let service = ProductService::new(StubRepository::with([empty]));

        let err = service.purchase_product(id(3), 1).unwrap_err();
        assert_eq!(err, DomainError::OutOfStock(id(3)));
    }

    #[test]
    fn purchase_propagates_invalid_quantity() {
        let service = ProductService::new(StubRepository::with([laptop()]));

        let err = service.purchase_product(id(1), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { argument: "quantity", .. }));
    }

    #[test]
    fn service_works_with_borrowed_repository() {
        let repo = StubRepository::with([laptop()]);
        let service = ProductService::new(&repo);

        assert_eq!(service.purchase_product(id(1), 1).unwrap(), 999.99);
    }

    /// Single-threaded store; not `Sync`.
    #[derive(Default)]
    struct CellRepository {
        products: RefCell<HashMap<ProductId, Product>>,
    }

    impl ProductRepository for CellRepository {
        fn find_by_id(&self, id: ProductId) -> Option<Product> {
            self.products.borrow().get(&id).cloned()
        }

        fn save(&self, product: Product) {
            self.products.borrow_mut().insert(product.id_typed(), product);
        }
    }

    #[test]
    fn service_works_with_single_threaded_repository() {
        let repo = CellRepository::default();
        repo.save(laptop());
        let service = ProductService::new(repo);

        assert_eq!(service.purchase_product(id(1), 2).unwrap(), 1999.98);
        assert_eq!(service.purchase_product(id(7), 1).unwrap_err(), DomainError::NotFound(id(7)));
    }
}
