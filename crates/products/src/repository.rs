use std::sync::Arc;

use catalog_core::ProductId;

use crate::product::Product;

/// Lookup/persistence capability for products, keyed by id.
///
/// The domain depends only on this trait; concrete stores live in infra.
/// No thread-safety bound: single-threaded stores (e.g. `RefCell`-backed)
/// qualify, and shared stores add `Send + Sync` where they need it.
pub trait ProductRepository {
    fn find_by_id(&self, id: ProductId) -> Option<Product>;
    fn save(&self, product: Product);
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: Product) {
        (**self).save(product)
    }
}

impl<R> ProductRepository for &R
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: Product) {
        (**self).save(product)
    }
}
