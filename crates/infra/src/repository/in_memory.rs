use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::Entity;
use catalog_products::{Product, ProductId, ProductRepository};

/// In-memory product store for tests/dev.
///
/// A panic while the lock is held poisons it; the map itself is always left
/// consistent (single inserts), so access recovers the guard and logs.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Seed the store; later products replace earlier ones with the same id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (*p.id(), p))
            .collect::<HashMap<_, _>>();
        Self {
            inner: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("product store lock poisoned; recovering for read");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("product store lock poisoned; recovering for write");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    fn save(&self, product: Product) {
        self.write().insert(*product.id(), product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ProductId {
        ProductId::new(n).unwrap()
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_by_id(id(1)).is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn save_upserts_by_id() {
        let repo = InMemoryProductRepository::new();
        let mut product = Product::new(id(1), "Laptop", 999.99, 10).unwrap();
        repo.save(product.clone());

        product.set_stock(7).unwrap();
        repo.save(product);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(id(1)).unwrap().stock(), 7);
    }

    #[test]
    fn found_products_are_copies() {
        let repo = InMemoryProductRepository::with_products([
            Product::new(id(1), "Laptop", 999.99, 10).unwrap(),
        ]);

        let mut copy = repo.find_by_id(id(1)).unwrap();
        copy.set_price(1.0).unwrap();

        assert_eq!(repo.find_by_id(id(1)).unwrap().price(), 999.99);
    }

    #[test]
    fn with_products_keeps_last_duplicate() {
        let repo = InMemoryProductRepository::with_products([
            Product::new(id(1), "First", 1.0, 1).unwrap(),
            Product::new(id(1), "Second", 2.0, 2).unwrap(),
            Product::new(id(2), "Other", 3.0, 3).unwrap(),
        ]);

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id(id(1)).unwrap().name(), "Second");
    }

    #[test]
    fn poisoned_lock_does_not_hide_stored_products() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryProductRepository::with_products([
            Product::new(id(1), "Laptop", 999.99, 10).unwrap(),
        ]));

        let poisoner = repo.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("panic while holding the product store lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(repo.inner.is_poisoned());

        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());
        assert_eq!(repo.find_by_id(id(1)).unwrap().name(), "Laptop");

        repo.save(Product::new(id(2), "Mouse", 25.0, 3).unwrap());
        assert_eq!(repo.len(), 2);
    }
}
