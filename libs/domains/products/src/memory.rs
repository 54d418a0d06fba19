//! In-memory implementation of ProductStore
//!
//! Intended for tests and local development. Iteration order is insertion
//! order, mirroring a collection without an explicit sort.

use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{PriceRange, Product, ProductChanges};
use crate::store::{ProductStore, ProductStream};

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn len(&self) -> ProductResult<usize> {
        let products = self.products.read().map_err(|_| Self::poisoned())?;
        Ok(products.len())
    }

    pub fn is_empty(&self) -> ProductResult<bool> {
        Ok(self.len()? == 0)
    }

    fn poisoned() -> ProductError {
        ProductError::Database("product store lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert_one(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        products.push(product.clone());
        Ok(())
    }

    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().map_err(|_| Self::poisoned())?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find(&self, range: PriceRange) -> ProductResult<ProductStream> {
        let matching: Vec<ProductResult<Product>> = {
            let products = self.products.read().map_err(|_| Self::poisoned())?;
            products
                .iter()
                .filter(|p| range.contains(p.price))
                .cloned()
                .map(Ok)
                .collect()
        };
        Ok(stream::iter(matching).boxed())
    }

    async fn find_one_and_update(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply_changes(&changes);
            product.clone()
        }))
    }

    async fn delete_one(&self, id: Uuid) -> ProductResult<u64> {
        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use futures_util::TryStreamExt;

    fn product(name: &str, price: f64) -> Product {
        Product::new(NewProduct {
            name: name.to_string(),
            price,
            quantity: 1,
        })
    }

    #[tokio::test]
    async fn test_find_preserves_insertion_order() {
        let store = InMemoryProductStore::new();
        for (name, price) in [("c", 3.0), ("a", 1.0), ("b", 2.0)] {
            store.insert_one(&product(name, price)).await.unwrap();
        }

        let names: Vec<String> = store
            .find(PriceRange::unbounded())
            .await
            .unwrap()
            .map_ok(|p| p.name)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_delete_one_reports_count() {
        let store = InMemoryProductStore::new();
        let p = product("a", 1.0);
        store.insert_one(&p).await.unwrap();

        assert_eq!(store.delete_one(p.id).await.unwrap(), 1);
        assert_eq!(store.delete_one(p.id).await.unwrap(), 0);
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_database_error() {
        let store = std::sync::Arc::new(InMemoryProductStore::new());
        store.insert_one(&product("a", 1.0)).await.unwrap();

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.products.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(ProductError::Database(_))));
        assert!(matches!(store.is_empty(), Err(ProductError::Database(_))));
        assert!(matches!(
            store.find_one(Uuid::new_v4()).await,
            Err(ProductError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_find_one_and_update_missing_returns_none() {
        let store = InMemoryProductStore::new();
        let changes = ProductChanges {
            name: None,
            price: None,
            quantity: Some(1),
            updated_at: chrono::Utc::now(),
        };

        let result = store.find_one_and_update(Uuid::new_v4(), changes).await.unwrap();
        assert!(result.is_none());
    }
}
