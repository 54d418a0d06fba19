//! Product usecase - identity, existence checks, range queries and merge updates

use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::Database;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, PriceRange, Product, ProductUpdate};
use crate::mongodb::MongoProductStore;
use crate::store::{ProductStore, ProductStream};

/// Stateless service over a shared ProductStore handle
///
/// `update` and `delete` check existence and then mutate in a second round
/// trip. The pair is not atomic: a concurrent delete in between surfaces as
/// `NotFound` from `update` and as `Ok(false)` from `delete`.
pub struct ProductUsecase<S: ProductStore> {
    store: Arc<S>,
}

impl<S: ProductStore> ProductUsecase<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Share an existing store handle
    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a product with a fresh identifier and matching timestamps
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.store.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Get a product by identifier
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ProductResult<Product> {
        self.store
            .find_one(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Stream products priced strictly inside `range`
    #[instrument(skip(self), fields(min_price = ?range.min, max_price = ?range.max))]
    pub async fn query(&self, range: PriceRange) -> ProductResult<ProductStream> {
        self.store.find(range).await
    }

    /// Same as `query`, collected into a list
    pub async fn query_all(&self, range: PriceRange) -> ProductResult<Vec<Product>> {
        self.query(range).await?.try_collect().await
    }

    /// Merge the fields present in `input` into an existing product
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: ProductUpdate) -> ProductResult<Product> {
        self.get(id).await?;

        let changes = input.into_changes(Utc::now());

        match self.store.find_one_and_update(id, changes).await? {
            Some(product) => {
                tracing::info!(product_id = %id, "Product updated");
                Ok(product)
            }
            None => {
                tracing::warn!(product_id = %id, "Product disappeared before update");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Permanently delete a product
    ///
    /// Returns `false` only when the product vanished after the existence check.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        self.get(id).await?;

        let deleted = self.store.delete_one(id).await? > 0;

        if deleted {
            tracing::info!(product_id = %id, "Product deleted");
        } else {
            tracing::warn!(product_id = %id, "Product disappeared before delete");
        }
        Ok(deleted)
    }
}

impl ProductUsecase<MongoProductStore> {
    /// Bind to the `products` collection of `db`
    pub fn with_mongo(db: &Database) -> Self {
        Self::new(MongoProductStore::new(db))
    }
}

impl<S: ProductStore> Clone for ProductUsecase<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
