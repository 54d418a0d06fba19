//! MongoDB implementation of ProductStore

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use mongodb::{
    bson::{self, doc, Document},
    options::ReturnDocument,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{PriceRange, Product, ProductChanges};
use crate::store::{ProductStore, ProductStream};

/// Collection name used when none is given
pub const PRODUCTS_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductStore
#[derive(Clone)]
pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    /// Bind to the `products` collection of `db`
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, PRODUCTS_COLLECTION)
    }

    /// Bind to a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Equality filter on the product identifier (not `_id`)
    ///
    /// Encodes the id as a subtype 4 binary, the same way `Product` stores it.
    fn id_filter(id: Uuid) -> Document {
        doc! { "id": bson::Uuid::from(id) }
    }

    /// Build a MongoDB filter document from a PriceRange
    ///
    /// Bounds map to `$gt` / `$lt` and share one `price` sub-document when
    /// both are present. An unbounded range yields an empty filter.
    fn build_filter(range: &PriceRange) -> Document {
        let mut price_filter = doc! {};

        if let Some(min) = range.min {
            price_filter.insert("$gt", min);
        }

        if let Some(max) = range.max {
            price_filter.insert("$lt", max);
        }

        if price_filter.is_empty() {
            doc! {}
        } else {
            doc! { "price": price_filter }
        }
    }

    /// Build the `$set` update from the fields present in `changes`
    fn build_update(changes: &ProductChanges) -> Document {
        let mut set = doc! {};

        if let Some(ref name) = changes.name {
            set.insert("name", name);
        }
        if let Some(price) = changes.price {
            set.insert("price", price);
        }
        if let Some(quantity) = changes.quantity {
            set.insert("quantity", quantity);
        }
        set.insert(
            "updated_at",
            bson::DateTime::from_chrono(changes.updated_at),
        );

        doc! { "$set": set }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn insert_one(&self, product: &Product) -> ProductResult<()> {
        self.collection.insert_one(product).await.map_err(|e| {
            ProductError::Database(format!("Error inserting product in database: {}", e))
        })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find(&self, range: PriceRange) -> ProductResult<ProductStream> {
        let filter = Self::build_filter(&range);
        tracing::debug!(?filter, "Querying products");

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.map_err(ProductError::from).boxed())
    }

    #[instrument(skip(self, changes))]
    async fn find_one_and_update(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one_and_update(Self::id_filter(id), Self::build_update(&changes))
            .return_document(ReturnDocument::After)
            .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, id: Uuid) -> ProductResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}
