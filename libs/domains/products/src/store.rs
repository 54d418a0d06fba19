use async_trait::async_trait;
use futures_util::stream::BoxStream;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{PriceRange, Product, ProductChanges};

/// Lazily produced sequence of products, in the store's natural order
pub type ProductStream = BoxStream<'static, ProductResult<Product>>;

/// Document collection holding products, keyed by `Product::id`
///
/// Each method is a single store round-trip and is atomic on its own.
/// Implementations: [`crate::mongodb::MongoProductStore`] and
/// [`crate::memory::InMemoryProductStore`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new document
    async fn insert_one(&self, product: &Product) -> ProductResult<()>;

    /// Find the document whose `id` equals `id`
    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Stream every document whose price lies inside `range`
    async fn find(&self, range: PriceRange) -> ProductResult<ProductStream>;

    /// Apply `changes` to the document with `id` and return its post-update state
    async fn find_one_and_update(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>>;

    /// Delete the document with `id`, returning how many documents were removed
    async fn delete_one(&self, id: Uuid) -> ProductResult<u64>;
}
