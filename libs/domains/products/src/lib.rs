//! Products Domain
//!
//! Data-access layer for the product catalog, backed by a MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Usecase   │  ← Identity, existence checks, range filters, merge updates
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Document access (trait + MongoDB / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, NewProduct, ProductUpdate, PriceRange
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{NewProduct, PriceRange, ProductUsecase};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("store");
//!
//! let usecase = ProductUsecase::with_mongo(&db);
//!
//! let _product = usecase
//!     .create(NewProduct {
//!         name: "Iphone 14 Pro Max".to_string(),
//!         price: 8500.0,
//!         quantity: 10,
//!     })
//!     .await?;
//!
//! let _in_range = usecase
//!     .query_all(PriceRange::new(Some(5000.0), Some(9000.0)))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod store;
pub mod usecase;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use memory::InMemoryProductStore;
pub use models::{NewProduct, PriceRange, Product, ProductChanges, ProductUpdate};
pub use self::mongodb::MongoProductStore;
pub use store::{ProductStore, ProductStream};
pub use usecase::ProductUsecase;
