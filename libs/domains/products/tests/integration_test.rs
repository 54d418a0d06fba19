//! Integration tests for the Products domain
//!
//! These run against a real MongoDB via testcontainers to check that:
//! - documents round-trip through the driver unchanged
//! - price filters use exclusive bounds on the server
//! - `$set` merges leave omitted fields untouched
//!
//! They need a Docker daemon: `cargo test -p domain_products -- --ignored`

use core_config::{tracing::init_tracing, Environment};
use database::mongodb::{connect_from_config, resolve_database, MongoConfig};
use domain_products::*;
use futures_util::TryStreamExt;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use uuid::Uuid;

async fn setup(
    mongo: &TestMongo,
    test_name: &str,
) -> ProductUsecase<MongoProductStore> {
    init_tracing(&Environment::Development);

    let builder = TestDataBuilder::from_test_name(test_name);
    let config = MongoConfig::with_database(mongo.connection_string(), builder.database_name())
        .with_app_name("domain-products-tests");

    let client = connect_from_config(&config).await.unwrap();
    let db = resolve_database(&client, &config).unwrap();

    ProductUsecase::with_mongo(&db)
}

fn new_product(name: &str, price: f64, quantity: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        quantity,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "create_and_get").await;

    let created = usecase
        .create(new_product("Iphone 14 Pro Max", 8500.0, 10))
        .await
        .unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.created_at, created.updated_at);

    let fetched = usecase.get(created.id).await.unwrap();
    assert_uuid_eq(fetched.id, created.id, "fetched product id");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_unknown_product() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "get_unknown").await;

    let id = Uuid::new_v4();
    let result = usecase.get(id).await;

    assert!(
        matches!(result, Err(ProductError::NotFound(missing)) if missing == id),
        "Expected NotFound, got {:?}",
        result
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_query_price_range_is_exclusive() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "query_exclusive").await;

    assert!(usecase
        .query_all(PriceRange::unbounded())
        .await
        .unwrap()
        .is_empty());

    for price in [10.0, 15.0, 20.0] {
        usecase.create(new_product("p", price, 1)).await.unwrap();
    }

    let in_range = usecase
        .query_all(PriceRange::new(Some(10.0), Some(20.0)))
        .await
        .unwrap();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].price, 15.0);

    let above_ten: Vec<Product> = usecase
        .query(PriceRange::new(Some(10.0), None))
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(above_ten.len(), 2);

    let all = usecase.query_all(PriceRange::unbounded()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_merges_present_fields_only() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "update_merge").await;

    let created = usecase.create(new_product("Chair", 99.5, 1)).await.unwrap();

    let updated = usecase
        .update(
            created.id,
            ProductUpdate {
                quantity: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let stored = assert_some(
        usecase.query_all(PriceRange::unbounded()).await.unwrap().pop(),
        "updated product should still be listed",
    );
    assert_eq!(stored, updated);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_unknown_product() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "update_unknown").await;

    let result = usecase
        .update(
            Uuid::new_v4(),
            ProductUpdate {
                quantity: Some(5),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(_))));
    assert!(usecase
        .query_all(PriceRange::unbounded())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_product() {
    let mongo = TestMongo::new().await;
    let usecase = setup(&mongo, "delete").await;

    let created = usecase.create(new_product("Mug", 8.0, 4)).await.unwrap();

    assert!(usecase.delete(created.id).await.unwrap());
    assert!(matches!(
        usecase.get(created.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        usecase.delete(created.id).await,
        Err(ProductError::NotFound(_))
    ));
}
