use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::serde_helpers::{chrono_datetime_as_bson_datetime, uuid_1_as_binary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product entity - one document per product in the `products` collection
///
/// The `id` field is the lookup key for every operation and is stored as a
/// standard (subtype 4) BSON UUID. MongoDB still assigns its own `_id`,
/// which is ignored on read. Timestamps are BSON dates with millisecond
/// precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned once at creation
    #[serde(with = "uuid_1_as_binary")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Quantity on hand
    pub quantity: i32,
    /// Creation timestamp
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Current time at the precision a BSON date can hold
pub fn stored_now() -> DateTime<Utc> {
    to_stored_precision(Utc::now())
}

fn to_stored_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

/// Client-supplied fields for a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// Partial update for an existing product
///
/// `None` means the field was omitted and keeps its stored value.
/// `Some` is applied even when it holds a zero or empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Explicit timestamp; when omitted the update is stamped with "now"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Field-set written by a single find-and-update round-trip
///
/// `updated_at` is always present: the system fills it in when the caller
/// did not. Identity is not part of the field-set and cannot change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

/// Open price interval used by `query`
///
/// Both bounds are exclusive: a product priced exactly at a bound is not
/// part of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound (exclusive)
    #[serde(default, alias = "min_price")]
    pub min: Option<f64>,
    /// Upper bound (exclusive)
    #[serde(default, alias = "max_price")]
    pub max: Option<f64>,
}

impl Product {
    /// Build a full record from client input, assigning identity and timestamps
    pub fn new(input: NewProduct) -> Self {
        let now = stored_now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a field-set in place, touching only the fields it carries
    pub fn apply_changes(&mut self, changes: &ProductChanges) {
        if let Some(ref name) = changes.name {
            self.name = name.clone();
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        self.updated_at = changes.updated_at;
    }
}

impl ProductUpdate {
    /// Resolve the partial update into the field-set to persist
    ///
    /// A caller-supplied `updated_at` is kept even if it is older than the
    /// stored value. Either timestamp is truncated to milliseconds.
    pub fn into_changes(self, now: DateTime<Utc>) -> ProductChanges {
        ProductChanges {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            updated_at: to_stored_precision(self.updated_at.unwrap_or(now)),
        }
    }
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Range with no bounds (matches every product)
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `price` lies strictly inside the range
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price > min) && self.max.map_or(true, |max| price < max)
    }
}
