//! Frontend Models
//!
//! Data structures matching the orders API resources and request bodies.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Resource identifier as returned by the API.
///
/// The service may answer with integer ids while the form holds free text,
/// so both JSON strings and numbers are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Int(n) => Self(n.to_string()),
            RawId::Float(n) => Self(crate::numeric::display_number(n)),
        })
    }
}

/// Line item of an order (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub order_id: Option<ResourceId>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Order {
    /// Only the first item is ever mirrored into the order form.
    pub fn first_item(&self) -> Option<&Item> {
        self.items.first()
    }
}

// ========================
// Request Bodies
// ========================

/// Item fields as sent by the client.
///
/// `quantity` and `price` are NaN when the input did not parse; NaN
/// serializes to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub product_name: String,
    #[serde(serialize_with = "crate::numeric::serialize_js_number")]
    pub quantity: f64,
    #[serde(serialize_with = "crate::numeric::serialize_js_number")]
    pub price: f64,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub id: String,
    pub customer_name: String,
    pub status: String,
    pub items: Vec<ItemPayload>,
}

/// Body of `PUT /orders/{id}` and `PUT /orders/{id}/cancel`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub customer_name: String,
    pub status: String,
    pub items: Vec<ItemPayload>,
}

/// Body of `PUT /orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusPayload {
    pub status: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Status values the service understands, offered as input hints.
pub const ORDER_STATUSES: &[&str] = &[
    "CREATED",
    "IN_PROGRESS",
    "SHIPPED",
    "COMPLETED",
    "CANCELLED",
];
