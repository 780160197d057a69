//! Order Commands
//!
//! Bindings for `/orders` and its sub-resources.

use super::{encode, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{NewOrder, Order, OrderPayload, StatusPayload};

/// Optional filters for listing orders.
///
/// Values are appended verbatim, without percent-encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub name: String,
    pub order_status: String,
    pub product_name: String,
}

impl SearchFilters {
    /// `name`, `order_status`, `product_name` in that order, empty ones left out.
    pub fn query_string(&self) -> String {
        [
            ("name", &self.name),
            ("order_status", &self.order_status),
            ("product_name", &self.product_name),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
    }

    /// Collection path, with no `?` at all when nothing is filtered.
    pub fn path(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            "/orders".to_string()
        } else {
            format!("/orders?{}", query)
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn create_order(&self, order: &NewOrder) -> ApiResult<Order> {
        self.call(Method::Post, "/orders", encode(order)?).await
    }

    pub async fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        self.call(Method::Get, &format!("/orders/{}", order_id), None).await
    }

    pub async fn update_order(&self, order_id: &str, order: &OrderPayload) -> ApiResult<Order> {
        self.call(Method::Put, &format!("/orders/{}", order_id), encode(order)?)
            .await
    }

    pub async fn delete_order(&self, order_id: &str) -> ApiResult<()> {
        self.call_empty(Method::Delete, &format!("/orders/{}", order_id))
            .await
    }

    pub async fn cancel_order(&self, order_id: &str, order: &OrderPayload) -> ApiResult<Order> {
        self.call(
            Method::Put,
            &format!("/orders/{}/cancel", order_id),
            encode(order)?,
        )
        .await
    }

    pub async fn update_order_status(&self, order_id: &str, status: &StatusPayload) -> ApiResult<Order> {
        self.call(
            Method::Put,
            &format!("/orders/{}/status", order_id),
            encode(status)?,
        )
        .await
    }

    pub async fn list_orders(&self, filters: &SearchFilters) -> ApiResult<Vec<Order>> {
        self.call(Method::Get, &filters.path(), None).await
    }
}
