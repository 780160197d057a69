//! Item Commands
//!
//! Bindings for items nested under an order.

use super::{encode, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Item, ItemPayload};

fn items_path(order_id: &str) -> String {
    format!("/orders/{}/items", order_id)
}

fn item_path(order_id: &str, item_id: &str) -> String {
    format!("/orders/{}/items/{}", order_id, item_id)
}

impl<T: Transport> ApiClient<T> {
    pub async fn create_item(&self, order_id: &str, item: &ItemPayload) -> ApiResult<Item> {
        self.call(Method::Post, &items_path(order_id), encode(item)?).await
    }

    pub async fn get_item(&self, order_id: &str, item_id: &str) -> ApiResult<Item> {
        self.call(Method::Get, &item_path(order_id, item_id), None).await
    }

    pub async fn update_item(&self, order_id: &str, item_id: &str, item: &ItemPayload) -> ApiResult<Item> {
        self.call(Method::Put, &item_path(order_id, item_id), encode(item)?)
            .await
    }

    pub async fn delete_item(&self, order_id: &str, item_id: &str) -> ApiResult<()> {
        self.call_empty(Method::Delete, &item_path(order_id, item_id))
            .await
    }

    /// All items of one order; no filters.
    pub async fn list_items(&self, order_id: &str) -> ApiResult<Vec<Item>> {
        self.call(Method::Get, &items_path(order_id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(items_path("7"), "/orders/7/items");
        assert_eq!(item_path("7", "3"), "/orders/7/items/3");
    }
}
