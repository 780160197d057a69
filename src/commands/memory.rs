//! In-Memory Orders API
//!
//! A [`Transport`] that answers like the orders service, backed by a map.
//! Used by tests to drive the client and the form bridge end to end.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default)]
struct MemoryState {
    orders: BTreeMap<String, Value>,
    next_order_id: u64,
    next_item_id: u64,
    requests: Vec<ApiRequest>,
    offline: bool,
    /// Forced answers keyed by method and path (query excluded).
    failures: Vec<(Method, String, ApiResponse)>,
}

/// Cloning shares the same backing state.
#[derive(Debug, Clone, Default)]
pub struct MemoryApi {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// Make every following request fail before reaching the "server".
    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    /// Answer `method` on `path` with `status` and `message` instead of
    /// routing it; the stored orders are left untouched.
    pub fn fail_with(&self, method: Method, path: &str, status: u16, message: &str) {
        self.state
            .borrow_mut()
            .failures
            .push((method, path.to_string(), abort(status, message.to_string())));
    }

    pub fn order_count(&self) -> usize {
        self.state.borrow().orders.len()
    }
}

fn respond(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
    }
}

fn no_content() -> ApiResponse {
    ApiResponse {
        status: 204,
        body: String::new(),
    }
}

fn abort(status: u16, message: String) -> ApiResponse {
    respond(status, json!({ "status": status, "message": message }))
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

impl MemoryState {
    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        if request.url == "/health" {
            return respond(200, json!({ "status": "OK" }));
        }

        let Some(rest) = request.url.strip_prefix("/api") else {
            return abort(404, format!("No route for {}", request.url));
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let body: Value = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(Value::Null);

        match (request.method, segments.as_slice()) {
            (Method::Post, ["orders"]) => self.create_order(&body),
            (Method::Get, ["orders"]) => self.list_orders(&parse_query(query)),
            (Method::Get, ["orders", id]) => match self.orders.get(*id) {
                Some(order) => respond(200, order.clone()),
                None => abort(404, format!("Order with id '{}' could not be found.", id)),
            },
            (Method::Put, ["orders", id]) => self.update_order(id, &body),
            (Method::Delete, ["orders", id]) => {
                self.orders.remove(*id);
                no_content()
            }
            (Method::Put, ["orders", id, "cancel"]) => self.set_status(id, "CANCELLED"),
            (Method::Put, ["orders", id, "status"]) => self.change_status(id, &body),
            (Method::Post, ["orders", id, "items"]) => self.create_item(id, &body),
            (Method::Get, ["orders", id, "items"]) => match self.orders.get(*id) {
                Some(order) => respond(200, order["items"].clone()),
                None => abort(404, format!("Order with id '{}' could not be found.", id)),
            },
            (Method::Get, ["orders", _, "items", item_id]) => match self.find_item(item_id) {
                Some(item) => respond(200, item),
                None => abort(404, format!("Item with id '{}' could not be found.", item_id)),
            },
            (Method::Put, ["orders", id, "items", item_id]) => self.update_item(id, item_id, &body),
            (Method::Delete, ["orders", id, "items", item_id]) => {
                let Some(order) = self.orders.get_mut(*id) else {
                    return abort(404, format!("Order with id '{}' was not found.", id));
                };
                if let Some(items) = order["items"].as_array_mut() {
                    items.retain(|item| item["id"].to_string() != *item_id);
                }
                no_content()
            }
            _ => abort(405, "The method is not allowed for the requested URL.".to_string()),
        }
    }

    fn build_item(&mut self, order_id: &str, body: &Value) -> Result<Value, ApiResponse> {
        let product_name = text_field(body, "product_name")
            .ok_or_else(|| abort(400, "Invalid Item: missing product_name".to_string()))?;
        self.next_item_id += 1;
        Ok(json!({
            "id": self.next_item_id,
            "order_id": order_id,
            "product_name": product_name,
            "quantity": body.get("quantity").cloned().unwrap_or(Value::Null),
            "price": body.get("price").cloned().unwrap_or(Value::Null),
        }))
    }

    fn build_items(&mut self, order_id: &str, body: &Value) -> Result<Value, ApiResponse> {
        let mut items = Vec::new();
        if let Some(raw) = body.get("items").and_then(Value::as_array) {
            for item in raw {
                items.push(self.build_item(order_id, item)?);
            }
        }
        Ok(Value::Array(items))
    }

    fn create_order(&mut self, body: &Value) -> ApiResponse {
        let Some(customer_name) = text_field(body, "customer_name") else {
            return abort(400, "Invalid Order: missing customer_name".to_string());
        };
        let id = match text_field(body, "id").filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                self.next_order_id += 1;
                self.next_order_id.to_string()
            }
        };
        if self.orders.contains_key(&id) {
            return abort(409, format!("Order with id '{}' already exists.", id));
        }
        let status = text_field(body, "status")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "CREATED".to_string());
        let items = match self.build_items(&id, body) {
            Ok(items) => items,
            Err(response) => return response,
        };

        let order = json!({
            "id": id,
            "customer_name": customer_name,
            "status": status,
            "items": items,
        });
        self.orders.insert(id, order.clone());
        respond(201, order)
    }

    fn list_orders(&self, filters: &BTreeMap<String, String>) -> ApiResponse {
        let matches = |order: &&Value| {
            let by_name = filters
                .get("name")
                .map_or(true, |n| order["customer_name"].as_str() == Some(n.as_str()));
            let by_status = filters.get("order_status").map_or(true, |s| {
                order["status"]
                    .as_str()
                    .is_some_and(|status| status.eq_ignore_ascii_case(s))
            });
            let by_product = filters.get("product_name").map_or(true, |p| {
                order["items"]
                    .as_array()
                    .is_some_and(|items| items.iter().any(|i| i["product_name"].as_str() == Some(p.as_str())))
            });
            by_name && by_status && by_product
        };
        let results: Vec<Value> = self.orders.values().filter(matches).cloned().collect();
        respond(200, Value::Array(results))
    }

    fn update_order(&mut self, id: &str, body: &Value) -> ApiResponse {
        if !self.orders.contains_key(id) {
            return abort(404, format!("Order with id '{}' was not found.", id));
        }
        let Some(customer_name) = text_field(body, "customer_name") else {
            return abort(400, "Invalid Order: missing customer_name".to_string());
        };
        let items = match self.build_items(id, body) {
            Ok(items) => items,
            Err(response) => return response,
        };
        let Some(order) = self.orders.get_mut(id) else {
            return abort(404, format!("Order with id '{}' was not found.", id));
        };
        order["customer_name"] = json!(customer_name);
        if let Some(status) = text_field(body, "status").filter(|s| !s.is_empty()) {
            order["status"] = json!(status);
        }
        order["items"] = items;
        respond(200, order.clone())
    }

    fn set_status(&mut self, id: &str, status: &str) -> ApiResponse {
        match self.orders.get_mut(id) {
            Some(order) => {
                order["status"] = json!(status);
                respond(200, order.clone())
            }
            None => abort(404, format!("Order with id '{}' was not found.", id)),
        }
    }

    fn change_status(&mut self, id: &str, body: &Value) -> ApiResponse {
        let Some(order) = self.orders.get(id) else {
            return abort(404, format!("Order with id '{}' was not found.", id));
        };
        let Some(status) = text_field(body, "status") else {
            return abort(400, "Required field 'status' missing from request body".to_string());
        };
        if order["status"] == "CANCELLED" {
            return abort(400, "Cannot update status of a cancelled order".to_string());
        }
        self.set_status(id, &status.to_uppercase())
    }

    fn create_item(&mut self, order_id: &str, body: &Value) -> ApiResponse {
        if !self.orders.contains_key(order_id) {
            return abort(404, format!("Order with id '{}' could not be found.", order_id));
        }
        let item = match self.build_item(order_id, body) {
            Ok(item) => item,
            Err(response) => return response,
        };
        if let Some(items) = self
            .orders
            .get_mut(order_id)
            .and_then(|order| order["items"].as_array_mut())
        {
            items.push(item.clone());
        }
        respond(201, item)
    }

    fn find_item(&self, item_id: &str) -> Option<Value> {
        self.orders
            .values()
            .filter_map(|order| order["items"].as_array())
            .flatten()
            .find(|item| item["id"].to_string() == item_id)
            .cloned()
    }

    fn update_item(&mut self, order_id: &str, item_id: &str, body: &Value) -> ApiResponse {
        let Some(order) = self.orders.get_mut(order_id) else {
            return abort(404, format!("Order with id '{}' was not found.", order_id));
        };
        let Some(item) = order["items"]
            .as_array_mut()
            .and_then(|items| items.iter_mut().find(|item| item["id"].to_string() == item_id))
        else {
            return abort(404, format!("Item with id '{}' could not be found.", item_id));
        };
        for key in ["product_name", "quantity", "price"] {
            if let Some(value) = body.get(key) {
                item[key] = value.clone();
            }
        }
        respond(200, item.clone())
    }
}

#[async_trait(?Send)]
impl Transport for MemoryApi {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        if state.offline {
            return Err(ApiError::Transport("NetworkError when attempting to fetch resource.".to_string()));
        }
        let path = request.url.split('?').next().unwrap_or_default();
        let forced = state
            .failures
            .iter()
            .find(|(method, failing, _)| *method == request.method && failing == path)
            .map(|(_, _, response)| response.clone());
        Ok(forced.unwrap_or_else(|| state.route(&request)))
    }
}
