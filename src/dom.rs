//! DOM Binding Contract
//!
//! Element identifiers the page exposes. Pages and scripts written against
//! the original order console keep working as long as these stay fixed.

use crate::form::{FormState, Region};

pub const ORDER_FLASH: &str = "flash_message";
pub const ORDER_RESULTS: &str = "search_results";
pub const ITEM_FLASH: &str = "flash_message_item";
pub const ITEM_RESULTS: &str = "search_results_item";

/// `<datalist>` of known status values offered on the status input
pub const STATUS_OPTIONS: &str = "order_status_options";

/// Every text input bound to [`FormState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OrderId,
    OrderCustomerName,
    OrderStatus,
    OrderProductName,
    OrderQuantity,
    OrderPrice,
    ItemOrderId,
    ItemId,
    ItemProductName,
    ItemQuantity,
    ItemPrice,
}

pub const ORDER_FIELDS: &[Field] = &[
    Field::OrderId,
    Field::OrderCustomerName,
    Field::OrderStatus,
    Field::OrderProductName,
    Field::OrderQuantity,
    Field::OrderPrice,
];

pub const ITEM_FIELDS: &[Field] = &[
    Field::ItemOrderId,
    Field::ItemId,
    Field::ItemProductName,
    Field::ItemQuantity,
    Field::ItemPrice,
];

impl Field {
    pub fn dom_id(self) -> &'static str {
        match self {
            Field::OrderId => "order_id",
            Field::OrderCustomerName => "order_customer_name",
            Field::OrderStatus => "order_status",
            Field::OrderProductName => "order_product_name",
            Field::OrderQuantity => "order_quantity",
            Field::OrderPrice => "order_price",
            Field::ItemOrderId => "order_id_item",
            Field::ItemId => "item_id",
            Field::ItemProductName => "item_product_name",
            Field::ItemQuantity => "item_quantity",
            Field::ItemPrice => "item_price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::OrderId => "ID:",
            Field::OrderCustomerName => "Customer Name:",
            Field::OrderStatus => "Status:",
            Field::OrderProductName | Field::ItemProductName => "Product Name:",
            Field::OrderQuantity | Field::ItemQuantity => "Quantity:",
            Field::OrderPrice | Field::ItemPrice => "Price:",
            Field::ItemOrderId => "Order ID:",
            Field::ItemId => "Item ID:",
        }
    }

    /// Suggestion list attached to the input, if any.
    pub fn datalist(self) -> Option<&'static str> {
        match self {
            Field::OrderStatus => Some(STATUS_OPTIONS),
            _ => None,
        }
    }

    pub fn value(self, form: &FormState) -> &str {
        match self {
            Field::OrderId => &form.order.id,
            Field::OrderCustomerName => &form.order.customer_name,
            Field::OrderStatus => &form.order.status,
            Field::OrderProductName => &form.order.product_name,
            Field::OrderQuantity => &form.order.quantity,
            Field::OrderPrice => &form.order.price,
            Field::ItemOrderId => &form.item.order_id,
            Field::ItemId => &form.item.item_id,
            Field::ItemProductName => &form.item.product_name,
            Field::ItemQuantity => &form.item.quantity,
            Field::ItemPrice => &form.item.price,
        }
    }

    pub fn value_mut(self, form: &mut FormState) -> &mut String {
        match self {
            Field::OrderId => &mut form.order.id,
            Field::OrderCustomerName => &mut form.order.customer_name,
            Field::OrderStatus => &mut form.order.status,
            Field::OrderProductName => &mut form.order.product_name,
            Field::OrderQuantity => &mut form.order.quantity,
            Field::OrderPrice => &mut form.order.price,
            Field::ItemOrderId => &mut form.item.order_id,
            Field::ItemId => &mut form.item.item_id,
            Field::ItemProductName => &mut form.item.product_name,
            Field::ItemQuantity => &mut form.item.quantity,
            Field::ItemPrice => &mut form.item.price,
        }
    }
}

pub fn flash_id(region: Region) -> &'static str {
    match region {
        Region::Order => ORDER_FLASH,
        Region::Item => ITEM_FLASH,
    }
}

pub fn results_id(region: Region) -> &'static str {
    match region {
        Region::Order => ORDER_RESULTS,
        Region::Item => ITEM_RESULTS,
    }
}
