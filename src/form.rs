//! Form State
//!
//! Everything the page shows: input values, the two flash regions and the
//! two result tables. Operations never touch the page directly; they produce
//! [`FormEdit`]s which are applied here, so the whole flow runs without a DOM.

use crate::commands::SearchFilters;
use crate::models::{Item, ItemPayload, NewOrder, Order, OrderPayload, StatusPayload};
use crate::numeric::{display_number, parse_float, parse_int};
use crate::render::ResultsTable;

/// Which half of the page an operation reports to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Order,
    Item,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFields {
    pub id: String,
    pub customer_name: String,
    pub status: String,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub order_id: String,
    pub item_id: String,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
}

/// One status line plus everything it displayed since it was last emptied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    text: String,
    shown: Vec<String>,
}

impl Flash {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Messages in display order; the last one is the visible text.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn empty(&mut self) {
        self.text.clear();
        self.shown.clear();
    }

    fn show(&mut self, message: String) {
        self.text = message.clone();
        self.shown.push(message);
    }
}

/// A single mutation of [`FormState`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    /// Order header fields, plus the first item's fields when there is one.
    PopulateOrder(Order),
    PopulateItem(Item),
    /// Customer, status and first-item fields; the id is kept.
    ClearOrderFields,
    ResetOrderId,
    /// Every item field, including the order id the item belongs to.
    ClearItemFields,
    EmptyFlash(Region),
    Flash(Region, String),
    ShowResults(Region, ResultsTable),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub order: OrderFields,
    pub item: ItemFields,
    pub order_flash: Flash,
    pub item_flash: Flash,
    pub order_results: Option<ResultsTable>,
    pub item_results: Option<ResultsTable>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(&self, region: Region) -> &Flash {
        match region {
            Region::Order => &self.order_flash,
            Region::Item => &self.item_flash,
        }
    }

    fn flash_mut(&mut self, region: Region) -> &mut Flash {
        match region {
            Region::Order => &mut self.order_flash,
            Region::Item => &mut self.item_flash,
        }
    }

    pub fn results(&self, region: Region) -> Option<&ResultsTable> {
        match region {
            Region::Order => self.order_results.as_ref(),
            Region::Item => self.item_results.as_ref(),
        }
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::PopulateOrder(order) => {
                self.order.id = order.id.map(|id| id.to_string()).unwrap_or_default();
                self.order.customer_name = order.customer_name.unwrap_or_default();
                self.order.status = order.status.unwrap_or_default();
                if let Some(item) = order.items.into_iter().next() {
                    self.order.product_name = item.product_name.unwrap_or_default();
                    self.order.quantity = item.quantity.map(display_number).unwrap_or_default();
                    self.order.price = item.price.map(display_number).unwrap_or_default();
                }
            }
            FormEdit::PopulateItem(item) => {
                self.item.item_id = item.id.map(|id| id.to_string()).unwrap_or_default();
                self.item.product_name = item.product_name.unwrap_or_default();
                self.item.quantity = item.quantity.map(display_number).unwrap_or_default();
                self.item.price = item.price.map(display_number).unwrap_or_default();
            }
            FormEdit::ClearOrderFields => {
                let id = std::mem::take(&mut self.order.id);
                self.order = OrderFields {
                    id,
                    ..Default::default()
                };
            }
            FormEdit::ResetOrderId => self.order.id.clear(),
            FormEdit::ClearItemFields => self.item = ItemFields::default(),
            FormEdit::EmptyFlash(region) => self.flash_mut(region).empty(),
            FormEdit::Flash(region, message) => self.flash_mut(region).show(message),
            FormEdit::ShowResults(Region::Order, table) => self.order_results = Some(table),
            FormEdit::ShowResults(Region::Item, table) => self.item_results = Some(table),
        }
    }

    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = FormEdit>) {
        for edit in edits {
            self.apply(edit);
        }
    }
}

// ========================
// Request Bodies From Inputs
// ========================

fn item_payload(product_name: &str, quantity: &str, price: &str) -> ItemPayload {
    ItemPayload {
        product_name: product_name.to_string(),
        quantity: parse_int(quantity),
        price: parse_float(price),
    }
}

impl OrderFields {
    /// Create sends the header only; items are added separately.
    pub fn new_order(&self) -> NewOrder {
        NewOrder {
            id: self.id.clone(),
            customer_name: self.customer_name.clone(),
            status: self.status.clone(),
            items: Vec::new(),
        }
    }

    /// Update and cancel send the header with the single item in the form.
    pub fn payload(&self) -> OrderPayload {
        OrderPayload {
            customer_name: self.customer_name.clone(),
            status: self.status.clone(),
            items: vec![item_payload(&self.product_name, &self.quantity, &self.price)],
        }
    }

    pub fn status_payload(&self) -> StatusPayload {
        StatusPayload {
            status: self.status.clone(),
        }
    }

    pub fn search_filters(&self) -> SearchFilters {
        SearchFilters {
            name: self.customer_name.clone(),
            order_status: self.status.clone(),
            product_name: self.product_name.clone(),
        }
    }
}

impl ItemFields {
    pub fn payload(&self) -> ItemPayload {
        item_payload(&self.product_name, &self.quantity, &self.price)
    }
}
