//! Form-API Bridge
//!
//! Turns a button action into one API call and the call's result into
//! [`FormEdit`]s. Orders and items share the same success/failure handling
//! through [`Resource`]; their differences are spelled out on the two
//! implementations.
//!
//! An action runs in two steps: [`FormAction::start_edits`] is applied
//! immediately, then [`Bridge::perform`] resolves against a snapshot of the
//! form and its edits are applied on completion. Overlapping actions are not
//! coordinated; whichever completes last leaves its result in the form.

use leptos::logging::{log, warn};

use crate::commands::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::form::{FormEdit, FormState, Region};
use crate::models::{Item, Order};
use crate::render::ResultsTable;

/// Flashed after every successful call except deletes.
pub const SUCCESS: &str = "Success";

/// Flashed when a delete fails; the server's detail is not shown.
pub const DELETE_FAILED: &str = "Server error!";

pub const SEARCHING: &str = "searching.. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    CreateOrder,
    UpdateOrder,
    RetrieveOrder,
    DeleteOrder,
    CancelOrder,
    UpdateOrderStatus,
    SearchOrders,
    ClearOrder,
    CreateItem,
    UpdateItem,
    RetrieveItem,
    DeleteItem,
    SearchItems,
    ClearItem,
}

pub const ORDER_ACTIONS: &[FormAction] = &[
    FormAction::CreateOrder,
    FormAction::UpdateOrder,
    FormAction::RetrieveOrder,
    FormAction::DeleteOrder,
    FormAction::CancelOrder,
    FormAction::UpdateOrderStatus,
    FormAction::SearchOrders,
    FormAction::ClearOrder,
];

pub const ITEM_ACTIONS: &[FormAction] = &[
    FormAction::CreateItem,
    FormAction::UpdateItem,
    FormAction::RetrieveItem,
    FormAction::DeleteItem,
    FormAction::SearchItems,
    FormAction::ClearItem,
];

impl FormAction {
    pub fn region(self) -> Region {
        match self {
            FormAction::CreateOrder
            | FormAction::UpdateOrder
            | FormAction::RetrieveOrder
            | FormAction::DeleteOrder
            | FormAction::CancelOrder
            | FormAction::UpdateOrderStatus
            | FormAction::SearchOrders
            | FormAction::ClearOrder => Region::Order,
            _ => Region::Item,
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            FormAction::CreateOrder => "create-btn",
            FormAction::UpdateOrder => "update-btn",
            FormAction::RetrieveOrder => "retrieve-btn",
            FormAction::DeleteOrder => "delete-btn",
            FormAction::CancelOrder => "cancel-btn",
            FormAction::UpdateOrderStatus => "status-btn",
            FormAction::SearchOrders => "search-btn",
            FormAction::ClearOrder => "clear-btn",
            FormAction::CreateItem => "create-item-btn",
            FormAction::UpdateItem => "update-item-btn",
            FormAction::RetrieveItem => "retrieve-item-btn",
            FormAction::DeleteItem => "delete-item-btn",
            FormAction::SearchItems => "search-item-btn",
            FormAction::ClearItem => "clear-item-btn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormAction::CreateOrder | FormAction::CreateItem => "Create",
            FormAction::UpdateOrder | FormAction::UpdateItem => "Update",
            FormAction::RetrieveOrder | FormAction::RetrieveItem => "Retrieve",
            FormAction::DeleteOrder | FormAction::DeleteItem => "Delete",
            FormAction::CancelOrder => "Cancel",
            FormAction::UpdateOrderStatus => "Set Status",
            FormAction::SearchOrders | FormAction::SearchItems => "Search",
            FormAction::ClearOrder | FormAction::ClearItem => "Clear",
        }
    }

    /// Clears act on the form alone and never reach the API.
    pub fn is_local(self) -> bool {
        matches!(self, FormAction::ClearOrder | FormAction::ClearItem)
    }

    /// Edits applied the moment the button is pressed.
    ///
    /// Retrieve-item empties the order flash rather than its own region;
    /// pages built against the original console rely on that.
    pub fn start_edits(self) -> Vec<FormEdit> {
        match self {
            FormAction::SearchOrders => vec![
                FormEdit::EmptyFlash(Region::Order),
                FormEdit::Flash(Region::Order, SEARCHING.to_string()),
            ],
            FormAction::RetrieveItem => vec![FormEdit::EmptyFlash(Region::Order)],
            action if action.is_local() => Vec::new(),
            action => vec![FormEdit::EmptyFlash(action.region())],
        }
    }
}

/// What differs between the order and item handler families
pub trait Resource {
    type Record: Clone;

    const REGION: Region;
    const DELETED: &'static str;

    fn populate(record: Self::Record) -> FormEdit;

    /// Edits for "forget the current record".
    fn clear() -> Vec<FormEdit>;

    fn table(records: &[Self::Record]) -> ResultsTable;

    /// Message flashed as soon as a listing arrives, before the table.
    fn announce(_count: usize) -> Option<String> {
        None
    }
}

pub struct OrderResource;

impl Resource for OrderResource {
    type Record = Order;

    const REGION: Region = Region::Order;
    const DELETED: &'static str = "Order has been Deleted!";

    fn populate(record: Order) -> FormEdit {
        FormEdit::PopulateOrder(record)
    }

    fn clear() -> Vec<FormEdit> {
        vec![FormEdit::ClearOrderFields]
    }

    fn table(records: &[Order]) -> ResultsTable {
        ResultsTable::orders(records)
    }
}

/// Items announce the listing size (`len=N`) before the final message.
pub struct ItemResource;

impl Resource for ItemResource {
    type Record = Item;

    const REGION: Region = Region::Item;
    const DELETED: &'static str = "Item has been Deleted!";

    fn populate(record: Item) -> FormEdit {
        FormEdit::PopulateItem(record)
    }

    fn clear() -> Vec<FormEdit> {
        vec![FormEdit::ClearItemFields]
    }

    fn table(records: &[Item]) -> ResultsTable {
        ResultsTable::items(records)
    }

    fn announce(count: usize) -> Option<String> {
        Some(format!("len={}", count))
    }
}

// ========================
// Result Handling
// ========================

fn failed<R: Resource>(err: &crate::error::ApiError) -> FormEdit {
    warn!("[Bridge] {:?} request failed: {}", R::REGION, err);
    FormEdit::Flash(R::REGION, err.flash_text())
}

/// Create, update, cancel: show the saved record.
fn saved<R: Resource>(result: ApiResult<R::Record>) -> Vec<FormEdit> {
    match result {
        Ok(record) => vec![R::populate(record), FormEdit::Flash(R::REGION, SUCCESS.to_string())],
        Err(err) => vec![failed::<R>(&err)],
    }
}

/// Retrieve: like `saved`, but a miss also clears the form.
fn fetched<R: Resource>(result: ApiResult<R::Record>) -> Vec<FormEdit> {
    match result {
        Ok(record) => saved::<R>(Ok(record)),
        Err(err) => {
            let mut edits = R::clear();
            edits.push(failed::<R>(&err));
            edits
        }
    }
}

fn deleted<R: Resource>(result: ApiResult<()>) -> Vec<FormEdit> {
    match result {
        Ok(()) => {
            let mut edits = R::clear();
            edits.push(FormEdit::Flash(R::REGION, R::DELETED.to_string()));
            edits
        }
        Err(err) => {
            warn!("[Bridge] {:?} delete failed: {}", R::REGION, err);
            vec![FormEdit::Flash(R::REGION, DELETE_FAILED.to_string())]
        }
    }
}

/// Search: table, first row into the form, then "Success".
fn listed<R: Resource>(result: ApiResult<Vec<R::Record>>) -> Vec<FormEdit> {
    let records = match result {
        Ok(records) => records,
        Err(err) => return vec![failed::<R>(&err)],
    };

    let mut edits = Vec::new();
    if let Some(message) = R::announce(records.len()) {
        edits.push(FormEdit::Flash(R::REGION, message));
    }
    edits.push(FormEdit::ShowResults(R::REGION, R::table(&records)));
    if let Some(first) = records.into_iter().next() {
        edits.push(R::populate(first));
    }
    edits.push(FormEdit::Flash(R::REGION, SUCCESS.to_string()));
    edits
}

// ========================
// Bridge
// ========================

#[derive(Debug, Clone)]
pub struct Bridge<T> {
    client: ApiClient<T>,
}

impl<T: Transport> Bridge<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Run `action` against the values in `form` and return the edits that
    /// reflect its outcome. `form` is not modified.
    pub async fn perform(&self, action: FormAction, form: &FormState) -> Vec<FormEdit> {
        log!("[Bridge] {:?}", action);
        let api = &self.client;
        let order = &form.order;
        let item = &form.item;

        match action {
            FormAction::CreateOrder => saved::<OrderResource>(api.create_order(&order.new_order()).await),
            FormAction::UpdateOrder => {
                saved::<OrderResource>(api.update_order(&order.id, &order.payload()).await)
            }
            FormAction::RetrieveOrder => fetched::<OrderResource>(api.get_order(&order.id).await),
            FormAction::DeleteOrder => deleted::<OrderResource>(api.delete_order(&order.id).await),
            FormAction::CancelOrder => {
                saved::<OrderResource>(api.cancel_order(&order.id, &order.payload()).await)
            }
            FormAction::UpdateOrderStatus => saved::<OrderResource>(
                api.update_order_status(&order.id, &order.status_payload())
                    .await,
            ),
            FormAction::SearchOrders => {
                listed::<OrderResource>(api.list_orders(&order.search_filters()).await)
            }
            FormAction::ClearOrder => vec![
                FormEdit::ResetOrderId,
                FormEdit::EmptyFlash(Region::Order),
                FormEdit::ClearOrderFields,
            ],
            FormAction::CreateItem => {
                saved::<ItemResource>(api.create_item(&item.order_id, &item.payload()).await)
            }
            FormAction::UpdateItem => saved::<ItemResource>(
                api.update_item(&item.order_id, &item.item_id, &item.payload())
                    .await,
            ),
            FormAction::RetrieveItem => {
                fetched::<ItemResource>(api.get_item(&item.order_id, &item.item_id).await)
            }
            FormAction::DeleteItem => {
                deleted::<ItemResource>(api.delete_item(&item.order_id, &item.item_id).await)
            }
            FormAction::SearchItems => listed::<ItemResource>(api.list_items(&item.order_id).await),
            // Clearing the item form also wipes the order fields.
            FormAction::ClearItem => vec![
                FormEdit::ClearItemFields,
                FormEdit::EmptyFlash(Region::Item),
                FormEdit::ClearOrderFields,
            ],
        }
    }

    /// Start, perform and complete `action` in one go.
    pub async fn run(&self, action: FormAction, form: &mut FormState) {
        form.apply_all(action.start_edits());
        let edits = self.perform(action, form).await;
        form.apply_all(edits);
    }
}
