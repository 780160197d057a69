//! Order Panel
//!
//! Order fields, their buttons, flash line and results table.

use leptos::prelude::*;

use crate::bridge::ORDER_ACTIONS;
use crate::components::{ActionBar, FlashMessage, FormField, SearchResults};
use crate::dom::{ORDER_FIELDS, STATUS_OPTIONS};
use crate::form::Region;
use crate::models::ORDER_STATUSES;

#[component]
pub fn OrderPanel() -> impl IntoView {
    view! {
        <section class="panel panel-default order-panel">
            <div class="panel-heading">
                <h3>"Create, Retrieve, Update, and Delete an Order:"</h3>
            </div>
            <FlashMessage region=Region::Order />
            <div class="form-horizontal">
                {ORDER_FIELDS.iter().map(|&field| view! { <FormField field=field /> }).collect_view()}
                <datalist id=STATUS_OPTIONS>
                    {ORDER_STATUSES.iter().map(|&status| view! { <option value=status></option> }).collect_view()}
                </datalist>
                <ActionBar actions=ORDER_ACTIONS />
            </div>
            <SearchResults region=Region::Order />
        </section>
    }
}
