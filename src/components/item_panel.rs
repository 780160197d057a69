//! Item Panel
//!
//! Fields and buttons for the items of one order.

use leptos::prelude::*;

use crate::bridge::ITEM_ACTIONS;
use crate::components::{ActionBar, FlashMessage, FormField, SearchResults};
use crate::dom::ITEM_FIELDS;
use crate::form::Region;

#[component]
pub fn ItemPanel() -> impl IntoView {
    view! {
        <section class="panel panel-default item-panel">
            <div class="panel-heading">
                <h3>"Manage Items in an Order:"</h3>
            </div>
            <FlashMessage region=Region::Item />
            <div class="form-horizontal">
                {ITEM_FIELDS.iter().map(|&field| view! { <FormField field=field /> }).collect_view()}
                <ActionBar actions=ITEM_ACTIONS />
            </div>
            <SearchResults region=Region::Item />
        </section>
    }
}
