//! Action Buttons
//!
//! One button per form action; clicking dispatches it through the bridge.

use leptos::prelude::*;

use crate::bridge::FormAction;
use crate::context::use_app_context;

fn button_class(action: FormAction) -> &'static str {
    match action {
        FormAction::DeleteOrder | FormAction::DeleteItem => "btn btn-danger",
        FormAction::CancelOrder => "btn btn-warning",
        FormAction::SearchOrders | FormAction::SearchItems => "btn btn-primary",
        FormAction::ClearOrder | FormAction::ClearItem => "btn btn-default",
        _ => "btn btn-success",
    }
}

#[component]
pub fn ActionButton(action: FormAction) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            type="button"
            class=button_class(action)
            id=action.button_id()
            on:click=move |_| ctx.dispatch(action)
        >
            {action.label()}
        </button>
    }
}

/// Row of buttons for one handler family
#[component]
pub fn ActionBar(actions: &'static [FormAction]) -> impl IntoView {
    view! {
        <div class="form-group">
            <div class="col-sm-offset-2 col-sm-10">
                {actions.iter().map(|&action| view! { <ActionButton action=action /> }).collect_view()}
            </div>
        </div>
    }
}
