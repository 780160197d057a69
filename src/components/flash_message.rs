//! Flash Message Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom::flash_id;
use crate::form::Region;

/// Status line for one region, showing the latest message
#[component]
pub fn FlashMessage(region: Region) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="alert alert-info" id=flash_id(region)>
            {move || ctx.form.with(|f| f.flash(region).text().to_string())}
        </div>
    }
}
