//! Form Field Component
//!
//! Labeled text input bound to one field of the shared form state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom::Field;

/// Text input kept in sync with [`FormState`](crate::form::FormState)
#[component]
pub fn FormField(field: Field) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="form-group">
            <label class="control-label col-sm-2" for=field.dom_id()>{field.label()}</label>
            <div class="col-sm-10">
                <input
                    type="text"
                    class="form-control"
                    id=field.dom_id()
                    list=field.datalist()
                    prop:value=move || ctx.form.with(|f| field.value(f).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.form.update(|f| *field.value_mut(f) = value);
                    }
                />
            </div>
        </div>
    }
}
