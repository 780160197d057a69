//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bridge::{Bridge, FormAction};
use crate::commands::FetchTransport;
use crate::form::FormState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything shown on the page
    pub form: RwSignal<FormState>,
    bridge: StoredValue<Bridge<FetchTransport>>,
}

impl AppContext {
    pub fn new(bridge: Bridge<FetchTransport>) -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            bridge: StoredValue::new(bridge),
        }
    }

    pub fn bridge(&self) -> Bridge<FetchTransport> {
        self.bridge.get_value()
    }

    /// Handle a button press: apply the start edits now, send the request
    /// with the values as they are at this moment, apply the outcome when it
    /// arrives.
    pub fn dispatch(&self, action: FormAction) {
        let form = self.form;
        form.update(|f| f.apply_all(action.start_edits()));
        let snapshot = form.get_untracked();
        let bridge = self.bridge();

        spawn_local(async move {
            let edits = bridge.perform(action, &snapshot).await;
            form.update(|f| f.apply_all(edits));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
