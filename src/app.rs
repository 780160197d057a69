//! Orders Console App
//!
//! Root component: builds the API bridge, provides context, lays out the
//! order and item panels.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bridge::Bridge;
use crate::commands::{ApiClient, FetchTransport};
use crate::components::{ItemPanel, OrderPanel};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    log!("[APP] Using API base {}", config.base_url);

    let ctx = AppContext::new(Bridge::new(ApiClient::new(FetchTransport, config)));
    provide_context(ctx);

    // Probe the service once on mount
    Effect::new(move |_| {
        let bridge = ctx.bridge();
        spawn_local(async move {
            match bridge.client().check_health().await {
                Ok(health) => log!("[APP] Service health: {}", health.status),
                Err(e) => warn!("[APP] Health check failed: {}", e),
            }
        });
    });

    view! {
        <div class="container">
            <div class="page-header">
                <h1>"Order Demo RESTful Service"</h1>
            </div>
            <OrderPanel />
            <ItemPanel />
        </div>
    }
}
