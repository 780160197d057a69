//! Search Results Component
//!
//! Container for the last rendered results table of a region.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom::results_id;
use crate::form::Region;
use crate::render::ResultsTable;

#[component]
pub fn SearchResults(region: Region) -> impl IntoView {
    let ctx = use_app_context();

    // Cell text is escaped by `ResultsTable::to_html`.
    let html = move || {
        ctx.form
            .with(|f| f.results(region).map(ResultsTable::to_html))
            .unwrap_or_default()
    };

    view! {
        <div class="table-responsive col-md-12" id=results_id(region) inner_html=html></div>
    }
}
