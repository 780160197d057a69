//! UI Components
//!
//! Leptos components for the order and item panels.

mod form_field;
mod action_bar;
mod flash_message;
mod search_results;
mod order_panel;
mod item_panel;

pub use form_field::FormField;
pub use action_bar::{ActionBar, ActionButton};
pub use flash_message::FlashMessage;
pub use search_results::SearchResults;
pub use order_panel::OrderPanel;
pub use item_panel::ItemPanel;
