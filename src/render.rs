//! Search Result Tables
//!
//! Results are kept as rows of display text and rendered to an HTML string
//! for the results container.

use crate::models::{Item, Order};
use crate::numeric::display_number;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

const ORDER_HEADERS: &[&str] = &[
    "ID",
    "Customer Name",
    "Status",
    "Product Name",
    "Quantity",
    "Price",
];

const ITEM_HEADERS: &[&str] = &["Item ID", "Product Name", "Quantity", "Price"];

/// Falsy values (missing, empty, zero) show as an empty cell.
fn or_blank_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn or_blank_number(value: Option<f64>) -> String {
    match value {
        Some(n) if n != 0.0 && !n.is_nan() => display_number(n),
        _ => String::new(),
    }
}

fn number(value: Option<f64>) -> String {
    value.map(display_number).unwrap_or_default()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl ResultsTable {
    /// One row per order, showing only its first item.
    pub fn orders(orders: &[Order]) -> Self {
        let rows = orders
            .iter()
            .map(|order| {
                let item = order.first_item().cloned().unwrap_or_default();
                vec![
                    order.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                    or_blank_text(order.customer_name.as_deref()),
                    or_blank_text(order.status.as_deref()),
                    or_blank_text(item.product_name.as_deref()),
                    or_blank_number(item.quantity),
                    or_blank_number(item.price),
                ]
            })
            .collect();
        Self {
            headers: ORDER_HEADERS,
            rows,
        }
    }

    pub fn items(items: &[Item]) -> Self {
        let rows = items
            .iter()
            .map(|item| {
                vec![
                    item.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                    or_blank_text(item.product_name.as_deref()),
                    number(item.quantity),
                    number(item.price),
                ]
            })
            .collect();
        Self {
            headers: ITEM_HEADERS,
            rows,
        }
    }

    pub fn headers(&self) -> &[&'static str] {
        self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table table-striped" cellpadding="10">"#);
        html.push_str("<thead><tr>");
        for header in self.headers {
            html.push_str(&format!(r#"<th class="col-md-2">{}</th>"#, header));
        }
        html.push_str("</tr></thead><tbody>");
        for (i, row) in self.rows.iter().enumerate() {
            html.push_str(&format!(r#"<tr id="row_{}">"#, i));
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}
