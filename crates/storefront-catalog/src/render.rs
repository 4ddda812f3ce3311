//! Plain-text rendering of the listing and the detail modal.

use std::fmt::Write as _;

use storefront_core::{format_price, BaseProduct};

use crate::detail::{DetailPhase, DetailView, PurchaseOptions};
use crate::search::{ListPhase, SearchView};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_STATE_TEXT: &str = "No products found.";
const LIST_ERROR_NOTICE: &str = "The catalog could not be loaded. Try again later.";

/// Renders the listing: a loading line, the empty state, or one card per
/// product.
#[must_use]
pub fn render_search(view: &SearchView, placeholder_image: &str) -> String {
    match view.phase() {
        ListPhase::Idle => String::new(),
        ListPhase::Loading => LOADING_TEXT.to_owned(),
        ListPhase::Empty => EMPTY_STATE_TEXT.to_owned(),
        ListPhase::Error(_) => format!("{EMPTY_STATE_TEXT}\n{LIST_ERROR_NOTICE}"),
        ListPhase::Loaded => view
            .results()
            .iter()
            .enumerate()
            .map(|(i, p)| render_card(i + 1, p, placeholder_image))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// One card: number, name, formatted price, cover image.
#[must_use]
pub fn render_card(number: usize, product: &BaseProduct, placeholder_image: &str) -> String {
    format!(
        "[{number}] {}\n    {}\n    image: {}",
        product.name,
        format_price(product.price),
        product.cover_image(placeholder_image)
    )
}

/// Renders the modal body for the current detail phase.
#[must_use]
pub fn render_detail(view: &DetailView) -> String {
    let product = match view.phase() {
        DetailPhase::Closed => return String::new(),
        DetailPhase::Loading => return LOADING_TEXT.to_owned(),
        DetailPhase::Error(msg) => return msg.clone(),
        DetailPhase::Loaded => match view.product() {
            Some(p) => p,
            None => return String::new(),
        },
    };

    let mut out = String::new();
    for (i, url) in product.image_urls.iter().enumerate() {
        let marker = if url == view.active_image() { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} thumb {}: {url}", i + 1);
    }
    let _ = writeln!(out, "image: {}", view.active_image());
    let _ = writeln!(out, "{}", or_fallback(&product.name, "No title"));
    let _ = writeln!(out, "{}", format_price(product.price));
    let _ = writeln!(
        out,
        "{}",
        or_fallback(&product.description, "No description available")
    );
    // Zero prints as "Stock: 0"; sold-out is shown by the options line.
    let _ = writeln!(out, "Stock: {}", product.stock);
    let _ = writeln!(out, "Category: {}", or_fallback(&product.category, "N/A"));
    if let Some(options) = view.purchase_options() {
        out.push_str(&render_options(&options));
    }
    out
}

/// Summary line for the purchase controls.
#[must_use]
pub fn render_options(options: &PurchaseOptions) -> String {
    if options.in_stock() {
        format!("Quantity: 1-{}", options.stock)
    } else {
        "Out of stock".to_owned()
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
