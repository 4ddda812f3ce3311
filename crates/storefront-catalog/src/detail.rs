//! Product detail shown inside the modal: lazily fetched full product,
//! thumbnail gallery, and the hand-off to purchase controls.

use storefront_client::ClientError;
use storefront_core::Product;

use crate::ticket::{RequestTicket, TicketCounter};

/// Message shown in place of the product when the detail fetch fails.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load product details.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    Closed,
    Loading,
    Loaded,
    Error(String),
}

/// Input for the purchase/quantity controls rendered next to a loaded product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOptions {
    pub product_id: String,
    pub stock: u32,
}

impl PurchaseOptions {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug)]
pub struct DetailView {
    product_id: Option<String>,
    product: Option<Product>,
    active_image: String,
    phase: DetailPhase,
    tickets: TicketCounter,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            product_id: None,
            product: None,
            active_image: String::new(),
            phase: DetailPhase::Closed,
            tickets: TicketCounter::default(),
        }
    }

    /// Opens the modal on `product_id`, or switches it to a new identifier
    /// while open. Clears whatever was shown before and returns the ticket
    /// for the detail request.
    ///
    /// Returns `None` if the modal is already open on the same identifier.
    pub fn open(&mut self, product_id: &str) -> Option<RequestTicket> {
        if self.is_open() && self.product_id.as_deref() == Some(product_id) {
            return None;
        }
        self.clear();
        self.product_id = Some(product_id.to_owned());
        self.phase = DetailPhase::Loading;
        let ticket = self.tickets.issue(product_id);
        tracing::debug!(product_id, seq = ticket.seq(), "detail request issued");
        Some(ticket)
    }

    /// Closes the modal, dropping product, image and error, and disowning
    /// any request still in flight.
    pub fn close(&mut self) {
        self.clear();
        self.product_id = None;
        self.phase = DetailPhase::Closed;
        self.tickets.invalidate();
    }

    fn clear(&mut self) {
        self.product = None;
        self.active_image.clear();
    }

    /// Applies the outcome of the detail request tagged with `ticket`.
    /// Returns `false` if the result was stale and dropped.
    pub fn apply(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Option<Product>, ClientError>,
    ) -> bool {
        if !self.tickets.settle(ticket) {
            tracing::debug!(
                seq = ticket.seq(),
                product_id = ticket.key(),
                "dropping stale detail response"
            );
            return false;
        }

        match result {
            Ok(Some(product)) => {
                self.active_image = product.initial_image();
                self.product = Some(product);
                self.phase = DetailPhase::Loaded;
            }
            Ok(None) => {
                tracing::warn!(
                    product_id = ticket.key(),
                    "product details response carried no product"
                );
                self.phase = DetailPhase::Error(DETAIL_ERROR_MESSAGE.to_owned());
            }
            Err(err) => {
                tracing::warn!(
                    product_id = ticket.key(),
                    error = %err,
                    "error fetching product details"
                );
                self.phase = DetailPhase::Error(DETAIL_ERROR_MESSAGE.to_owned());
            }
        }
        true
    }

    /// Makes `url` the main image. Only URLs from the loaded product's
    /// gallery are accepted; never triggers a fetch.
    pub fn hover(&mut self, url: &str) -> bool {
        match &self.product {
            Some(product) if product.has_image(url) => {
                url.clone_into(&mut self.active_image);
                true
            }
            _ => false,
        }
    }

    /// [`Self::hover`] by thumbnail position.
    pub fn hover_index(&mut self, index: usize) -> bool {
        let Some(url) = self
            .product
            .as_ref()
            .and_then(|p| p.image_urls.get(index))
            .cloned()
        else {
            return false;
        };
        self.hover(&url)
    }

    #[must_use]
    pub fn purchase_options(&self) -> Option<PurchaseOptions> {
        let product = self.product.as_ref()?;
        let product_id = self.product_id.clone()?;
        Some(PurchaseOptions {
            product_id,
            stock: product.stock,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != DetailPhase::Closed
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn active_image(&self) -> &str {
        &self.active_image
    }

    #[must_use]
    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    /// User-facing error, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
