//! The search listing: term, results, and which card (if any) has its modal
//! open.

use storefront_client::ClientError;
use storefront_core::BaseProduct;

use crate::ticket::{RequestTicket, TicketCounter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Empty,
    /// The listing request failed for a reason other than authorization.
    Error(String),
}

/// What the caller should do after a listing result was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// State changed; re-render.
    Rendered,
    /// The session is not authorized; navigate to this route.
    Redirect(String),
    /// The result belonged to a superseded request and was dropped.
    Stale,
    /// No request was needed.
    Unchanged,
}

#[derive(Debug)]
pub struct SearchView {
    term: String,
    results: Vec<BaseProduct>,
    phase: ListPhase,
    selected: Option<BaseProduct>,
    modal_open: bool,
    tickets: TicketCounter,
    login_path: String,
}

impl SearchView {
    #[must_use]
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            term: String::new(),
            results: Vec::new(),
            phase: ListPhase::Idle,
            selected: None,
            modal_open: false,
            tickets: TicketCounter::default(),
            login_path: login_path.into(),
        }
    }

    /// Moves to `term` and returns the ticket for the list request to issue.
    ///
    /// Returns `None` when `term` equals the current term and a listing for
    /// it has already been requested.
    pub fn set_term(&mut self, term: &str) -> Option<RequestTicket> {
        if term == self.term && self.phase != ListPhase::Idle {
            return None;
        }
        self.term = term.to_owned();
        Some(self.begin())
    }

    /// Re-issues the listing for the current term.
    pub fn refresh(&mut self) -> RequestTicket {
        self.begin()
    }

    fn begin(&mut self) -> RequestTicket {
        self.phase = ListPhase::Loading;
        let ticket = self.tickets.issue(&self.term);
        tracing::debug!(term = %self.term, seq = ticket.seq(), "list request issued");
        ticket
    }

    /// Applies the outcome of the list request tagged with `ticket`.
    pub fn apply(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<BaseProduct>, ClientError>,
    ) -> ListOutcome {
        if !self.tickets.settle(ticket) {
            tracing::debug!(
                seq = ticket.seq(),
                term = ticket.key(),
                "dropping stale list response"
            );
            return ListOutcome::Stale;
        }

        match result {
            Ok(products) => {
                self.phase = if products.is_empty() {
                    ListPhase::Empty
                } else {
                    ListPhase::Loaded
                };
                tracing::info!(term = %self.term, count = products.len(), "catalog listing loaded");
                self.results = products;
                ListOutcome::Rendered
            }
            Err(err) if err.is_unauthorized() => {
                tracing::warn!("unauthorized listing request, redirecting to login");
                self.results.clear();
                self.phase = ListPhase::Idle;
                ListOutcome::Redirect(self.login_path.clone())
            }
            Err(err) => {
                tracing::warn!(term = %self.term, error = %err, "error fetching products");
                self.results.clear();
                self.phase = ListPhase::Error(err.to_string());
                ListOutcome::Rendered
            }
        }
    }

    /// Opens the modal for the card at `index` and returns the product
    /// identifier the detail view should load.
    pub fn activate(&mut self, index: usize) -> Option<String> {
        let product = self.results.get(index)?.clone();
        let id = product.id.clone();
        self.selected = Some(product);
        self.modal_open = true;
        Some(id)
    }

    /// Closes the modal and forgets the selection.
    pub fn close_modal(&mut self) {
        self.selected = None;
        self.modal_open = false;
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn results(&self) -> &[BaseProduct] {
        &self.results
    }

    #[must_use]
    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    #[must_use]
    pub fn selected(&self) -> Option<&BaseProduct> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
