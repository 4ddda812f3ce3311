//! The catalog page session: one search listing plus the detail modal,
//! driven by URL changes and user activation.

use crate::api::CatalogApi;
use crate::detail::DetailView;
use crate::location::extract_search_term;
use crate::search::{ListOutcome, SearchView};
use crate::ticket::RequestTicket;

pub struct CatalogPage<A> {
    api: A,
    search: SearchView,
    detail: DetailView,
}

impl<A: CatalogApi> CatalogPage<A> {
    pub fn new(api: A, login_path: impl Into<String>) -> Self {
        Self {
            api,
            search: SearchView::new(login_path),
            detail: DetailView::new(),
        }
    }

    /// Syncs the listing with a page URL. The `query` parameter becomes the
    /// term; without one the current term is kept (empty on first load).
    pub async fn navigate(&mut self, page_url: &str) -> ListOutcome {
        let term =
            extract_search_term(page_url).unwrap_or_else(|| self.search.term().to_owned());
        self.set_term(&term).await
    }

    /// Runs the listing for `term` unless it is already the current one.
    pub async fn set_term(&mut self, term: &str) -> ListOutcome {
        match self.search.set_term(term) {
            Some(ticket) => self.run_listing(ticket).await,
            None => ListOutcome::Unchanged,
        }
    }

    /// Re-runs the listing for the current term.
    pub async fn refresh(&mut self) -> ListOutcome {
        let ticket = self.search.refresh();
        self.run_listing(ticket).await
    }

    async fn run_listing(&mut self, ticket: RequestTicket) -> ListOutcome {
        let result = self.api.list_products(ticket.key()).await;
        let outcome = self.search.apply(&ticket, result);
        if matches!(outcome, ListOutcome::Redirect(_)) {
            self.close_modal();
        }
        outcome
    }

    /// Activates the card at `index`: opens the modal and loads the full
    /// product. Returns `false` if there is no such card.
    pub async fn open(&mut self, index: usize) -> bool {
        let Some(product_id) = self.search.activate(index) else {
            return false;
        };
        if let Some(ticket) = self.detail.open(&product_id) {
            let result = self.api.show_product(ticket.key()).await;
            self.detail.apply(&ticket, result);
        }
        true
    }

    /// Closes the modal. Selection and detail state are cleared together.
    pub fn close_modal(&mut self) {
        self.search.close_modal();
        self.detail.close();
    }

    /// Points the main image at thumbnail `index`.
    pub fn hover(&mut self, index: usize) -> bool {
        self.detail.hover_index(index)
    }

    #[must_use]
    pub fn search(&self) -> &SearchView {
        &self.search
    }

    #[must_use]
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
