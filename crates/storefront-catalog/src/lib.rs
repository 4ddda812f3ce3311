//! Catalog browsing state: the search listing, the product detail modal, and
//! the page session that ties them to the URL and the backend.
//!
//! The views are plain state machines driven by explicit transitions
//! (term changed, product activated, modal closed). Each fetch is tagged with
//! a [`RequestTicket`]; a result whose ticket is no longer current is dropped.

pub mod api;
pub mod detail;
pub mod location;
pub mod page;
pub mod render;
pub mod search;
pub mod ticket;

pub use api::CatalogApi;
pub use detail::{DetailPhase, DetailView, PurchaseOptions, DETAIL_ERROR_MESSAGE};
pub use location::extract_search_term;
pub use page::CatalogPage;
pub use search::{ListOutcome, ListPhase, SearchView};
pub use ticket::RequestTicket;
