pub mod client;
pub mod error;

pub use client::{CatalogClient, RequestOptions};
pub use error::ClientError;
pub use reqwest::{Method, Url};
