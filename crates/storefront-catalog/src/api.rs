use std::future::Future;

use storefront_client::{CatalogClient, ClientError};
use storefront_core::{BaseProduct, Product};

/// The two backend calls the views depend on.
///
/// [`CatalogClient`] is the production implementation; tests substitute
/// in-memory fakes.
pub trait CatalogApi {
    fn list_products(
        &self,
        filter: &str,
    ) -> impl Future<Output = Result<Vec<BaseProduct>, ClientError>> + Send;

    fn show_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<Product>, ClientError>> + Send;
}

impl CatalogApi for CatalogClient {
    fn list_products(
        &self,
        filter: &str,
    ) -> impl Future<Output = Result<Vec<BaseProduct>, ClientError>> + Send {
        CatalogClient::list_products(self, filter)
    }

    fn show_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<Product>, ClientError>> + Send {
        CatalogClient::show_product(self, product_id)
    }
}
