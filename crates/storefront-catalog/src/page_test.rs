use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use rust_decimal::Decimal;
use storefront_client::ClientError;
use storefront_core::{BaseProduct, Product};

use super::*;

/// In-memory backend that records every call.
#[derive(Default)]
struct FakeApi {
    listings: HashMap<String, Vec<BaseProduct>>,
    details: HashMap<String, Product>,
    unauthorized: bool,
    list_calls: Mutex<Vec<String>>,
    show_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    fn show_calls(&self) -> Vec<String> {
        self.show_calls.lock().unwrap().clone()
    }
}

impl CatalogApi for FakeApi {
    fn list_products(
        &self,
        filter: &str,
    ) -> impl Future<Output = Result<Vec<BaseProduct>, ClientError>> + Send {
        self.list_calls.lock().unwrap().push(filter.to_owned());
        let result = if self.unauthorized {
            Err(ClientError::Unauthorized {
                url: "fake://products/list".to_owned(),
            })
        } else {
            Ok(self.listings.get(filter).cloned().unwrap_or_default())
        };
        std::future::ready(result)
    }

    fn show_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<Product>, ClientError>> + Send {
        self.show_calls.lock().unwrap().push(product_id.to_owned());
        std::future::ready(Ok(self.details.get(product_id).cloned()))
    }
}

fn base(id: &str, name: &str) -> BaseProduct {
    BaseProduct {
        id: id.to_owned(),
        name: name.to_owned(),
        price: Decimal::from(49_900),
        image_urls: vec![format!("{id}-1.jpg")],
    }
}

fn full(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        description: String::new(),
        price: Decimal::from(49_900),
        stock: 3,
        category: "Lighting".to_owned(),
        image_urls: vec![format!("{id}-1.jpg"), format!("{id}-2.jpg")],
    }
}

fn fake() -> FakeApi {
    let mut api = FakeApi::default();
    api.listings
        .insert("lamp".to_owned(), vec![base("1", "Lamp"), base("2", "Desk Lamp")]);
    api.listings.insert(String::new(), vec![base("1", "Lamp")]);
    api.details.insert("1".to_owned(), full("1"));
    api.details.insert("2".to_owned(), full("2"));
    api
}

#[tokio::test]
async fn navigate_uses_query_parameter_as_filter() {
    let mut page = CatalogPage::new(fake(), "/login");
    let outcome = page.navigate("/search?query=lamp").await;
    assert_eq!(outcome, ListOutcome::Rendered);
    assert_eq!(page.api().list_calls(), vec!["lamp".to_owned()]);
    assert_eq!(page.search().results().len(), 2);
}

#[tokio::test]
async fn navigate_without_query_requests_unfiltered_listing() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("/search").await;
    assert_eq!(page.api().list_calls(), vec![String::new()]);
}

#[tokio::test]
async fn same_url_twice_issues_one_request() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("/search?query=lamp").await;
    let outcome = page.navigate("/search?query=lamp").await;
    assert_eq!(outcome, ListOutcome::Unchanged);
    assert_eq!(page.api().list_calls().len(), 1);
}

#[tokio::test]
async fn opening_a_card_fetches_only_its_identifier() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("?query=lamp").await;

    assert!(page.open(1).await);
    assert!(page.search().modal_open());
    assert_eq!(page.api().show_calls(), vec!["2".to_owned()]);
    assert_eq!(page.detail().active_image(), "2-1.jpg");
}

#[tokio::test]
async fn hover_does_not_call_backend() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("?query=lamp").await;
    page.open(0).await;

    assert!(page.hover(1));
    assert_eq!(page.detail().active_image(), "1-2.jpg");
    assert_eq!(page.api().show_calls().len(), 1);
}

#[tokio::test]
async fn close_then_open_other_product_resets_detail() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("?query=lamp").await;
    page.open(0).await;
    page.close_modal();

    assert!(!page.search().modal_open());
    assert!(page.search().selected().is_none());
    assert!(page.detail().product().is_none());

    page.open(1).await;
    assert_eq!(page.detail().product().map(|p| p.id.as_str()), Some("2"));
    assert_eq!(page.api().show_calls(), vec!["1".to_owned(), "2".to_owned()]);
}

#[tokio::test]
async fn unauthorized_listing_redirects_and_renders_nothing() {
    let mut api = fake();
    api.unauthorized = true;
    let mut page = CatalogPage::new(api, "/login");

    let outcome = page.navigate("?query=lamp").await;
    assert_eq!(outcome, ListOutcome::Redirect("/login".to_owned()));
    assert!(page.search().results().is_empty());
    assert!(!page.search().modal_open());
}

#[tokio::test]
async fn opening_missing_index_is_a_no_op() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("").await;
    assert!(!page.open(5).await);
    assert!(page.api().show_calls().is_empty());
    assert!(!page.search().modal_open());
}

#[tokio::test]
async fn refresh_reissues_current_term() {
    let mut page = CatalogPage::new(fake(), "/login");
    page.navigate("?query=lamp").await;
    page.refresh().await;
    assert_eq!(
        page.api().list_calls(),
        vec!["lamp".to_owned(), "lamp".to_owned()]
    );
}
