//! HTTP client for the storefront catalog backend.
//!
//! Every request goes through [`CatalogClient::request`], which resolves the
//! path against the configured origin, attaches the session cookie on
//! credentialed calls, and maps non-2xx statuses to [`ClientError`]. Failures
//! are logged once here and handed back to the caller unchanged; nothing is
//! retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use storefront_core::config::DEFAULT_USER_AGENT;
use storefront_core::{AppConfig, BaseProduct, Product, ShowProductResponse};

use crate::error::ClientError;

const LIST_PATH: &str = "products/list";
const SHOW_PATH: &str = "products/showProduct";

/// Per-request switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Attach the session cookie, the way a browser does for
    /// `withCredentials` requests.
    pub with_credentials: bool,
}

impl RequestOptions {
    pub const CREDENTIALED: Self = Self {
        with_credentials: true,
    };
}

/// Client for the catalog REST API.
///
/// Use [`CatalogClient::new`] with the loaded [`AppConfig`], or
/// [`CatalogClient::with_base_url`] to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    session_cookie: Option<String>,
}

impl CatalogClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the configured origin does
    /// not parse, or [`ClientError::Http`] if the `reqwest::Client` cannot be
    /// built.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.session_cookie.clone(),
        )
    }

    /// Creates a client with default settings against a custom origin.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::build(base_url, None, DEFAULT_USER_AGENT, None)
    }

    fn build(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
        session_cookie: Option<String>,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // A single trailing slash makes `Url::join` append to the origin path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            session_cookie,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a request and returns the response if its status is 2xx.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthorized`] on HTTP 401.
    /// - [`ClientError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::InvalidBaseUrl`] if `path` cannot be joined to the origin.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let result = self.send(method.clone(), path, body, options).await;
        Self::intercept(&method, path, result)
    }

    /// Fetches the product listing narrowed by `filter`. An empty filter is
    /// still sent and yields the unfiltered listing.
    ///
    /// # Errors
    ///
    /// Any error from [`CatalogClient::request`], or
    /// [`ClientError::Deserialize`] if the body is not a product array.
    pub async fn list_products(&self, filter: &str) -> Result<Vec<BaseProduct>, ClientError> {
        let body = serde_json::json!({ "filter": filter });
        let result = self
            .post_json::<Option<Vec<BaseProduct>>>(
                LIST_PATH,
                &body,
                &format!("list(filter={filter:?})"),
            )
            .await
            .map(Option::unwrap_or_default);
        Self::intercept(&Method::POST, LIST_PATH, result)
    }

    /// Fetches the detail projection of one product. `Ok(None)` means the
    /// backend answered with a null product.
    ///
    /// # Errors
    ///
    /// Any error from [`CatalogClient::request`], or
    /// [`ClientError::Deserialize`] if the body is not a `{ product }` envelope.
    pub async fn show_product(&self, product_id: &str) -> Result<Option<Product>, ClientError> {
        let body = serde_json::json!({ "productid": product_id });
        let result = self
            .post_json::<ShowProductResponse>(
                SHOW_PATH,
                &body,
                &format!("showProduct(id={product_id})"),
            )
            .await
            .map(|envelope| envelope.product);
        Self::intercept(&Method::POST, SHOW_PATH, result)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = self
            .send(Method::POST, path, Some(body), RequestOptions::CREDENTIALED)
            .await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = self.endpoint(path)?;
        let mut request = self.client.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        if options.with_credentials {
            if let Some(cookie) = &self.session_cookie {
                request = request.header(COOKIE, cookie);
            }
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join path \"{path}\": {e}"),
            })
    }

    /// Logs a failed call and passes the result through untouched.
    fn intercept<T>(
        method: &Method,
        path: &str,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        if let Err(err) = &result {
            tracing::error!(
                %method,
                path,
                status = err.status(),
                error = %err,
                "catalog request failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_relative_to_origin() {
        let client = CatalogClient::with_base_url("https://store.example.com").unwrap();
        let url = client.endpoint("/products/list").unwrap();
        assert_eq!(url.as_str(), "https://store.example.com/products/list");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = CatalogClient::with_base_url("https://store.example.com/api/").unwrap();
        let url = client.endpoint("products/showProduct").unwrap();
        assert_eq!(
            url.as_str(),
            "https://store.example.com/api/products/showProduct"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = CatalogClient::with_base_url("not a url");
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn credentialed_options_constant() {
        assert!(RequestOptions::CREDENTIALED.with_credentials);
        assert!(!RequestOptions::default().with_credentials);
    }
}
