use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// List-view projection of a product, as returned by `products/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseProduct {
    #[serde(rename = "productid", alias = "id")]
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(
        rename = "imageurls",
        alias = "imageUrls",
        default,
        deserialize_with = "null_as_default"
    )]
    pub image_urls: Vec<String>,
}

impl BaseProduct {
    /// First image URL, or `placeholder` when the product has none.
    #[must_use]
    pub fn cover_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_urls.first().map_or(placeholder, String::as_str)
    }
}

/// Detail projection of a product, fetched on demand from `products/showProduct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productid", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(
        rename = "imageurls",
        alias = "imageUrls",
        default,
        deserialize_with = "null_as_default"
    )]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Image shown in the main slot right after the product loads.
    #[must_use]
    pub fn initial_image(&self) -> String {
        self.image_urls.first().cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn has_image(&self, url: &str) -> bool {
        self.image_urls.iter().any(|u| u == url)
    }
}

/// Envelope returned by `products/showProduct`. The list endpoint has no
/// equivalent wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowProductResponse {
    #[serde(default)]
    pub product: Option<Product>,
}

/// Reads an explicit JSON `null` as the type's default; `#[serde(default)]`
/// alone only covers a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
