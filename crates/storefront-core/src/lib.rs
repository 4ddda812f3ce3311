pub mod app_config;
pub mod config;
pub mod price;
pub mod products;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use price::format_price;
pub use products::{BaseProduct, Product, ShowProductResponse};
