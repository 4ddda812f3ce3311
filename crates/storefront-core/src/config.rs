use thiserror::Error;

use crate::app_config::AppConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://react-store.azurewebsites.net";
pub const DEFAULT_USER_AGENT: &str = "storefront/0.1 (catalog-browser)";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/path-to-placeholder-image.jpg";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_opt_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    };

    let api_base_url = or_default("STOREFRONT_API_BASE_URL", DEFAULT_API_BASE_URL);
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_API_BASE_URL".to_string(),
            reason: format!("expected an http(s) origin, got \"{api_base_url}\""),
        });
    }

    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_opt_u64("STOREFRONT_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("STOREFRONT_USER_AGENT", DEFAULT_USER_AGENT);
    let session_cookie = lookup("STOREFRONT_SESSION_COOKIE")
        .ok()
        .filter(|c| !c.trim().is_empty());

    let login_path = or_default("STOREFRONT_LOGIN_PATH", DEFAULT_LOGIN_PATH);
    if !login_path.starts_with('/') {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_LOGIN_PATH".to_string(),
            reason: "must be an absolute route starting with '/'".to_string(),
        });
    }

    let placeholder_image = or_default("STOREFRONT_PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE);

    Ok(AppConfig {
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        session_cookie,
        login_path,
        placeholder_image,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
