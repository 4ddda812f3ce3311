/// Process-wide settings, resolved once at start-up and passed down to the
/// HTTP client and the views.
#[derive(Clone)]
pub struct AppConfig {
    /// Backend origin every catalog request is resolved against.
    pub api_base_url: String,
    pub log_level: String,
    /// `None` leaves the HTTP client without an explicit timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Sent as the `Cookie` header on credentialed requests.
    pub session_cookie: Option<String>,
    /// Navigation target when the backend answers 401.
    pub login_path: String,
    /// Card image used when a product has no image URLs.
    pub placeholder_image: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[redacted]"),
            )
            .field("login_path", &self.login_path)
            .field("placeholder_image", &self.placeholder_image)
            .finish()
    }
}
