//! Connection settings for the Weblate API.

/// Public Weblate instance used when no host is given.
pub const DEFAULT_HOST: &str = "hosted.weblate.org";

/// Where to reach Weblate and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name, optionally with an explicit `http://` or `https://` scheme.
    pub host: String,
    /// API token, sent as `Authorization: Token <token>`.
    pub token: String,
}

impl ClientConfig {
    /// Creates a config for the default host.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            token: token.into(),
        }
    }

    /// Sets the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Base URL without trailing slash. Bare host names are reached over HTTPS.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }
}
