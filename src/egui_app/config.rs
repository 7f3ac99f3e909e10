/**
 * Client Configuration
 *
 * Server URL resolution for the API client.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("BLOGIT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self { server_url: server_url.into() }
    }

    /// Full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
