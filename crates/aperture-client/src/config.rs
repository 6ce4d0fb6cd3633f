//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client can start with zero
//! configuration against the public service.

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API.
    /// Env: `APERTURE_API_URL`
    /// Default: `https://api.aperture.pictures/api`
    pub api_base_url: String,

    /// Base URL of the image CDN.  Photo and avatar records carry paths
    /// relative to this base; the client never fetches image bytes itself.
    /// Env: `APERTURE_IMAGES_URL`
    /// Default: `https://images.aperture.pictures`
    pub images_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.aperture.pictures/api".to_string(),
            images_base_url: "https://images.aperture.pictures".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("APERTURE_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        if let Ok(url) = std::env::var("APERTURE_IMAGES_URL") {
            if !url.is_empty() {
                config.images_base_url = url;
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }

    /// Absolute URL for an image path as returned by the API.
    pub fn image_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.images_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
