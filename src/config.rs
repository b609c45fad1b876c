//! Client configuration.
//!
//! Built with [`ClientConfigBuilder`]; every field has a default pointing at the public
//! restaurant API.

use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::data::ImageSize;

pub const DEFAULT_BASE_URL: &str = "https://restaurant-api.dicoding.dev/";

/// Unset builder fields fall back to [`ClientConfig::default`].
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct ClientConfig {
    /// Root of the API; `list` and `images/` are resolved against it.
    #[builder(setter(into))]
    base_url: String,
    timeout: Duration,
    #[builder(setter(into))]
    user_agent: String,
    /// Variant used for grid thumbnails.
    image_size: ImageSize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("restaurant-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
            image_size: ImageSize::default(),
        }
    }
}

impl ClientConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    fn normalized_base(&self) -> String {
        // `Url::join` drops the last path segment unless the base ends with '/'
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// URL of the restaurant list endpoint.
    pub fn list_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.normalized_base())?.join("list")
    }

    /// Base for picture URLs, without a trailing slash.
    pub fn image_base(&self) -> String {
        format!("{}images", self.normalized_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfigBuilder::default().build().unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("restaurant-catalog/"));
        assert_eq!(config.image_size(), ImageSize::Small);
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let config = ClientConfigBuilder::default()
            .image_size(ImageSize::Medium)
            .build()
            .unwrap();
        let defaults = ClientConfig::default();

        assert_eq!(config.image_size(), ImageSize::Medium);
        assert_eq!(config.base_url(), defaults.base_url());
        assert_eq!(config.timeout(), defaults.timeout());
        assert_eq!(config.user_agent(), defaults.user_agent());
    }

    #[test]
    fn test_list_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.list_url().unwrap().as_str(),
            "https://restaurant-api.dicoding.dev/list"
        );

        let config = ClientConfigBuilder::default()
            .base_url("http://127.0.0.1:8080/api/v1")
            .build()
            .unwrap();
        assert_eq!(
            config.list_url().unwrap().as_str(),
            "http://127.0.0.1:8080/api/v1/list"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfigBuilder::default()
            .base_url("not a url")
            .build()
            .unwrap();
        assert!(config.list_url().is_err());
    }

    #[test]
    fn test_image_base() {
        assert_eq!(
            ClientConfig::default().image_base(),
            "https://restaurant-api.dicoding.dev/images"
        );
    }
}
