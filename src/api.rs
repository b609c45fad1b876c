//! Remote data source for the restaurant list.
//!
//! [`RestaurantApi`] is the seam the rest of the crate depends on; the production
//! implementation is [`HttpRestaurantApi`], backed by reqwest.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One restaurant as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "pictureId", deserialize_with = "null_as_default")]
    pub picture_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
}

/// Top-level body of `GET /list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub error: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Informational only; may disagree with `restaurants.len()`.
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub restaurants: Vec<RestaurantDto>,
}

#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// Fetch the restaurant list envelope.
    async fn list(&self) -> ApiResult<RestaurantResponse>;
}

pub struct HttpRestaurantApi {
    client: reqwest::Client,
    list_url: Url,
}

impl HttpRestaurantApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;
        let list_url = config.list_url()?;

        Ok(Self { client, list_url })
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }
}

#[async_trait]
impl RestaurantApi for HttpRestaurantApi {
    async fn list(&self) -> ApiResult<RestaurantResponse> {
        tracing::debug!("GET {}", self.list_url);
        let response = self.client.get(self.list_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} responded with {status}", self.list_url);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: self.list_url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(%status, %body, "list response");

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// What the fake answers with on every call.
    #[derive(Clone)]
    pub(crate) enum Canned {
        Body(serde_json::Value),
        Status(u16),
    }

    pub(crate) struct FakeApi {
        canned: Canned,
        calls: AtomicUsize,
    }

    impl FakeApi {
        pub(crate) fn new(canned: Canned) -> Self {
            Self {
                canned,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RestaurantApi for FakeApi {
        async fn list(&self) -> ApiResult<RestaurantResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.canned {
                Canned::Body(json) => Ok(serde_json::from_value(json.clone())?),
                Canned::Status(status) => Err(ApiError::Status {
                    status: *status,
                    url: "http://fake/list".to_string(),
                }),
            }
        }
    }

    pub(crate) fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "error": false,
            "message": "success",
            "count": 2,
            "restaurants": [
                {
                    "id": "rqdv5juczeskfw1e867",
                    "name": "Melting Pot",
                    "description": "Lorem ipsum dolor sit amet",
                    "pictureId": "14",
                    "city": "Medan",
                    "rating": 4.2
                },
                {
                    "id": "s1knt6za9kkfw1e867",
                    "name": "Kafe Kita",
                    "description": "Quisque rutrum",
                    "pictureId": "25",
                    "city": "Gorontalo",
                    "rating": 4
                }
            ]
        })
    }
}
