use async_trait::async_trait;
use thiserror::Error;

use crate::api::{ApiError, RestaurantApi, RestaurantDto};
use crate::data::Restaurant;

/// Failures surfaced to the UI. The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Response was not successful (HTTP {status})")]
    Unsuccessful { status: u16 },

    /// The envelope came back with `error: true`.
    #[error("Error: {message}")]
    Rejected { message: String },

    #[error("Error: {0}")]
    Transport(#[source] ApiError),
}

impl From<ApiError> for RepositoryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, .. } => Self::Unsuccessful { status },
            other => Self::Transport(other),
        }
    }
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn get_restaurants(&self) -> Result<Vec<Restaurant>, RepositoryError>;
}

impl From<RestaurantDto> for Restaurant {
    fn from(dto: RestaurantDto) -> Self {
        let RestaurantDto {
            id,
            name,
            description,
            picture_id,
            city,
            rating,
        } = dto;
        Self {
            id,
            name,
            description,
            picture_id,
            city,
            rating,
        }
    }
}

/// Repository backed by the remote list endpoint.
pub struct RemoteRestaurantRepository<A> {
    api: A,
}

impl<A: RestaurantApi> RemoteRestaurantRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: RestaurantApi> RestaurantRepository for RemoteRestaurantRepository<A> {
    async fn get_restaurants(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let envelope = self.api.list().await?;
        if envelope.error {
            return Err(RepositoryError::Rejected {
                message: envelope.message,
            });
        }

        let listed = envelope.restaurants.len();
        if usize::try_from(envelope.count).ok() != Some(listed) {
            tracing::warn!(
                "envelope count {} does not match {listed} listed restaurants",
                envelope.count
            );
        }

        Ok(envelope
            .restaurants
            .into_iter()
            .map(Restaurant::from)
            .collect())
    }
}
