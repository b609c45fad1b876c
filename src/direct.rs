//! Direct flow: the screen talks to the API itself, without repository or view model.

use crate::api::{ApiError, RestaurantApi};
use crate::data::Restaurant;
use crate::view::RestaurantAdapter;

/// One-line message for the user.
pub type Toast = String;

/// Fetch the list once and bind it into `adapter`.
///
/// The adapter is only touched on success; every outcome yields a toast.
pub async fn load_direct<A: RestaurantApi + ?Sized>(
    api: &A,
    adapter: &mut RestaurantAdapter,
) -> Toast {
    let envelope = match api.list().await {
        Ok(envelope) => envelope,
        Err(ApiError::Status { status, .. }) => {
            tracing::error!("response not successful: {status}");
            return format!("Failed to load data: {status}");
        }
        Err(e) => {
            tracing::error!("api call failed: {e}");
            return format!("Connection failed: {e}");
        }
    };

    if envelope.error {
        tracing::error!("error from api: {}", envelope.message);
        return format!("Error: {}", envelope.message);
    }

    adapter.replace(
        envelope
            .restaurants
            .into_iter()
            .map(Restaurant::from)
            .collect(),
    );
    tracing::info!("success: loaded {} restaurants", envelope.count);
    format!("Loaded {} restaurants", envelope.count)
}
