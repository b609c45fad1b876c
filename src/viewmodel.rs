//! Observable UI state for the restaurant screen.
//!
//! Each piece of state lives in its own `watch` channel so a screen can react to the
//! list, the error and the loading flag independently.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::data::Restaurant;
use crate::repository::RestaurantRepository;

pub struct RestaurantViewModel {
    repository: Arc<dyn RestaurantRepository>,
    restaurants: watch::Sender<Vec<Restaurant>>,
    error_message: watch::Sender<Option<String>>,
    is_loading: watch::Sender<bool>,
}

impl RestaurantViewModel {
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        let (restaurants, _) = watch::channel(Vec::new());
        let (error_message, _) = watch::channel(None);
        let (is_loading, _) = watch::channel(false);
        Self {
            repository,
            restaurants,
            error_message,
            is_loading,
        }
    }

    pub fn restaurants(&self) -> watch::Receiver<Vec<Restaurant>> {
        self.restaurants.subscribe()
    }

    pub fn error_message(&self) -> watch::Receiver<Option<String>> {
        self.error_message.subscribe()
    }

    pub fn is_loading(&self) -> watch::Receiver<bool> {
        self.is_loading.subscribe()
    }

    /// Fetch from the repository and publish the outcome.
    pub async fn load_restaurants(&self) {
        // send_replace: publishing must not depend on someone listening
        self.is_loading.send_replace(true);
        self.error_message.send_replace(None);

        match self.repository.get_restaurants().await {
            Ok(restaurants) => {
                tracing::info!("loaded {} restaurants", restaurants.len());
                self.restaurants.send_replace(restaurants);
            }
            Err(err) => {
                tracing::error!("fail to load restaurants: {err}");
                self.error_message.send_replace(Some(err.to_string()));
            }
        }

        self.is_loading.send_replace(false);
    }

    /// Fire-and-forget variant of [`Self::load_restaurants`].
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<()> {
        let vm = Arc::clone(self);
        tokio::spawn(async move { vm.load_restaurants().await })
    }
}
