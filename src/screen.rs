//! Screen for the layered flow: observes a [`RestaurantViewModel`] and draws the grid.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::data::Restaurant;
use crate::view::{GridView, RestaurantAdapter};
use crate::viewmodel::RestaurantViewModel;

pub struct Screen<W> {
    adapter: RestaurantAdapter,
    grid: GridView,
    out: W,
    spinner_enabled: bool,
    spinner: Option<ProgressBar>,
}

impl<W: Write> Screen<W> {
    pub fn new(adapter: RestaurantAdapter, grid: GridView, out: W) -> Self {
        Self {
            adapter,
            grid,
            out,
            spinner_enabled: false,
            spinner: None,
        }
    }

    /// Show a spinner on stderr while loading.
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner_enabled = enabled;
        self
    }

    pub fn adapter(&self) -> &RestaurantAdapter {
        &self.adapter
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Trigger a load and apply every state change until it has settled.
    pub async fn show(&mut self, vm: &RestaurantViewModel) -> io::Result<()> {
        let mut restaurants = vm.restaurants();
        let mut errors = vm.error_message();
        let mut loading = vm.is_loading();

        let load = vm.load_restaurants();
        tokio::pin!(load);
        let mut finished = false;

        loop {
            tokio::select! {
                biased;

                Ok(()) = loading.changed() => {
                    let value = *loading.borrow_and_update();
                    self.on_loading(value);
                }
                Ok(()) = errors.changed() => {
                    let value = errors.borrow_and_update().clone();
                    self.on_error(value)?;
                }
                Ok(()) = restaurants.changed() => {
                    let value = restaurants.borrow_and_update().clone();
                    self.on_restaurants(value)?;
                }
                () = &mut load, if !finished => {
                    finished = true;
                }
                else => break,
            }

            let pending = loading.has_changed().unwrap_or(false)
                || errors.has_changed().unwrap_or(false)
                || restaurants.has_changed().unwrap_or(false);
            if finished && !pending {
                break;
            }
        }

        self.on_loading(false);
        self.out.flush()
    }

    fn on_loading(&mut self, loading: bool) {
        if !loading {
            if let Some(spinner) = self.spinner.take() {
                spinner.finish_and_clear();
            }
            return;
        }

        if self.spinner_enabled && self.spinner.is_none() {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Loading restaurants...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        }
    }

    fn on_error(&mut self, error: Option<String>) -> io::Result<()> {
        match error {
            Some(message) if !message.is_empty() => writeln!(self.out, "! {message}"),
            _ => Ok(()),
        }
    }

    fn on_restaurants(&mut self, restaurants: Vec<Restaurant>) -> io::Result<()> {
        if restaurants.is_empty() {
            tracing::debug!("empty restaurant list, keeping the current grid");
            return Ok(());
        }
        self.adapter.replace(restaurants);
        self.out
            .write_all(self.grid.render(&self.adapter).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::testing::{sample_body, Canned, FakeApi};
    use crate::data::ImageSize;
    use crate::repository::RemoteRestaurantRepository;

    fn screen() -> Screen<Vec<u8>> {
        Screen::new(
            RestaurantAdapter::new("http://img/images", ImageSize::Small),
            GridView::new(2, 24),
            Vec::new(),
        )
    }

    fn view_model(canned: Canned) -> RestaurantViewModel {
        let repo = RemoteRestaurantRepository::new(FakeApi::new(canned));
        RestaurantViewModel::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_show_draws_grid() {
        let vm = view_model(Canned::Body(sample_body()));
        let mut screen = screen();

        screen.show(&vm).await.unwrap();

        assert_eq!(screen.adapter().len(), 2);
        let out = String::from_utf8(screen.into_output()).unwrap();
        assert!(out.contains("Melting Pot"));
        assert!(out.contains("Gorontalo"));
        assert!(out.contains("http://img/images/small/25"));
        assert!(!out.contains('!'));
    }

    #[tokio::test]
    async fn test_show_reports_error() {
        let vm = view_model(Canned::Status(502));
        let mut screen = screen();

        screen.show(&vm).await.unwrap();

        assert!(screen.adapter().is_empty());
        let out = String::from_utf8(screen.into_output()).unwrap();
        assert_eq!(out, "! Response was not successful (HTTP 502)\n");
    }

    #[tokio::test]
    async fn test_empty_list_keeps_grid() {
        let body = serde_json::json!({ "error": false, "message": "success", "count": 0 });
        let vm = view_model(Canned::Body(body));
        let mut screen = screen();

        screen.show(&vm).await.unwrap();

        assert!(screen.into_output().is_empty());
    }
}
