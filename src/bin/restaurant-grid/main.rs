use std::sync::Arc;

use restaurant_catalog::{
    api::HttpRestaurantApi, cli, data::ImageSize, repository::RemoteRestaurantRepository,
    screen::Screen, viewmodel::RestaurantViewModel,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();
    cli::init_tracing(args.verbose)?;

    let config = args.client_config(ImageSize::Small)?;
    let api = HttpRestaurantApi::new(&config)?;
    tracing::info!("fetching restaurants from {}", api.list_url());

    let repository = RemoteRestaurantRepository::new(api);
    let view_model = RestaurantViewModel::new(Arc::new(repository));

    let mut screen = Screen::new(args.adapter(&config), args.grid(), std::io::stdout().lock())
        .with_spinner(true);
    screen.show(&view_model).await?;

    Ok(())
}
