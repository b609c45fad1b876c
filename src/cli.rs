//! Command line and environment configuration shared by both binaries.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
use crate::data::ImageSize;
use crate::view::{GridView, RestaurantAdapter, MIN_CELL_WIDTH};

#[derive(Debug, Parser)]
#[command(version, about = "Show the restaurant list as a grid of cards")]
pub struct GridArgs {
    /// API root serving `list` and `images/`
    #[arg(long, env = "RESTAURANT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Thumbnail variant: small, medium or large; defaults to small for the
    /// layered grid and medium for the direct one
    #[arg(long, env = "RESTAURANT_IMAGE_SIZE")]
    pub image_size: Option<ImageSize>,

    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    #[arg(long, default_value_t = 30)]
    pub cell_width: u16,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log at debug level, including response bodies
    #[arg(short, long)]
    pub verbose: bool,
}

impl GridArgs {
    /// `default_size` applies when no `--image-size` was given.
    pub fn client_config(&self, default_size: ImageSize) -> anyhow::Result<ClientConfig> {
        let config = ClientConfigBuilder::default()
            .base_url(self.base_url.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .image_size(self.image_size.unwrap_or(default_size))
            .build()
            .with_context(|| "fail to build client config")?;
        // surface a bad URL before any request goes out
        config
            .list_url()
            .with_context(|| format!("invalid base url {}", self.base_url))?;
        Ok(config)
    }

    pub fn adapter(&self, config: &ClientConfig) -> RestaurantAdapter {
        RestaurantAdapter::new(config.image_base(), config.image_size())
    }

    pub fn grid(&self) -> GridView {
        if usize::from(self.cell_width) < MIN_CELL_WIDTH {
            tracing::warn!(
                "cell width {} is too narrow, using {MIN_CELL_WIDTH}",
                self.cell_width
            );
        }
        GridView::new(self.columns.into(), self.cell_width.into())
    }
}

/// Load `.env` and parse arguments.
pub fn parse_args() -> GridArgs {
    dotenvy::dotenv().ok();
    GridArgs::parse()
}

pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .with_context(|| "fail to setup logging")?;
    Ok(())
}
