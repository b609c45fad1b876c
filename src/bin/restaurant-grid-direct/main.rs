use std::io::Write;

use restaurant_catalog::{api::HttpRestaurantApi, cli, data::ImageSize, direct};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();
    cli::init_tracing(args.verbose)?;

    let config = args.client_config(ImageSize::Medium)?;
    let api = HttpRestaurantApi::new(&config)?;
    let mut adapter = args.adapter(&config);

    let toast = direct::load_direct(&api, &mut adapter).await;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(args.grid().render(&adapter).as_bytes())?;
    writeln!(stdout, "! {toast}")?;
    Ok(())
}
