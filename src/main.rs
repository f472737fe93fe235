use anyhow::Context;
use clap::Parser;
use pindrop_core::config::{Config, GeocoderConfig, InputPosition, UiConfig};

#[derive(Parser)]
#[command(name = "pindrop", about = "Terminal location-search picker")]
struct Cli {
    /// Geocoding API access token (falls back to MAPBOX_ACCESS_TOKEN, then
    /// the config file).
    #[arg(long)]
    token: Option<String>,

    /// Geocoding API base URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Dataset id to search (e.g. mapbox.places).
    #[arg(long)]
    source: Option<String>,

    /// Bias results toward "lon,lat".
    #[arg(long)]
    proximity: Option<String>,

    /// Restrict results to "minLon,minLat,maxLon,maxLat".
    #[arg(long)]
    bbox: Option<String>,

    /// Comma-separated feature types filter (e.g. poi,address).
    #[arg(long)]
    types: Option<String>,

    /// Where the search input sits: top or bottom.
    #[arg(long)]
    input_position: Option<InputPosition>,

    /// Show a "searching…" marker while a lookup is in flight.
    #[arg(long)]
    show_loader: bool,

    /// Placeholder text shown while the query is empty.
    #[arg(long)]
    placeholder: Option<String>,

    /// Write debug logs to /tmp/pindrop-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/pindrop-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("pindrop debug log started — tail -f /tmp/pindrop-debug.log");
    }

    let file_config = Config::load().unwrap_or_else(|_| Config::defaults());
    let (search, ui) = resolve(cli, file_config)?;

    // The TUI blocks this thread; lookups run on the runtime's workers.
    let runtime = tokio::runtime::Runtime::new()?;
    let selected = pindrop_tui::run(search, ui, runtime.handle().clone())?;

    if let Some(suggestion) = selected {
        println!("{}", suggestion.place_name);
    }
    Ok(())
}

/// Collapse the config file and CLI flags into the immutable configs the TUI
/// consumes. CLI flags win; the access token additionally falls back to the
/// MAPBOX_ACCESS_TOKEN environment variable.
fn resolve(cli: Cli, file: Config) -> anyhow::Result<(GeocoderConfig, UiConfig)> {
    let token = cli
        .token
        .or_else(|| std::env::var("MAPBOX_ACCESS_TOKEN").ok())
        .or(file.search.access_token)
        .unwrap_or_default();

    let search = GeocoderConfig::new(token)
        .context("no access token configured")?
        .with_endpoint(cli.endpoint.unwrap_or(file.search.endpoint))
        .with_source(cli.source.unwrap_or(file.search.source))
        .with_proximity(cli.proximity.unwrap_or(file.search.proximity))
        .with_bbox(cli.bbox.unwrap_or(file.search.bbox))
        .with_types(cli.types.unwrap_or(file.search.types));

    let ui = UiConfig {
        input_position: cli.input_position.unwrap_or(file.ui.input_position),
        show_loader: cli.show_loader || file.ui.show_loader,
        placeholder: cli.placeholder.unwrap_or(file.ui.placeholder),
    };

    Ok((search, ui))
}
