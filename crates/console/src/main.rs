use std::io;

use anyhow::Context;
use clap::Parser;

use dexdle_console::cli::Args;
use dexdle_console::console::{Console, build_provider};
use dexdle_console::render::OutputFormat;
use dexdle_console::starter::load_catalog;
use dexdle_domain::session::PlayerIdentifier;
use dexdle_infrastructure::config::EngineConfig;
use dexdle_infrastructure::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = args.apply(EngineConfig::from_env()?)?;
    init_tracing(config.log_format)?;

    let catalog = load_catalog(config.catalog_path.as_deref()).context("failed to load the catalog")?;
    tracing::info!(
        entities = catalog.len(),
        seeded = config.random_seed.is_some(),
        "catalog ready"
    );

    let player = match &args.player {
        Some(raw) => PlayerIdentifier::new(raw.as_str()).context("invalid --player")?,
        None => PlayerIdentifier::generate(),
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let provider = build_provider(catalog, config.random_seed);
    let mut console = Console::new(provider, player.to_string(), format, io::stdout().lock());
    console.run(io::stdin().lock())
}
