use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use pmap_core::gateways::{directory::DirectoryGateway, map::MapGateway};
use pmap_gateways::{
    directory::DirectoryClient,
    map::{LoggingMap, NoopMap},
};

mod app;
mod cfg;
mod seed;

#[derive(Debug, Parser)]
#[command(version, about = "Filterable place list bound to a map widget")]
struct Args {
    /// Path of the configuration file.
    #[arg(long, default_value = "placemap.toml")]
    config: PathBuf,
    /// Run without the map widget.
    #[arg(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let cfg = cfg::load(&args.config)?;
    // The map capability is selected once, here; nothing downstream
    // checks for widget availability again.
    let map: Box<dyn MapGateway> = if args.no_map {
        Box::new(NoopMap)
    } else {
        Box::new(LoggingMap)
    };
    let directory: Arc<dyn DirectoryGateway + Send + Sync> = Arc::new(DirectoryClient::new(
        cfg.directory.base_url.clone(),
        cfg.directory.credentials(),
        cfg.directory.timeout,
    )?);
    app::run(cfg, map, directory)
}
