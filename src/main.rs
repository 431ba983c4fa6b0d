use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use linkdump::build_site;
use linkdump::config::open_config;
use linkdump::logger::configure_logger;

/// Builds the static site from `posts/`, `assets/` and `templates/` in the
/// current directory into `output/`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let cur_dir = env::current_dir().context("Could not read the current directory")?;
    let config = open_config(&cur_dir)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let summary = build_site(&config).context("Error building the site")?;
    info!("Done: {} new posts, {} month pages, {} tag pages",
          summary.new_posts.len(), summary.months.len(), summary.tags.len());

    spdlog::default_logger().flush();
    Ok(())
}
