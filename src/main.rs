#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod view;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use detectview_core::{
    logging, ClientConfig, OverlapPolicy, PredictClient, UploadWidget, DEFAULT_SERVER,
};
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppContext;

/// detectview - drop an image, see what the model found
#[derive(Parser, Debug)]
#[command(name = "detectview-desktop")]
#[command(about = "Drag-and-drop client for an object-detection backend")]
struct Args {
    /// Base URL of the detection backend
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Which response owns the display when uploads overlap
    #[arg(long, default_value_t = OverlapPolicy::LatestRequest)]
    overlap: OverlapPolicy,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose.saturating_add(1));

    let config = ClientConfig::new(&args.server)
        .with_context(|| format!("invalid server URL '{}'", args.server))?
        .with_timeout_secs(args.timeout_secs)
        .with_overlap(args.overlap);
    let client = PredictClient::new(&config).context("failed to build HTTP client")?;

    tracing::info!(
        "Starting detectview against {} (overlap: {})",
        client.endpoint(),
        config.overlap
    );

    let ctx = AppContext {
        widget: Arc::new(UploadWidget::new(client, config.overlap)),
        server: config.server.to_string(),
    };

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("detectview")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(ctx)
        .launch(app::App);

    Ok(())
}
