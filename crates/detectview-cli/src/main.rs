//! detectview CLI
//!
//! Thin wrapper around detectview-core for uploading an image from a terminal.
//! Output mirrors what the desktop widget displays.
//!
//! ## Usage
//!
//! ```bash
//! # Upload an image to the default backend (http://127.0.0.1:5000)
//! detectview predict tiles.jpg
//!
//! # Point at another backend
//! detectview --server http://gpu-box:5000 predict tiles.jpg
//!
//! # Print the raw JSON result
//! detectview predict tiles.jpg --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use detectview_core::{
    logging, ClientConfig, Metadata, OverlapPolicy, PredictClient, Predictor, SelectedFile, UploadOutcome,
    UploadWidget, WidgetView, DEFAULT_SERVER, NO_DETECTIONS,
};

/// detectview - object detection from the terminal
#[derive(Parser)]
#[command(name = "detectview")]
#[command(version = "0.1.0")]
#[command(about = "Send an image to an object-detection backend and print what it found")]
struct Cli {
    /// Base URL of the detection backend
    #[arg(short, long, global = true, default_value = DEFAULT_SERVER)]
    server: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Which response owns the display when uploads overlap
    #[arg(long, global = true, default_value_t = OverlapPolicy::LatestRequest)]
    overlap: OverlapPolicy,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and print the detections
    Predict {
        /// Image file to upload
        file: PathBuf,

        /// Print the raw JSON result instead of the widget view
        #[arg(long)]
        json: bool,
    },
}

/// Writes the widget's display regions to the terminal.
struct TerminalView;

impl WidgetView for TerminalView {
    fn set_status(&self, text: &str) {
        if text.starts_with("Error:") {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    fn set_image_src(&self, src: &str) {
        println!("Image: {}", src);
    }

    fn set_metadata(&self, metadata: Metadata) {
        match metadata {
            Metadata::List(items) => {
                for item in items {
                    println!("  - {}", item);
                }
            }
            Metadata::Empty => println!("{}", NO_DETECTIONS),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ClientConfig::new(&cli.server)
        .with_context(|| format!("Invalid server URL '{}'", cli.server))?
        .with_timeout_secs(cli.timeout_secs)
        .with_overlap(cli.overlap);
    let client = PredictClient::new(&config).context("Failed to build HTTP client")?;

    let Commands::Predict { file, json } = cli.command;
    tracing::debug!(
        file = %file.display(),
        json,
        overlap = %config.overlap,
        "Sending to {}",
        client.endpoint()
    );

    if json {
        let file = SelectedFile::from_path(&file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let result = client.predict(file).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(ExitCode::SUCCESS);
    }

    let widget = UploadWidget::new(client, config.overlap);
    let view = TerminalView;

    let outcome = match SelectedFile::from_path(&file).await {
        Ok(file) => widget.select_file(&view, Some(file)).await,
        Err(e) => widget.report_error(&view, e),
    };

    match outcome {
        UploadOutcome::Rendered { .. } => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}
