//! detectview core library
//!
//! Headless upload widget for a remote object-detection endpoint.
//!
//! ## Overview
//!
//! A user picks or drops an image; the widget posts it as multipart form data
//! to `POST /predict`, then renders the server's annotated image and the list
//! of detections. The model itself lives behind HTTP and is not part of this
//! crate.
//!
//! The crate is split along the two boundaries of that cycle:
//!
//! - **HTTP**: [`PredictClient`] implements [`Predictor`] over `reqwest`.
//! - **Display**: [`WidgetView`] is whatever surface shows the status line,
//!   result image, and detection list (Dioxus signals, a terminal, a test
//!   recorder).
//!
//! [`UploadWidget`] ties them together.
//!
//! ## Quick Start
//!
//! ```ignore
//! use detectview_core::{ClientConfig, PredictClient, SelectedFile, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let client = PredictClient::new(&config)?;
//!     let widget = UploadWidget::new(client, config.overlap);
//!
//!     let file = SelectedFile::from_path("tiles.jpg").await?;
//!     widget.upload(&my_view, file).await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod types;
pub mod widget;

// Re-exports
pub use client::{PredictClient, Predictor, IMAGE_FIELD, PREDICT_PATH};
pub use config::{ClientConfig, OverlapPolicy, ACCEPTED_EXTENSIONS, DEFAULT_SERVER};
pub use error::{DetectError, DetectResult};
pub use gesture::{first_dropped, DragGesture};
pub use types::{Detection, DetectionResult, ErrorBody, SelectedFile};
pub use widget::{
    done_status, error_status, CacheBuster, Metadata, UploadOutcome, UploadWidget, WidgetView,
    NO_DETECTIONS, UPLOADING_STATUS,
};
