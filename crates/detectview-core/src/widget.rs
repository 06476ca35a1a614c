//! Upload widget controller.
//!
//! Drives one upload/display cycle per user action:
//!
//! ```text
//! Idle -> Uploading -> (Success | Error) -> Idle
//! ```
//!
//! Re-entry from `Uploading` is allowed; a second upload may start while the
//! first is in flight. [`OverlapPolicy`] decides which response gets to write
//! the display.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info};

use crate::client::Predictor;
use crate::config::OverlapPolicy;
use crate::error::DetectError;
use crate::types::{DetectionResult, SelectedFile};

/// Status text shown while a request is in flight.
pub const UPLOADING_STATUS: &str = "Uploading…";

/// Metadata text shown when the model found nothing.
pub const NO_DETECTIONS: &str = "No objects detected.";

/// Contents of the metadata region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    /// One line per detection, rendered as a list
    List(Vec<String>),
    /// Placeholder text instead of an empty list
    Empty,
}

impl Metadata {
    /// Build the metadata region for a result.
    pub fn from_result(result: &DetectionResult) -> Self {
        if result.detections.is_empty() {
            Metadata::Empty
        } else {
            Metadata::List(result.detections.iter().map(|d| d.summary()).collect())
        }
    }

    /// Plain text of the region, list items joined by newlines.
    pub fn text(&self) -> String {
        match self {
            Metadata::List(items) => items.join("\n"),
            Metadata::Empty => NO_DETECTIONS.to_string(),
        }
    }
}

/// Display surface the widget writes to.
///
/// The widget never creates or destroys the surface; it only updates the
/// status line, the result image source, and the metadata region.
pub trait WidgetView {
    fn set_status(&self, text: &str);
    fn set_image_src(&self, src: &str);
    fn set_metadata(&self, metadata: Metadata);
}

/// Status text after a successful upload.
pub fn done_status(result: &DetectionResult) -> String {
    format!(
        "Done. Device: {}. {} detections.",
        result.device,
        result.detections.len()
    )
}

/// Status text after a failed upload.
pub fn error_status(err: &impl std::fmt::Display) -> String {
    format!("Error: {}", err)
}

/// Appends a `t=<millis>` query parameter that never repeats.
///
/// Two calls within the same millisecond still get distinct stamps.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicU64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next stamp: wall-clock millis, bumped past the previous stamp if needed.
    pub fn stamp(&self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        now.max(prev + 1)
    }

    /// `url` with a fresh cache-busting parameter.
    pub fn bust(&self, url: &str) -> String {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}t={}", url, sep, self.stamp())
    }
}

/// How an upload ended.
#[derive(Debug)]
pub enum UploadOutcome {
    /// Display updated with the result
    Rendered { detections: usize },
    /// Display shows `Error: ...`
    Failed(DetectError),
    /// A newer upload started first; display left alone
    Superseded { generation: u64 },
    /// Nothing was selected
    NoFile,
}

impl UploadOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, UploadOutcome::Rendered { .. })
    }
}

/// The upload widget: one predictor, any number of uploads.
pub struct UploadWidget<P> {
    predictor: P,
    overlap: OverlapPolicy,
    generation: AtomicU64,
    cache: CacheBuster,
}

impl<P: Predictor> UploadWidget<P> {
    /// Create a widget around a predictor.
    pub fn new(predictor: P, overlap: OverlapPolicy) -> Self {
        Self {
            predictor,
            overlap,
            generation: AtomicU64::new(0),
            cache: CacheBuster::new(),
        }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Generation of the most recent user action (0 before any).
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Entry point for the file picker and the drop zone.
    pub async fn select_file<V: WidgetView>(
        &self,
        view: &V,
        file: Option<SelectedFile>,
    ) -> UploadOutcome {
        match file {
            Some(file) => self.upload(view, file).await,
            None => {
                debug!("No file selected");
                UploadOutcome::NoFile
            }
        }
    }

    /// Upload one file and render the response.
    ///
    /// The status line reads [`UPLOADING_STATUS`] before the request is sent.
    pub async fn upload<V: WidgetView>(&self, view: &V, file: SelectedFile) -> UploadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        view.set_status(UPLOADING_STATUS);
        info!(file = %file.name, bytes = file.len(), generation, "Upload started");

        let response = self.predictor.predict(file).await;

        if !self.owns_display(generation) {
            debug!(
                generation,
                latest = self.latest_generation(),
                "Discarding response from superseded upload"
            );
            return UploadOutcome::Superseded { generation };
        }

        let rendered = response.and_then(|result| {
            let src = self.predictor.resolve_result_url(&result.result_url)?;
            Ok((result, src))
        });

        match rendered {
            Ok((result, src)) => {
                view.set_status(&done_status(&result));
                view.set_image_src(&self.cache.bust(&src));
                view.set_metadata(Metadata::from_result(&result));
                info!(
                    generation,
                    device = %result.device,
                    detections = result.detections.len(),
                    "Upload finished"
                );
                UploadOutcome::Rendered {
                    detections: result.detections.len(),
                }
            }
            Err(e) => self.show_error(view, e),
        }
    }

    /// Show an error that happened outside the request, e.g. a dropped file
    /// that could not be read.
    ///
    /// Counts as a new user action: uploads still in flight no longer own
    /// the display.
    pub fn report_error<V: WidgetView>(&self, view: &V, err: DetectError) -> UploadOutcome {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.show_error(view, err)
    }

    fn show_error<V: WidgetView>(&self, view: &V, err: DetectError) -> UploadOutcome {
        error!(error = %err, "Upload failed");
        view.set_status(&error_status(&err));
        UploadOutcome::Failed(err)
    }

    fn owns_display(&self, generation: u64) -> bool {
        match self.overlap {
            OverlapPolicy::LastResponse => true,
            OverlapPolicy::LatestRequest => generation == self.latest_generation(),
        }
    }
}
