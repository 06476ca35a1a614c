//! Shared fixtures for integration tests.

#![allow(dead_code)]

use detectview_core::{Metadata, WidgetView};
use parking_lot::Mutex;
use serde_json::json;

/// View that records every write.
#[derive(Default)]
pub struct RecordingView {
    pub statuses: Mutex<Vec<String>>,
    pub images: Mutex<Vec<String>>,
    pub metadata: Mutex<Option<Metadata>>,
}

impl RecordingView {
    pub fn status(&self) -> String {
        self.statuses.lock().last().cloned().unwrap_or_default()
    }

    pub fn image(&self) -> Option<String> {
        self.images.lock().last().cloned()
    }

    pub fn metadata(&self) -> Option<Metadata> {
        self.metadata.lock().clone()
    }
}

impl WidgetView for RecordingView {
    fn set_status(&self, text: &str) {
        self.statuses.lock().push(text.to_string());
    }

    fn set_image_src(&self, src: &str) {
        self.images.lock().push(src.to_string());
    }

    fn set_metadata(&self, metadata: Metadata) {
        *self.metadata.lock() = Some(metadata);
    }
}

/// The single-cat response used across tests.
pub fn cat_response() -> serde_json::Value {
    json!({
        "device": "cpu",
        "detections": [
            {"cls_name": "cat", "conf": 0.91, "box": [10.2, 20.7, 30.1, 40.9]}
        ],
        "result_url": "/out/1.png"
    })
}
