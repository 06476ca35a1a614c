//! Wire and input types for detectview

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DetectResult;

/// One object instance reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label
    pub cls_name: String,
    /// Confidence score
    pub conf: f64,
    /// Bounding box as `[x1, y1, x2, y2]` in image pixels
    #[serde(rename = "box")]
    pub bbox: [f64; 4],
    /// Numeric class index, when the server sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls_id: Option<i64>,
}

impl Detection {
    /// Display line for the metadata list: `cat (0.91) [10, 21, 30, 41]`.
    ///
    /// The confidence is printed in its shortest decimal form; box
    /// coordinates are rounded to the nearest integer.
    pub fn summary(&self) -> String {
        let coords: Vec<String> = self
            .bbox
            .iter()
            .map(|&n| round_half_up(n).to_string())
            .collect();
        format!("{} ({}) [{}]", self.cls_name, self.conf, coords.join(", "))
    }
}

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Out-of-range values saturate.
pub fn round_half_up(n: f64) -> i64 {
    let r = n.round();
    // f64::round sends halves away from zero; pull negative halves back up
    if n - r == 0.5 {
        (r + 1.0) as i64
    } else {
        r as i64
    }
}

/// Successful response from `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Device the model ran on (`cpu`, `mps`, a CUDA index)
    pub device: String,
    /// Detected objects, possibly empty
    pub detections: Vec<Detection>,
    /// Path or URL of the annotated image
    pub result_url: String,
}

/// Failure body from `POST /predict`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A file the user picked or dropped, held for the duration of one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name sent with the multipart part
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Create from a name and contents already in memory.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> DetectResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { name, bytes })
    }

    /// MIME type sniffed from the contents.
    pub fn mime_type(&self) -> &'static str {
        image::guess_format(&self.bytes)
            .map(|f| f.to_mime_type())
            .unwrap_or("application/octet-stream")
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
