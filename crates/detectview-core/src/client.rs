//! Detection backend HTTP client.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{DetectError, DetectResult};
use crate::types::{DetectionResult, ErrorBody, SelectedFile};

/// Endpoint path the image is posted to.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Something that turns an image into detections.
///
/// [`PredictClient`] is the HTTP implementation; tests substitute their own.
pub trait Predictor {
    /// Send one image and return the parsed result.
    fn predict(&self, file: SelectedFile) -> impl Future<Output = DetectResult<DetectionResult>>;

    /// Turn a `result_url` from the response into something displayable.
    fn resolve_result_url(&self, result_url: &str) -> DetectResult<String> {
        Ok(result_url.to_string())
    }
}

/// HTTP client for the detection backend.
pub struct PredictClient {
    http: Client,
    server: Url,
    endpoint: Url,
}

impl PredictClient {
    /// Create a new client.
    pub fn new(config: &ClientConfig) -> DetectResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(DetectError::Network)?;
        let endpoint = config.server.join(PREDICT_PATH)?;

        Ok(Self {
            http,
            server: config.server.clone(),
            endpoint,
        })
    }

    /// Full URL uploads are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Predictor for PredictClient {
    async fn predict(&self, file: SelectedFile) -> DetectResult<DetectionResult> {
        let mime = file.mime_type();
        debug!(
            file = %file.name,
            bytes = file.len(),
            mime,
            "Posting image to {}",
            self.endpoint
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // A non-JSON failure body (proxy page, 413 from the upload cap)
            // falls back to the default message.
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!(status = status.as_u16(), "Detection backend rejected upload");
            return Err(DetectError::server(status.as_u16(), message));
        }

        let result: DetectionResult = serde_json::from_slice(&body)?;
        Ok(result)
    }

    fn resolve_result_url(&self, result_url: &str) -> DetectResult<String> {
        Ok(self.server.join(result_url)?.to_string())
    }
}
