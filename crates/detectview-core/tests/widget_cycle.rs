//! Full upload/display cycles through UploadWidget.

mod common;

use std::collections::VecDeque;
use std::sync::Arc;

use common::RecordingView;
use detectview_core::{
    first_dropped, ClientConfig, DetectError, DetectResult, DetectionResult, Metadata, OverlapPolicy,
    PredictClient, Predictor, SelectedFile, UploadOutcome, UploadWidget, UPLOADING_STATUS,
};
use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::oneshot;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn widget_for(server: &MockServer) -> UploadWidget<PredictClient> {
    let config = ClientConfig::new(&server.uri()).unwrap();
    let client = PredictClient::new(&config).unwrap();
    UploadWidget::new(client, config.overlap)
}

fn file(name: &str) -> SelectedFile {
    SelectedFile::new(name, format!("bytes of {}", name).into_bytes())
}

async fn mount(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test]
async fn test_success_cycle() {
    let server = MockServer::start().await;
    mount(&server, 200, common::cat_response()).await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    let outcome = widget.upload(&view, file("cat.png")).await;
    assert!(outcome.is_rendered());

    let status = view.status();
    assert!(status.contains("Device: cpu"));
    assert!(status.contains("1 detections"));
    assert_eq!(
        view.metadata(),
        Some(Metadata::List(vec!["cat (0.91) [10, 21, 30, 41]".to_string()]))
    );

    let image = view.image().unwrap();
    let expected_prefix = format!("{}/out/1.png?t=", server.uri());
    assert!(image.starts_with(&expected_prefix), "got {}", image);
}

#[tokio::test]
async fn test_empty_detections_show_placeholder() {
    let server = MockServer::start().await;
    mount(
        &server,
        200,
        json!({"device": "mps", "detections": [], "result_url": "/out/2.png"}),
    )
    .await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    widget.upload(&view, file("empty.png")).await;
    assert_eq!(view.status(), "Done. Device: mps. 0 detections.");
    let metadata = view.metadata().unwrap();
    assert_eq!(metadata, Metadata::Empty);
    assert_eq!(metadata.text(), "No objects detected.");
}

#[tokio::test]
async fn test_consecutive_uploads_get_distinct_image_sources() {
    let server = MockServer::start().await;
    mount(&server, 200, common::cat_response()).await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    widget.upload(&view, file("a.png")).await;
    widget.upload(&view, file("a.png")).await;

    let images = view.images.lock().clone();
    assert_eq!(images.len(), 2);
    assert_ne!(images[0], images[1]);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_server_error_message() {
    let server = MockServer::start().await;
    mount(&server, 400, json!({"error": "bad image"})).await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    widget.upload(&view, file("x.gif")).await;
    assert_eq!(view.status(), "Error: bad image");
    assert!(view.image().is_none());
}

#[tokio::test]
async fn test_server_error_default_message() {
    let server = MockServer::start().await;
    mount(&server, 500, json!({"detail": "boom"})).await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    widget.upload(&view, file("x.png")).await;
    assert_eq!(view.status(), "Error: Upload failed");
}

#[tokio::test]
async fn test_failure_does_not_poison_next_upload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad image"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount(&server, 200, common::cat_response()).await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    assert!(matches!(
        widget.upload(&view, file("a.png")).await,
        UploadOutcome::Failed(_)
    ));
    assert!(widget.upload(&view, file("a.png")).await.is_rendered());
    assert!(view.status().starts_with("Done."));
}

// ============================================================================
// Ordering and drops
// ============================================================================

/// Predictor that records what the status line said when it was called.
struct StatusRecorder {
    view: Arc<RecordingView>,
    seen: Mutex<Vec<String>>,
}

impl Predictor for StatusRecorder {
    async fn predict(&self, _file: SelectedFile) -> DetectResult<DetectionResult> {
        self.seen.lock().push(self.view.status());
        Ok(serde_json::from_value(common::cat_response())?)
    }
}

#[tokio::test]
async fn test_status_reads_uploading_before_request() {
    let view = Arc::new(RecordingView::default());
    let recorder = StatusRecorder {
        view: view.clone(),
        seen: Mutex::new(Vec::new()),
    };
    let widget = UploadWidget::new(recorder, OverlapPolicy::default());

    widget.upload(view.as_ref(), file("a.png")).await;

    assert_eq!(
        *widget.predictor().seen.lock(),
        vec![UPLOADING_STATUS.to_string()]
    );
    assert_eq!(view.statuses.lock()[0], UPLOADING_STATUS);
}

#[tokio::test]
async fn test_drop_uploads_first_file_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_string_contains("filename=\"first.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::cat_response()))
        .expect(1)
        .mount(&server)
        .await;
    let widget = widget_for(&server);
    let view = RecordingView::default();

    let dropped = vec![file("first.png"), file("second.png"), file("third.png")];
    let outcome = widget.select_file(&view, first_dropped(dropped)).await;

    assert!(outcome.is_rendered());
    assert_eq!(widget.latest_generation(), 1);
}

// ============================================================================
// Overlapping uploads
// ============================================================================

/// Predictor whose responses are released by the test.
struct GatedPredictor {
    gates: Mutex<VecDeque<oneshot::Receiver<DetectionResult>>>,
}

impl Predictor for GatedPredictor {
    async fn predict(&self, _file: SelectedFile) -> DetectResult<DetectionResult> {
        let gate = self.gates.lock().pop_front().expect("one gate per upload");
        Ok(gate.await.expect("gate sender kept alive"))
    }
}

#[tokio::test]
async fn test_error_after_upload_start_keeps_display() {
    let (tx, rx) = oneshot::channel();
    let widget = UploadWidget::new(
        GatedPredictor {
            gates: Mutex::new(VecDeque::from([rx])),
        },
        OverlapPolicy::LatestRequest,
    );
    let view = RecordingView::default();

    let unreadable_drop = async {
        widget.report_error(&view, DetectError::UnreadableFile("new.png".to_string()));
        tx.send(result_from("old")).unwrap();
    };

    let (outcome, ()) = futures::join!(widget.upload(&view, file("old.png")), unreadable_drop);

    assert!(matches!(outcome, UploadOutcome::Superseded { generation: 1 }));
    assert_eq!(view.status(), "Error: Could not read file: new.png");
    assert!(view.image().is_none());
    assert!(view.metadata().is_none());
}

fn result_from(device: &str) -> DetectionResult {
    DetectionResult {
        device: device.to_string(),
        detections: Vec::new(),
        result_url: format!("/out/{}.png", device),
    }
}

/// Start two uploads, let the second finish, then the first.
async fn race(policy: OverlapPolicy) -> (RecordingView, UploadOutcome, UploadOutcome) {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    let widget = UploadWidget::new(
        GatedPredictor {
            gates: Mutex::new(VecDeque::from([rx1, rx2])),
        },
        policy,
    );
    let view = RecordingView::default();

    let driver = async {
        tx2.send(result_from("second")).unwrap();
        tokio::task::yield_now().await;
        tx1.send(result_from("first")).unwrap();
    };

    let (first, second, ()) = futures::join!(
        widget.upload(&view, file("1.png")),
        widget.upload(&view, file("2.png")),
        driver
    );
    (view, first, second)
}

#[tokio::test]
async fn test_latest_request_discards_stale_response() {
    let (view, first, second) = race(OverlapPolicy::LatestRequest).await;

    assert!(matches!(first, UploadOutcome::Superseded { generation: 1 }));
    assert!(second.is_rendered());
    assert_eq!(view.status(), "Done. Device: second. 0 detections.");
    assert!(view.image().unwrap().starts_with("/out/second.png?t="));
}

#[tokio::test]
async fn test_last_response_wins_when_configured() {
    let (view, first, second) = race(OverlapPolicy::LastResponse).await;

    assert!(first.is_rendered());
    assert!(second.is_rendered());
    assert_eq!(view.status(), "Done. Device: first. 0 detections.");
}
