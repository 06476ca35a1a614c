//! Drop Zone Component
//!
//! Accepts an image by drag-and-drop or through a native file dialog and
//! hands it to the upload widget.

use std::path::Path;

use detectview_core::{first_dropped, DetectError, DragGesture, SelectedFile, ACCEPTED_EXTENSIONS};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_app_context;
use crate::view::use_signal_view;

/// Drop target with a browse button.
///
/// Every gesture may start an upload, including while one is in flight.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     DropZone {}
/// }
/// ```
#[component]
pub fn DropZone() -> Element {
    let ctx = use_app_context();
    let view = use_signal_view();
    let mut gesture = use_signal(|| DragGesture::Leave);

    let mut track = move |evt: &DragEvent, next: DragGesture| {
        evt.prevent_default();
        evt.stop_propagation();
        gesture.set(next);
    };

    let drop_widget = ctx.widget.clone();
    let handle_drop = move |evt: DragEvent| {
        track(&evt, DragGesture::Drop);

        let Some(engine) = evt.files() else {
            return;
        };
        let widget = drop_widget.clone();
        spawn(async move {
            let Some(path) = first_dropped(engine.files()) else {
                return;
            };
            match engine.read_file(&path).await {
                Some(bytes) => {
                    widget
                        .select_file(&view, Some(SelectedFile::new(file_label(&path), bytes)))
                        .await;
                }
                None => {
                    widget.report_error(&view, DetectError::UnreadableFile(path));
                }
            }
        });
    };

    let browse_widget = ctx.widget.clone();
    let handle_browse = move |_| {
        let widget = browse_widget.clone();
        spawn(async move {
            // Native dialog blocks; keep it off the UI task
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", ACCEPTED_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match SelectedFile::from_path(&path).await {
                    Ok(file) => {
                        widget.select_file(&view, Some(file)).await;
                    }
                    Err(e) => {
                        widget.report_error(&view, e);
                    }
                },
                Ok(None) => {
                    widget.select_file(&view, None).await;
                }
                Err(e) => {
                    widget.report_error(&view, DetectError::FilePicker(format!("{:?}", e)));
                }
            }
        });
    };

    let zone_class = gesture().zone_class();
    let accepted = ACCEPTED_EXTENSIONS.join(" · ");

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| track(&evt, DragGesture::Enter),
            ondragover: move |evt| track(&evt, DragGesture::Over),
            ondragleave: move |evt| track(&evt, DragGesture::Leave),
            ondrop: handle_drop,

            p { class: "dropzone__hint", "Drop an image here" }
            p { class: "dropzone__or", "or" }
            button {
                class: "btn-primary",
                r#type: "button",
                onclick: handle_browse,
                "Browse…"
            }
            p { class: "dropzone__types", "{accepted}" }
        }
    }
}

/// File name for a dropped path; desktop drops carry full paths.
fn file_label(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
