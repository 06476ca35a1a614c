//! Upload status line.

use detectview_core::UPLOADING_STATUS;
use dioxus::prelude::*;

use crate::view::use_signal_view;

/// CSS class for a status text.
fn status_class(text: &str) -> &'static str {
    if text.starts_with("Error:") {
        "status status--error"
    } else if text == UPLOADING_STATUS {
        "status status--busy"
    } else {
        "status"
    }
}

/// Shows whatever the widget last wrote to the status region.
#[component]
pub fn StatusLine() -> Element {
    let view = use_signal_view();
    let text = (view.status)();
    let class = status_class(&text);

    rsx! {
        div {
            class: "{class}",
            "aria-live": "polite",
            if text.is_empty() {
                "Waiting for an image"
            } else {
                "{text}"
            }
        }
    }
}
