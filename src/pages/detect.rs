//! Detection page - the only view.
//!
//! Drop zone on top, status below it, then the annotated image next to the
//! detection list.

use dioxus::prelude::*;

use crate::components::{DetectionList, DropZone, ResultImage, StatusLine};
use crate::context::use_app_context;

/// Detection page component.
#[component]
pub fn Detect() -> Element {
    let ctx = use_app_context();

    rsx! {
        main { class: "detect",
            header { class: "detect-header",
                h1 { class: "page-title", "detectview" }
                p { class: "tagline", "backend: {ctx.server}" }
            }

            DropZone {}
            StatusLine {}

            section { class: "results",
                div { class: "results__image", ResultImage {} }
                div { class: "results__meta",
                    h2 { class: "section-header", "Detections" }
                    DetectionList {}
                }
            }
        }
    }
}
