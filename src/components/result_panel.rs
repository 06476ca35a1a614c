//! Result display: annotated image and detection list.

use detectview_core::{Metadata, NO_DETECTIONS};
use dioxus::prelude::*;

use crate::view::use_signal_view;

/// Annotated image returned by the backend.
///
/// The source already carries a cache-busting parameter, so reusing a
/// result URL still reloads the image.
#[component]
pub fn ResultImage() -> Element {
    let view = use_signal_view();

    rsx! {
        if let Some(src) = (view.image_src)() {
            img {
                class: "result-image",
                src: "{src}",
                alt: "Annotated detection result",
            }
        }
    }
}

/// One line per detection, or a placeholder when there were none.
#[component]
pub fn DetectionList() -> Element {
    let view = use_signal_view();

    rsx! {
        div { class: "meta",
            {match (view.metadata)() {
                Some(Metadata::List(items)) => rsx! {
                    ul { class: "meta__list",
                        for (i, item) in items.into_iter().enumerate() {
                            li { key: "{i}", class: "meta__item", "{item}" }
                        }
                    }
                },
                Some(Metadata::Empty) => rsx! {
                    p { class: "meta__empty", "{NO_DETECTIONS}" }
                },
                None => rsx! {},
            }}
        }
    }
}
