//! Signal-backed display surface.
//!
//! The widget writes status, image source and metadata through
//! [`WidgetView`]; components read the same signals and re-render.

use detectview_core::{Metadata, WidgetView};
use dioxus::prelude::*;

/// The three display regions, as signals.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalView {
    pub status: Signal<String>,
    pub image_src: Signal<Option<String>>,
    pub metadata: Signal<Option<Metadata>>,
}

impl WidgetView for SignalView {
    fn set_status(&self, text: &str) {
        let mut status = self.status;
        status.set(text.to_string());
    }

    fn set_image_src(&self, src: &str) {
        let mut image_src = self.image_src;
        image_src.set(Some(src.to_string()));
    }

    fn set_metadata(&self, metadata: Metadata) {
        let mut region = self.metadata;
        region.set(Some(metadata));
    }
}

/// Create the display signals and provide them to child components.
pub fn use_signal_view_provider() -> SignalView {
    let status = use_signal(String::new);
    let image_src = use_signal(|| Option::<String>::None);
    let metadata = use_signal(|| Option::<Metadata>::None);
    use_context_provider(|| SignalView {
        status,
        image_src,
        metadata,
    })
}

/// Hook to access the display signals.
pub fn use_signal_view() -> SignalView {
    use_context::<SignalView>()
}
