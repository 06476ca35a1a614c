use dioxus::prelude::*;

use crate::pages::Detect;
use crate::theme::GLOBAL_STYLES;
use crate::view::use_signal_view_provider;

/// Root application component.
///
/// Provides global styles and the display signals, then renders the single
/// detection page.
#[component]
pub fn App() -> Element {
    use_signal_view_provider();

    rsx! {
        style { {GLOBAL_STYLES} }
        Detect {}
    }
}
