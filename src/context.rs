//! Application context for detectview.
//!
//! Built once in `main` and handed to the Dioxus root, it lives for the whole
//! application.
//!
//! ## Usage
//!
//! ```ignore
//! let ctx = use_app_context();
//! let widget = ctx.widget.clone();
//! spawn(async move {
//!     widget.select_file(&view, file).await;
//! });
//! ```

use std::sync::Arc;

use detectview_core::{PredictClient, UploadWidget};
use dioxus::prelude::*;

/// Shared widget type for context.
pub type SharedWidget = Arc<UploadWidget<PredictClient>>;

/// Process-wide state provided at launch.
#[derive(Clone)]
pub struct AppContext {
    /// The upload controller every gesture feeds into
    pub widget: SharedWidget,
    /// Server base URL, shown in the header
    pub server: String,
}

/// Hook to access the application context.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
