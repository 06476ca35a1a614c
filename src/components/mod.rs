//! UI Components for detectview.

mod drop_zone;
mod result_panel;
mod status_line;

pub use drop_zone::DropZone;
pub use result_panel::{DetectionList, ResultImage};
pub use status_line::StatusLine;
