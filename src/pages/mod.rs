//! Page components for detectview.

mod detect;

pub use detect::Detect;
