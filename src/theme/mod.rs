//! Visual theme for detectview.

mod styles;

pub use styles::GLOBAL_STYLES;
