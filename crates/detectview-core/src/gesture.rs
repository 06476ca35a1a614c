//! Drag-and-drop gestures on the drop zone.

/// Drag event kinds the drop zone listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGesture {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragGesture {
    /// Whether the drop zone shows its hover state after this gesture.
    pub fn hover_after(&self) -> bool {
        matches!(self, DragGesture::Enter | DragGesture::Over)
    }

    /// Whether this gesture carries files to upload.
    pub fn delivers_files(&self) -> bool {
        matches!(self, DragGesture::Drop)
    }

    /// CSS class for the drop zone after this gesture.
    pub fn zone_class(&self) -> &'static str {
        if self.hover_after() {
            "dropzone hover"
        } else {
            "dropzone"
        }
    }
}

/// Pick the file to upload from a drop payload. Everything past the first
/// file is ignored.
pub fn first_dropped<T, I>(files: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    files.into_iter().next()
}
