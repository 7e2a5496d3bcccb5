//! Input routing module
//!
//! Pointer drag state machine for moving and resizing windows.

mod drag;
mod handle;
mod router;

pub use drag::DragState;
pub use handle::ResizeHandle;
pub use router::InputRouter;

use crate::math::{Size, Vec2};

/// Smallest size a resize drag can produce
pub const MIN_WINDOW_SIZE: Size = Size::new(200.0, 120.0);

/// Calculate new position and size after a resize drag.
///
/// West and north handles move the leading edge while the opposite edge
/// stays fixed. The result never extends past the origin.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min: Size,
) -> (Vec2, Size) {
    let mut pos = start_pos;
    let dx = if handle.east() {
        delta.x
    } else if handle.west() {
        -delta.x
    } else {
        0.0
    };
    let dy = if handle.south() {
        delta.y
    } else if handle.north() {
        -delta.y
    } else {
        0.0
    };
    let mut size = Size::new(start_size.width + dx, start_size.height + dy).at_least(min);

    if handle.west() {
        let right = start_pos.x + start_size.width;
        size.width = size.width.min(right);
        pos.x = right - size.width;
    }
    if handle.north() {
        let bottom = start_pos.y + start_size.height;
        size.height = size.height.min(bottom);
        pos.y = bottom - size.height;
    }

    (pos, size)
}
