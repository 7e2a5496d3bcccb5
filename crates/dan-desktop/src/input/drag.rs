//! Drag state for pointer operations

use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::ResizeHandle;

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to pointer
        offset: Vec2,
    },
    /// Resizing a window
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: ResizeHandle,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl DragState {
    /// Window the drag acts on
    pub fn window_id(&self) -> &WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } => window_id,
            DragState::ResizeWindow { window_id, .. } => window_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_window_state() {
        let state = DragState::MoveWindow {
            window_id: WindowId::from("copilot-1"),
            offset: Vec2::new(10.0, 20.0),
        };

        assert!(matches!(state, DragState::MoveWindow { offset, .. } if offset == Vec2::new(10.0, 20.0)));
        assert_eq!(state.window_id(), "copilot-1");
    }

    #[test]
    fn test_resize_window_preserves_all_fields() {
        let state = DragState::ResizeWindow {
            window_id: WindowId::from("adapters"),
            handle: ResizeHandle::NW,
            start_pos: Vec2::new(50.0, 75.0),
            start_size: Size::new(400.0, 300.0),
            start_pointer: Vec2::new(60.0, 85.0),
        };

        if let DragState::ResizeWindow { handle, start_pos, start_size, start_pointer, .. } = state {
            assert_eq!(handle, ResizeHandle::NW);
            assert!((start_pos.x - 50.0).abs() < 0.001);
            assert!((start_size.height - 300.0).abs() < 0.001);
            assert!((start_pointer.y - 85.0).abs() < 0.001);
        } else {
            panic!("Expected ResizeWindow state");
        }
    }
}
