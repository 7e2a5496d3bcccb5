//! Input router state machine

use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::{DragState, ResizeHandle};

/// Tracks the single pointer drag in progress, if any
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Start window resize operation
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: ResizeHandle,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    /// End the current drag and hand back what it was
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the drag if it targets `id` (window closed mid-drag)
    pub fn cancel_for(&mut self, id: &str) {
        if self.drag.as_ref().map(|d| d.window_id() == id).unwrap_or(false) {
            self.drag = None;
        }
    }
}
