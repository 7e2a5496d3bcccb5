//! Pointer handling for drag operations

use crate::error::WindowError;
use crate::input::{calculate_resize, DragState, ResizeHandle, MIN_WINDOW_SIZE};
use crate::math::Vec2;
use super::{tolerate_missing, DesktopShell};

impl DesktopShell {
    /// Pointer down on a title bar: focus the window and start moving it.
    /// Maximized windows only take focus.
    pub fn begin_move(&mut self, id: &str, x: f32, y: f32) -> Result<(), WindowError> {
        let (position, maximized) = match self.registry.get(id) {
            Some(window) => (window.position, window.is_maximized),
            None => return tolerate_missing("begin_move", Err(WindowError::NotFound(id.into()))),
        };

        self.registry.bring_to_front(id)?;
        if maximized {
            return Ok(());
        }

        self.registry.start_dragging(id)?;
        self.input.start_window_move(id.into(), Vec2::new(x, y) - position);
        Ok(())
    }

    /// Pointer down on a resize handle
    pub fn begin_resize(&mut self, id: &str, handle: ResizeHandle, x: f32, y: f32) -> Result<(), WindowError> {
        let (position, size, maximized) = match self.registry.get(id) {
            Some(window) => (window.position, window.size, window.is_maximized),
            None => return tolerate_missing("begin_resize", Err(WindowError::NotFound(id.into()))),
        };

        self.registry.bring_to_front(id)?;
        if maximized {
            return Ok(());
        }

        self.input.start_window_resize(id.into(), handle, position, size, Vec2::new(x, y));
        Ok(())
    }

    /// Pointer moved. Returns true if a drag consumed it.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let drag = match self.input.drag_state() {
            Some(state) => state.clone(),
            None => return false,
        };
        let pointer = Vec2::new(x, y);

        let result = match &drag {
            DragState::MoveWindow { window_id, offset } => self.drag_to(window_id.as_str(), pointer - *offset),
            DragState::ResizeWindow { window_id, handle, start_pos, start_size, start_pointer } => {
                let delta = pointer - *start_pointer;
                let (pos, size) = calculate_resize(*handle, *start_pos, *start_size, delta, MIN_WINDOW_SIZE);
                let id = window_id.as_str();
                self.registry
                    .update_window_position(id, pos, None)
                    .and_then(|_| self.registry.update_window_size(id, size))
            }
        };

        match result {
            Ok(()) => {}
            Err(WindowError::NotFound(id)) => {
                tracing::debug!(window_id = %id, "drag target vanished");
                self.input.end_drag();
            }
            Err(err) => tracing::warn!(window_id = %drag.window_id(), %err, "rejected drag update"),
        }
        true
    }

    /// Pointer released. Ends the drag and lets the window snap or coast.
    pub fn pointer_up(&mut self) -> bool {
        let Some(drag) = self.input.end_drag() else {
            return false;
        };

        let id = drag.window_id().as_str();
        let result = match drag {
            DragState::MoveWindow { .. } => self.registry.stop_dragging(id),
            DragState::ResizeWindow { .. } => self.constrain(id),
        };
        if let Err(err) = tolerate_missing("pointer_up", result) {
            tracing::warn!(window_id = id, %err, "drag release failed");
        }
        true
    }

    fn drag_to(&mut self, id: &str, target: Vec2) -> Result<(), WindowError> {
        let previous = match self.registry.get(id) {
            Some(window) => window.position,
            None => return Err(WindowError::NotFound(id.into())),
        };

        let position = Vec2::new(target.x.max(0.0), target.y.max(0.0));
        self.registry.update_window_position(id, position, Some(position - previous))?;
        self.constrain(id)
    }
}
