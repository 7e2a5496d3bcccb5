//! Window operations
//!
//! UI events can race with closes, so operations on a missing window are
//! no-ops here instead of errors.

use crate::error::WindowError;
use crate::math::{Size, Vec2};
use crate::window::{WindowConfig, WindowId, WindowPatch};
use super::{tolerate_missing, DesktopShell};

impl DesktopShell {
    /// Open a window at the position in its config
    pub fn open_window(&mut self, config: WindowConfig) -> Result<WindowId, WindowError> {
        let window = self.registry.add_window(config)?;
        Ok(window.id.clone())
    }

    /// Open a window at the next cascade slot, ignoring its configured position
    pub fn open_window_cascaded(&mut self, mut config: WindowConfig) -> Result<WindowId, WindowError> {
        config.position = self.registry.cascade_position(config.size);
        self.open_window(config)
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> Result<(), WindowError> {
        self.input.cancel_for(id);
        tolerate_missing("close", self.registry.remove_window(id).map(|_| ()))
    }

    /// Raise and focus a window
    pub fn focus_window(&mut self, id: &str) -> Result<(), WindowError> {
        tolerate_missing("focus", self.registry.bring_to_front(id).map(|_| ()))
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) -> Result<(), WindowError> {
        self.input.cancel_for(id);
        tolerate_missing("minimize", self.registry.minimize_window(id))
    }

    /// Maximize a window into the work area
    pub fn maximize_window(&mut self, id: &str) -> Result<(), WindowError> {
        tolerate_missing("maximize", self.registry.maximize_window(id))
    }

    /// Restore a window from minimized or maximized
    pub fn restore_window(&mut self, id: &str) -> Result<(), WindowError> {
        tolerate_missing("restore", self.registry.restore_window(id))
    }

    /// Title bar double-click
    pub fn toggle_maximize(&mut self, id: &str) -> Result<(), WindowError> {
        tolerate_missing("toggle_maximize", self.registry.toggle_maximize(id))
    }

    /// Merge a partial update
    pub fn update_window(&mut self, id: &str, patch: WindowPatch) -> Result<(), WindowError> {
        tolerate_missing("update", self.registry.update_window(id, patch))
    }

    /// Move a window, keeping it reachable when bounds are enabled
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> Result<(), WindowError> {
        let result = self
            .registry
            .update_window_position(id, Vec2::new(x, y), None)
            .and_then(|_| self.constrain(id));
        tolerate_missing("move", result)
    }

    /// Resize a window
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) -> Result<(), WindowError> {
        tolerate_missing("resize", self.registry.update_window_size(id, Size::new(width, height)))
    }

    /// Advance every thrown window by one physics tick.
    /// Returns true while any window is still moving.
    pub fn tick(&mut self) -> bool {
        let moving: Vec<WindowId> = self
            .registry
            .windows()
            .iter()
            .filter(|w| w.velocity.is_some() && !w.is_dragging)
            .map(|w| w.id.clone())
            .collect();

        let mut any = false;
        for id in moving {
            match self.registry.apply_physics(id.as_str()) {
                Ok(still_moving) => any |= still_moving,
                Err(err) => tracing::debug!(window_id = %id, %err, "physics tick skipped"),
            }
        }
        any
    }

    pub(super) fn constrain(&mut self, id: &str) -> Result<(), WindowError> {
        if self.registry.config().is_bounds_enabled {
            self.registry.constrain_to_bounds(id)?;
        }
        Ok(())
    }
}
