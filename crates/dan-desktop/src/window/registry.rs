//! Window registry for lifecycle, z-order, focus and geometry

use crate::error::WindowError;
use crate::layout::{self, PhysicsPatch, ShellConfig, SnapPatch, SnapResult, REST_SPEED};
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;
use super::config::{validate_position, validate_size};
use super::{Window, WindowConfig, WindowId, WindowPatch, ZOrder};

/// Ordered collection of windows plus the state that decides stacking.
///
/// Focus is a function of stacking: the active window is always the one
/// holding the highest `z_index`. Every mutation goes through a method here.
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    /// Windows in creation order
    windows: Vec<Window>,
    /// Window holding the highest stacking value
    active: Option<WindowId>,
    /// Stacking counter
    z_order: ZOrder,
    /// Snap/grid/physics settings
    config: ShellConfig,
    /// Area maximized windows fill and dragged windows stay inside
    work_area: Rect,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: ShellConfig) -> Self {
        let viewport = Viewport {
            taskbar_height: config.taskbar_height,
            ..Viewport::default()
        };
        Self {
            windows: Vec::new(),
            active: None,
            z_order: ZOrder::new(),
            config,
            work_area: viewport.work_area(),
        }
    }

    /// Rebuild from persisted parts. Caller guarantees ids and stacking
    /// values are unique.
    pub(crate) fn from_parts(windows: Vec<Window>, z_order: ZOrder, config: ShellConfig) -> Self {
        let mut registry = Self::with_config(config);
        registry.z_order = z_order;
        for window in &windows {
            registry.z_order.observe(window.z_index);
        }
        registry.windows = windows;
        registry.refresh_active();
        registry
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check whether a window is registered
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no window is registered
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows in creation order
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Open, non-minimized windows, back to front
    pub fn visible_windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Id of the focused window
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// The focused window
    pub fn active_window(&self) -> Option<&Window> {
        self.active.as_ref().and_then(|id| self.get(id.as_str()))
    }

    /// Highest stacking value handed out so far
    pub fn max_z_index(&self) -> u32 {
        self.z_order.max()
    }

    /// Current layout configuration
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Area used for maximize, snapping and bounds
    pub fn work_area(&self) -> Rect {
        self.work_area
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Insert a new window on top of the stack and focus it
    pub fn add_window(&mut self, config: WindowConfig) -> Result<&Window, WindowError> {
        config.validate()?;
        if self.contains(config.id.as_str()) {
            tracing::warn!(window_id = %config.id, "rejected duplicate window id");
            return Err(WindowError::DuplicateId(config.id));
        }

        let z_index = self.z_order.next();
        let mut window = config.into_window(z_index);

        if window.is_maximized {
            window.is_minimized = false;
            window.restore_rect = Some(window.rect());
            window.position = self.work_area.position();
            window.size = self.work_area.size();
        }

        tracing::debug!(window_id = %window.id, z_index, kind = window.content.kind(), "opened window");
        self.active = Some(window.id.clone());
        self.windows.push(window);

        Ok(&self.windows[self.windows.len() - 1])
    }

    /// Close a window and hand back its record
    pub fn remove_window(&mut self, id: &str) -> Result<Window, WindowError> {
        let index = self.index_of(id)?;
        let window = self.windows.remove(index);
        tracing::debug!(window_id = %window.id, "closed window");

        if self.active.as_ref() == Some(&window.id) {
            self.refresh_active();
        }
        Ok(window)
    }

    /// Merge a partial update into an existing window
    pub fn update_window(&mut self, id: &str, patch: WindowPatch) -> Result<(), WindowError> {
        let window = self.window_mut(id)?;
        patch.validate()?;
        patch.apply_to(window);
        Ok(())
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    /// Hide a window without touching focus or its maximized state
    pub fn minimize_window(&mut self, id: &str) -> Result<(), WindowError> {
        let window = self.window_mut(id)?;
        window.is_minimized = true;
        window.is_dragging = false;
        window.snap_guides.clear();
        Ok(())
    }

    /// Fill the work area, remembering the current geometry for restore
    pub fn maximize_window(&mut self, id: &str) -> Result<(), WindowError> {
        let area = self.work_area;
        let window = self.window_mut(id)?;

        if !window.is_maximized {
            window.restore_rect = Some(window.rect());
        }
        window.is_maximized = true;
        window.is_minimized = false;
        window.position = area.position();
        window.size = area.size();
        Ok(())
    }

    /// Clear both flags; a maximized window gets its old geometry back
    pub fn restore_window(&mut self, id: &str) -> Result<(), WindowError> {
        let window = self.window_mut(id)?;
        let was_maximized = window.is_maximized;

        window.is_minimized = false;
        window.is_maximized = false;

        if was_maximized {
            if let Some(rect) = window.restore_rect.take() {
                window.position = rect.position();
                window.size = rect.size();
            }
        }
        Ok(())
    }

    /// Maximize, or restore if already maximized (title bar double-click)
    pub fn toggle_maximize(&mut self, id: &str) -> Result<(), WindowError> {
        let maximized = self.get(id).map(|w| w.is_maximized);
        match maximized {
            Some(true) => self.restore_window(id),
            Some(false) => self.maximize_window(id),
            None => Err(WindowError::NotFound(WindowId::from(id))),
        }
    }

    /// Raise a window above every other one and focus it
    pub fn bring_to_front(&mut self, id: &str) -> Result<u32, WindowError> {
        let index = self.index_of(id)?;
        let z_index = self.z_order.next();
        let window = &mut self.windows[index];
        window.z_index = z_index;
        self.active = Some(window.id.clone());
        Ok(z_index)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move a window; while dragging, refresh the snap preview
    pub fn update_window_position(
        &mut self,
        id: &str,
        position: Vec2,
        velocity: Option<Vec2>,
    ) -> Result<(), WindowError> {
        let index = self.index_of(id)?;
        validate_position(position)?;

        let window = &mut self.windows[index];
        window.position = position;
        window.velocity = velocity.filter(|v| v.is_finite());
        self.refresh_guides(index);
        Ok(())
    }

    /// Resize a window
    pub fn update_window_size(&mut self, id: &str, size: Size) -> Result<(), WindowError> {
        let window = self.window_mut(id)?;
        validate_size(size)?;
        window.size = size;
        Ok(())
    }

    /// Pull a window back so part of it stays inside the work area
    pub fn constrain_to_bounds(&mut self, id: &str) -> Result<Vec2, WindowError> {
        let index = self.index_of(id)?;
        let window = &mut self.windows[index];
        let position = layout::constrain_position(
            window.position,
            window.size,
            self.work_area,
            self.config.min_visible_margin,
        );

        if position != window.position {
            window.position = position;
            self.refresh_guides(index);
        }
        Ok(position)
    }

    /// Mark a window as being dragged
    pub fn start_dragging(&mut self, id: &str) -> Result<(), WindowError> {
        let window = self.window_mut(id)?;
        window.is_dragging = true;
        Ok(())
    }

    /// End a drag. Snaps immediately unless the window was thrown and
    /// physics will carry it.
    pub fn stop_dragging(&mut self, id: &str) -> Result<(), WindowError> {
        let physics = self.config.physics;
        let snap_enabled = self.config.is_snap_enabled;
        let window = self.window_mut(id)?;

        window.is_dragging = false;
        window.snap_guides.clear();

        let thrown = physics.enabled
            && window.velocity.map(|v| v.length() >= REST_SPEED).unwrap_or(false);
        if thrown {
            return Ok(());
        }

        window.velocity = None;
        if snap_enabled {
            self.snap_window(id)?;
        }
        Ok(())
    }

    /// Move a window onto its nearest snap targets, if any are in range
    pub fn snap_window(&mut self, id: &str) -> Result<SnapResult, WindowError> {
        let index = self.index_of(id)?;
        let result = self.snap_query(index);

        if result.snapped() {
            tracing::debug!(window_id = id, x = result.position.x, y = result.position.y, "snapped window");
            self.windows[index].position = result.position;
            if self.config.is_bounds_enabled {
                self.constrain_to_bounds(id)?;
            }
        }
        Ok(result)
    }

    /// Advance a thrown window by one tick. Returns true while it is moving.
    pub fn apply_physics(&mut self, id: &str) -> Result<bool, WindowError> {
        let index = self.index_of(id)?;
        let physics = self.config.physics;

        let window = &self.windows[index];
        let velocity = match window.velocity {
            Some(v) if physics.enabled && !window.is_dragging => v,
            _ => return Ok(false),
        };

        let target = if self.config.is_snap_enabled {
            let result = self.snap_query(index);
            result.snapped().then_some(result.position)
        } else {
            None
        };

        let window = &self.windows[index];
        let step = layout::step(window.position, window.size, velocity, target, self.work_area, &physics);

        let window = &mut self.windows[index];
        window.position = Vec2::new(step.position.x.max(0.0), step.position.y.max(0.0));

        if step.settled {
            window.velocity = None;
            if self.config.is_snap_enabled {
                self.snap_window(id)?;
            }
            Ok(false)
        } else {
            window.velocity = Some(step.velocity);
            Ok(true)
        }
    }

    /// Where the next cascaded window should open
    pub fn cascade_position(&self, size: Size) -> Vec2 {
        let area = self.work_area;
        let spacing = self.config.window_spacing;
        let origin = Vec2::new(area.x + spacing, area.y + spacing);

        let Some(last) = self.windows.iter().rev().find(|w| w.is_visible()) else {
            return origin;
        };

        let next = last.position + Vec2::new(self.config.cascade_offset, self.config.cascade_offset);
        let fits = next.x + size.width <= area.right() - spacing
            && next.y + size.height <= area.bottom() - spacing;

        if fits {
            next
        } else {
            origin
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Merge physics settings
    pub fn set_physics_config(&mut self, patch: PhysicsPatch) {
        self.config.physics.apply(patch);
        if !self.config.physics.enabled {
            for window in &mut self.windows {
                window.velocity = None;
            }
        }
    }

    /// Merge snap/grid settings
    pub fn set_snap_config(&mut self, patch: SnapPatch) {
        self.config.apply_snap(patch);
    }

    /// Set the area windows live in; maximized windows are refitted
    pub fn set_work_area(&mut self, area: Rect) {
        self.work_area = area;
        for window in self.windows.iter_mut().filter(|w| w.is_maximized) {
            window.position = area.position();
            window.size = area.size();
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, id: &str) -> Result<usize, WindowError> {
        self.windows
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| WindowError::NotFound(WindowId::from(id)))
    }

    fn window_mut(&mut self, id: &str) -> Result<&mut Window, WindowError> {
        let index = self.index_of(id)?;
        Ok(&mut self.windows[index])
    }

    /// Snap candidates for the window at `index` against other visible windows
    fn snap_query(&self, index: usize) -> SnapResult {
        let window = &self.windows[index];
        let others: Vec<Rect> = self
            .windows
            .iter()
            .enumerate()
            .filter(|(i, w)| *i != index && w.is_visible())
            .map(|(_, w)| w.rect())
            .collect();
        layout::find_snap(window.rect(), &others, Some(self.work_area), &self.config)
    }

    /// Recompute drag feedback for the window's current position
    fn refresh_guides(&mut self, index: usize) {
        if self.windows[index].is_dragging && self.config.is_snap_enabled {
            let guides = self.snap_query(index).guides;
            self.windows[index].snap_guides = guides;
        }
    }

    fn refresh_active(&mut self) {
        self.active = self
            .windows
            .iter()
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());
    }
}
