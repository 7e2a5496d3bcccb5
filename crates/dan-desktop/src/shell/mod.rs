//! Desktop shell coordinating registry, viewport and input
//!
//! This module is split into focused submodules:
//! - `windows`: window operations with not-found tolerance
//! - `input`: pointer events and drag operations
//! - `rendering`: panel dispatch and render views

mod input;
mod rendering;
mod windows;

use crate::error::{PersistenceError, WindowError};
use crate::input::InputRouter;
use crate::layout::{PhysicsPatch, ShellConfig, SnapPatch};
use crate::persistence::{Snapshot, SnapshotStore, STORAGE_KEY};
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

pub use rendering::WindowView;

/// Owned shell state, passed by reference to whoever drives the UI.
///
/// All mutation happens through `&mut self`, one event at a time.
#[derive(Debug)]
pub struct DesktopShell {
    /// Screen and taskbar geometry
    pub viewport: Viewport,
    /// Drag/resize state machine
    pub input: InputRouter,
    registry: WindowRegistry,
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopShell {
    /// Create a shell with default configuration
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Create a shell with the given configuration
    pub fn with_config(config: ShellConfig) -> Self {
        let viewport = Viewport {
            taskbar_height: config.taskbar_height,
            ..Viewport::default()
        };
        let mut registry = WindowRegistry::with_config(config);
        registry.set_work_area(viewport.work_area());
        Self {
            viewport,
            input: InputRouter::new(),
            registry,
        }
    }

    /// Initialize with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    /// Resize the viewport. Maximized windows follow the new work area and,
    /// with bounds enabled, the others are pulled back inside it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height, self.registry.config().taskbar_height);
        self.registry.set_work_area(self.viewport.work_area());

        if self.registry.config().is_bounds_enabled {
            let ids: Vec<_> = self
                .registry
                .windows()
                .iter()
                .filter(|w| !w.is_maximized)
                .map(|w| w.id.clone())
                .collect();
            for id in ids {
                let result = self.registry.constrain_to_bounds(id.as_str()).map(|_| ());
                if let Err(err) = tolerate_missing("resize", result) {
                    tracing::warn!(window_id = %id, %err, "could not constrain window");
                }
            }
        }
        tracing::debug!(width, height, "viewport resized");
    }

    /// Read access to the window registry
    #[inline]
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Current layout configuration
    pub fn config(&self) -> &ShellConfig {
        self.registry.config()
    }

    /// Merge physics settings
    pub fn set_physics_config(&mut self, patch: PhysicsPatch) {
        self.registry.set_physics_config(patch);
    }

    /// Merge snap/grid settings
    pub fn set_snap_config(&mut self, patch: SnapPatch) {
        self.registry.set_snap_config(patch);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Serialize the registry
    pub fn export_snapshot(&self) -> Result<String, PersistenceError> {
        Snapshot::capture(&self.registry).to_json()
    }

    /// Replace the registry with a serialized one. On error nothing changes.
    pub fn import_snapshot(&mut self, json: &str) -> Result<(), PersistenceError> {
        let mut registry = Snapshot::from_json(json)?.restore()?;
        self.viewport.taskbar_height = registry.config().taskbar_height;
        registry.set_work_area(self.viewport.work_area());

        self.input.end_drag();
        self.registry = registry;
        tracing::info!(windows = self.registry.len(), "window state restored");
        Ok(())
    }

    /// Write the registry to `store`
    pub fn save(&self, store: &mut impl SnapshotStore) -> Result<(), PersistenceError> {
        let blob = self.export_snapshot()?;
        store.save(STORAGE_KEY, &blob)?;
        tracing::info!(windows = self.registry.len(), bytes = blob.len(), "window state saved");
        Ok(())
    }

    /// Load the registry from `store`. Returns false if nothing was saved.
    pub fn load(&mut self, store: &impl SnapshotStore) -> Result<bool, PersistenceError> {
        match store.load(STORAGE_KEY)? {
            Some(blob) => {
                self.import_snapshot(&blob)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Turn `NotFound` into a logged no-op; everything else passes through
pub(crate) fn tolerate_missing(op: &'static str, result: Result<(), WindowError>) -> Result<(), WindowError> {
    match result {
        Err(WindowError::NotFound(id)) => {
            tracing::debug!(window_id = %id, op, "ignored operation on missing window");
            Ok(())
        }
        other => other,
    }
}
