//! Snapshot serialization for registry state

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::PersistenceError;
use crate::layout::ShellConfig;
use crate::window::{Window, WindowId, WindowRegistry, ZOrder, INITIAL_Z_INDEX};

/// Key the snapshot is stored under
pub const STORAGE_KEY: &str = "window-storage";

/// Snapshot of registry state for persistence
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Version for migration support; absent in the oldest blobs
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub windows: Vec<Window>,
    /// Informational; recomputed from z-order on restore
    #[serde(default)]
    pub active_window_id: Option<WindowId>,
    #[serde(default = "initial_z")]
    pub max_z_index: u32,
    #[serde(default)]
    pub config: ShellConfig,
}

fn initial_z() -> u32 {
    INITIAL_Z_INDEX
}

/// Settings older builds stored beside `windows` instead of under `config`
const LEGACY_CONFIG_KEYS: [&str; 7] = [
    "gridSize",
    "snapThreshold",
    "isGridEnabled",
    "isSnapEnabled",
    "windowSpacing",
    "cascadeOffset",
    "physics",
];

fn hoist_legacy_config(state: &mut Map<String, Value>) {
    if state.contains_key("config") {
        return;
    }
    let config: Map<String, Value> = LEGACY_CONFIG_KEYS
        .iter()
        .filter_map(|key| state.remove(*key).map(|value| (key.to_string(), value)))
        .collect();
    if !config.is_empty() {
        state.insert("config".into(), Value::Object(config));
    }
}

/// Give tied windows distinct stacking values, keeping their relative order.
/// Ties resolve in list order.
fn restack_ties(windows: &mut [Window], z_order: &mut ZOrder) {
    let mut seen = HashSet::new();
    if windows.iter().all(|w| seen.insert(w.z_index)) {
        return;
    }

    let mut order: Vec<usize> = (0..windows.len()).collect();
    order.sort_by_key(|&i| windows[i].z_index);
    for i in order {
        windows[i].z_index = z_order.next();
    }
    tracing::info!(max_z = z_order.max(), "restacked windows with tied z-index");
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the persistent part of a registry
    pub fn capture(registry: &WindowRegistry) -> Self {
        let mut windows = registry.windows().to_vec();
        for window in &mut windows {
            window.clear_transient();
        }
        Self {
            version: Self::CURRENT_VERSION,
            windows,
            active_window_id: registry.active_window_id().cloned(),
            max_z_index: registry.max_z_index(),
            config: *registry.config(),
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        if self.version == 0 {
            // Version 0 windows could lack a stacking value. Stack them in
            // list order above everything else.
            let mut z = ZOrder::resume(self.max_z_index);
            for window in &self.windows {
                z.observe(window.z_index);
            }
            for window in self.windows.iter_mut().filter(|w| w.z_index == 0) {
                window.z_index = z.next();
            }
            self.max_z_index = z.max();
        }
        self.version = Self::CURRENT_VERSION;
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored blob, migrating older versions.
    ///
    /// Also accepts the `{ "state": {...}, "version": n }` envelope older
    /// builds wrote.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let mut value: Value = serde_json::from_str(json)?;

        if let Some(state) = value.get_mut("state").filter(|s| s.is_object()).map(Value::take) {
            let version = value.get("version").cloned();
            value = state;
            if let (Some(version), Some(obj)) = (version, value.as_object_mut()) {
                obj.entry("version").or_insert(version);
            }
        }
        if let Some(obj) = value.as_object_mut() {
            hoist_legacy_config(obj);
        }

        let mut snapshot: Snapshot = serde_json::from_value(value)?;
        if snapshot.version > Self::CURRENT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: snapshot.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        if snapshot.needs_migration() {
            tracing::info!(from = snapshot.version, to = Self::CURRENT_VERSION, "migrating window snapshot");
            snapshot.migrate();
        }
        Ok(snapshot)
    }

    /// Rebuild a registry. Ids must be unique and every record valid; tied
    /// stacking values are spread out above the stored counter.
    pub fn restore(self) -> Result<WindowRegistry, PersistenceError> {
        let mut seen = HashSet::new();
        let mut windows = self.windows;

        for window in &mut windows {
            window.validate()?;
            if !seen.insert(window.id.clone()) {
                return Err(PersistenceError::DuplicateId(window.id.clone()));
            }
            window.clear_transient();
        }

        let mut z_order = ZOrder::resume(self.max_z_index);
        for window in &windows {
            z_order.observe(window.z_index);
        }
        restack_ties(&mut windows, &mut z_order);

        let registry = WindowRegistry::from_parts(windows, z_order, self.config);
        if registry.active_window_id() != self.active_window_id.as_ref() {
            tracing::debug!(
                stored = ?self.active_window_id,
                computed = ?registry.active_window_id(),
                "active window recomputed from z-order"
            );
        }
        Ok(registry)
    }
}
