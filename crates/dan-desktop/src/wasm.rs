//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports for the DesktopShell, allowing
//! the React host to drive windows directly. Structured values cross the
//! boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::error::PersistenceError;
use crate::input::ResizeHandle;
use crate::layout::{PhysicsPatch, SnapPatch};
use crate::panel::WindowCommand;
use crate::persistence::SnapshotStore;
use crate::shell::DesktopShell;
use crate::window::{WindowConfig, WindowPatch};

/// Install the panic hook and route logs to the console
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook::set_once();
    crate::logging::init(level);
}

/// `window.localStorage`
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open the page's local storage
    pub fn open() -> Result<Self, PersistenceError> {
        let window = web_sys::window().ok_or_else(|| PersistenceError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(js_storage_error)?
            .ok_or_else(|| PersistenceError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl SnapshotStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage.get_item(key).map_err(js_storage_error)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.storage.set_item(key, blob).map_err(js_storage_error)
    }
}

fn js_storage_error(err: JsValue) -> PersistenceError {
    PersistenceError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Shell controller for WASM - wraps DesktopShell with JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    shell: DesktopShell,
}

impl Default for ShellController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ShellController {
    /// Create a new shell controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            shell: DesktopShell::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.shell.init(width, height);
    }

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.shell.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window from a JSON config; returns its id
    #[wasm_bindgen]
    pub fn open_window(&mut self, config_json: &str) -> Result<String, JsValue> {
        let config: WindowConfig = serde_json::from_str(config_json).map_err(js_error)?;
        let id = self.shell.open_window(config).map_err(js_error)?;
        Ok(id.to_string())
    }

    /// Open a window at the next cascade slot
    #[wasm_bindgen]
    pub fn open_window_cascaded(&mut self, config_json: &str) -> Result<String, JsValue> {
        let config: WindowConfig = serde_json::from_str(config_json).map_err(js_error)?;
        let id = self.shell.open_window_cascaded(config).map_err(js_error)?;
        Ok(id.to_string())
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.close_window(id).map_err(js_error)
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.focus_window(id).map_err(js_error)
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.minimize_window(id).map_err(js_error)
    }

    /// Maximize a window
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.maximize_window(id).map_err(js_error)
    }

    /// Restore a window
    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.restore_window(id).map_err(js_error)
    }

    /// Maximize or restore (title bar double-click)
    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) -> Result<(), JsValue> {
        self.shell.toggle_maximize(id).map_err(js_error)
    }

    /// Merge a JSON patch into a window
    #[wasm_bindgen]
    pub fn update_window(&mut self, id: &str, patch_json: &str) -> Result<(), JsValue> {
        let patch: WindowPatch = serde_json::from_str(patch_json).map_err(js_error)?;
        self.shell.update_window(id, patch).map_err(js_error)
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.shell.move_window(id, x, y).map_err(js_error)
    }

    /// Resize a window
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) -> Result<(), JsValue> {
        self.shell.resize_window(id, width, height).map_err(js_error)
    }

    /// Apply a command such as `{"type":"minimize"}` sent by a panel
    #[wasm_bindgen]
    pub fn apply_command(&mut self, id: &str, command_json: &str) -> Result<(), JsValue> {
        let command: WindowCommand = serde_json::from_str(command_json).map_err(js_error)?;
        self.shell.apply(id, command).map_err(js_error)
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_active_window(&self) -> Option<String> {
        self.shell.registry().active_window_id().map(|id| id.to_string())
    }

    /// Visible windows back to front, as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.shell.window_views()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Every window record (including minimized and closed ones), as JSON
    #[wasm_bindgen]
    pub fn get_all_windows_json(&self) -> String {
        serde_json::to_string(self.shell.registry().windows()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Pointer down on a title bar
    #[wasm_bindgen]
    pub fn begin_move(&mut self, id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.shell.begin_move(id, x, y).map_err(js_error)
    }

    /// Pointer down on a resize handle; `direction` is `n`, `se`, ...
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> Result<(), JsValue> {
        let handle = ResizeHandle::from_direction(direction)
            .ok_or_else(|| JsValue::from_str(&format!("unknown resize direction: {direction}")))?;
        self.shell.begin_resize(id, handle, x, y).map_err(js_error)
    }

    /// Handle pointer move; true if a drag consumed it
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.shell.pointer_move(x, y)
    }

    /// Handle pointer up; true if a drag ended
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.shell.pointer_up()
    }

    /// Advance physics; true while any window is still moving
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.shell.tick()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current configuration as JSON
    #[wasm_bindgen]
    pub fn get_config_json(&self) -> String {
        serde_json::to_string(self.shell.config()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Merge a partial physics config
    #[wasm_bindgen]
    pub fn set_physics_config(&mut self, patch_json: &str) -> Result<(), JsValue> {
        let patch: PhysicsPatch = serde_json::from_str(patch_json).map_err(js_error)?;
        self.shell.set_physics_config(patch);
        Ok(())
    }

    /// Merge a partial snap/grid config
    #[wasm_bindgen]
    pub fn set_snap_config(&mut self, patch_json: &str) -> Result<(), JsValue> {
        let patch: SnapPatch = serde_json::from_str(patch_json).map_err(js_error)?;
        self.shell.set_snap_config(patch);
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save to localStorage
    #[wasm_bindgen]
    pub fn save(&self) -> Result<(), JsValue> {
        let mut store = LocalStorageStore::open().map_err(js_error)?;
        self.shell.save(&mut store).map_err(js_error)
    }

    /// Load from localStorage; false if nothing was saved
    #[wasm_bindgen]
    pub fn load(&mut self) -> Result<bool, JsValue> {
        let store = LocalStorageStore::open().map_err(js_error)?;
        self.shell.load(&store).map_err(js_error)
    }

    /// Export state as a JSON blob
    #[wasm_bindgen]
    pub fn export_snapshot(&self) -> Result<String, JsValue> {
        self.shell.export_snapshot().map_err(js_error)
    }

    /// Replace state from a JSON blob
    #[wasm_bindgen]
    pub fn import_snapshot(&mut self, json: &str) -> Result<(), JsValue> {
        self.shell.import_snapshot(json).map_err(js_error)
    }
}
