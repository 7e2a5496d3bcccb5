//! Window management core for the Dan desktop shell
//!
//! This crate provides the state behind a browser desktop made of panels:
//! - Window registry (open, close, update, minimize, maximize, restore)
//! - Z-order and focus
//! - Dragging and resizing with snap-to-edge, snap-to-grid and bounds
//! - Optional momentum physics for thrown windows
//! - Panel dispatch by window content
//! - Versioned persistence
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window records, content, registry and stacking counter
//! - [`layout`]: Snap, bounds and physics policies plus configuration
//! - [`input`]: Drag/resize state machine
//! - [`panel`]: Content to panel dispatch and window commands
//! - [`persistence`]: Snapshot serialization and stores
//!
//! [`DesktopShell`] ties them together and is the type a host drives.
//!
//! ## Example
//!
//! ```rust
//! use dan_desktop::{DesktopShell, WindowConfig, WindowContent};
//!
//! let mut shell = DesktopShell::new();
//! shell.init(1920.0, 1080.0);
//!
//! let id = shell
//!     .open_window(
//!         WindowConfig::new("adapters", "Adapters", WindowContent::Adapters)
//!             .at(100.0, 100.0)
//!             .sized(800.0, 600.0),
//!     )
//!     .unwrap();
//! assert_eq!(shell.registry().active_window_id(), Some(&id));
//! ```

pub mod error;
pub mod input;
pub mod layout;
pub mod math;
pub mod panel;
pub mod persistence;
pub mod window;

mod shell;
mod viewport;

#[cfg(feature = "wasm")]
mod logging;
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use error::{PersistenceError, WindowError};
pub use input::{DragState, InputRouter, ResizeHandle};
pub use layout::{PhysicsConfig, PhysicsPatch, ShellConfig, SnapGuide, SnapPatch};
pub use math::{Rect, Size, Vec2};
pub use panel::{PanelFrame, PanelKind, Panels, WindowCommand};
pub use persistence::{MemoryStore, Snapshot, SnapshotStore, STORAGE_KEY};
pub use shell::{DesktopShell, WindowView};
pub use viewport::Viewport;
pub use window::{Window, WindowConfig, WindowContent, WindowId, WindowPatch, WindowRegistry};
