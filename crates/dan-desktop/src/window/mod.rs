//! Window management module
//!
//! Provides the window record, its typed content, the registry that owns
//! window lifecycle and the stacking counter that decides focus.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod content;
mod patch;
mod registry;
mod zorder;

use std::fmt;
use serde::{Deserialize, Serialize};

pub use window::Window;
pub use config::WindowConfig;
pub use content::{
    AgentDashboardData, CopilotData, FlowData, GateInData, WindowContent,
};
pub use patch::WindowPatch;
pub use registry::WindowRegistry;
pub use zorder::{ZOrder, INITIAL_Z_INDEX};

/// Unique window identifier, supplied by whoever creates the window
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is the empty string
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
