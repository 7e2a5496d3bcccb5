//! Partial window updates

use serde::Deserialize;
use crate::error::WindowError;
use crate::math::{Size, Vec2};
use super::config::{validate_position, validate_size};
use super::{Window, WindowContent};

/// Fields that may be merged into an existing window.
///
/// There is no `id` or `zIndex` here: identity is fixed at creation and
/// stacking values come only from the z-order counter. Minimize/maximize
/// flags have their own transitions because maximize owns a geometry
/// snapshot.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowPatch {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub is_open: Option<bool>,
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub velocity: Option<Vec2>,
    pub content: Option<WindowContent>,
}

impl WindowPatch {
    /// Check geometry without touching anything
    pub fn validate(&self) -> Result<(), WindowError> {
        if let Some(position) = self.position {
            validate_position(position)?;
        }
        if let Some(size) = self.size {
            validate_size(size)?;
        }
        if let Some(velocity) = self.velocity {
            for (field, value) in [("velocity.x", velocity.x), ("velocity.y", velocity.y)] {
                if !value.is_finite() {
                    return Err(WindowError::InvalidGeometry { field, value });
                }
            }
        }
        Ok(())
    }

    /// Merge into `window`. Call [`validate`](Self::validate) first.
    pub(crate) fn apply_to(self, window: &mut Window) {
        if let Some(title) = self.title {
            window.title = title;
        }
        if let Some(icon) = self.icon {
            window.icon = Some(icon);
        }
        if let Some(is_open) = self.is_open {
            window.is_open = is_open;
        }
        if let Some(position) = self.position {
            window.position = position;
        }
        if let Some(size) = self.size {
            window.size = size;
        }
        if let Some(velocity) = self.velocity {
            window.velocity = Some(velocity);
        }
        if let Some(content) = self.content {
            window.content = content;
        }
    }
}
