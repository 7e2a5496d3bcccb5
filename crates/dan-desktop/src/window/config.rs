//! Window configuration for creation

use serde::Deserialize;
use crate::error::WindowError;
use crate::math::{Size, Vec2};
use super::{Window, WindowContent, WindowId};

/// Everything an external flow supplies to open a window.
///
/// The registry never invents ids, so `id` is mandatory. The stacking value
/// is not part of the record: the registry assigns it on insertion.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub id: WindowId,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub content: WindowContent,
    pub position: Vec2,
    pub size: Size,
    #[serde(default = "default_open")]
    pub is_open: bool,
    #[serde(default)]
    pub is_minimized: bool,
    #[serde(default)]
    pub is_maximized: bool,
}

fn default_open() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: WindowId::default(),
            title: String::new(),
            icon: None,
            content: WindowContent::default(),
            position: Vec2::ZERO,
            size: Size::new(600.0, 400.0),
            is_open: true,
            is_minimized: false,
            is_maximized: false,
        }
    }
}

impl WindowConfig {
    /// Start a config with the fields every window needs
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, content: WindowContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            ..Default::default()
        }
    }

    /// Set the initial position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the initial size
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Check id and geometry before the record enters the registry
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.id.is_empty() {
            return Err(WindowError::InvalidId);
        }
        validate_position(self.position)?;
        validate_size(self.size)
    }

    /// Build the stored record with its assigned stacking value
    pub(crate) fn into_window(self, z_index: u32) -> Window {
        Window {
            id: self.id,
            title: self.title,
            icon: self.icon,
            content: self.content,
            is_open: self.is_open,
            is_minimized: self.is_minimized,
            is_maximized: self.is_maximized,
            position: self.position,
            size: self.size,
            z_index,
            is_dragging: false,
            velocity: None,
            snap_guides: Vec::new(),
            restore_rect: None,
        }
    }
}

/// Positions must be finite and non-negative
pub(crate) fn validate_position(position: Vec2) -> Result<(), WindowError> {
    check("x", position.x)?;
    check("y", position.y)
}

/// Sizes must be finite and non-negative
pub(crate) fn validate_size(size: Size) -> Result<(), WindowError> {
    check("width", size.width)?;
    check("height", size.height)
}

fn check(field: &'static str, value: f32) -> Result<(), WindowError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidGeometry { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_from_creation_json() {
        let config: WindowConfig = serde_json::from_value(json!({
            "id": "gate-Notion-1",
            "type": "gateIn",
            "title": "Gated: Notion",
            "isOpen": true,
            "isMinimized": false,
            "isMaximized": false,
            "position": { "x": 200.0, "y": 150.0 },
            "size": { "width": 600.0, "height": 400.0 },
            "data": { "target": "Notion" }
        }))
        .unwrap();

        assert_eq!(config.id, "gate-Notion-1");
        assert_eq!(config.content.kind(), "gateIn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_default_when_omitted() {
        let config: WindowConfig = serde_json::from_value(json!({
            "id": "a",
            "type": "adapters",
            "title": "Adapters",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 10.0, "height": 10.0 }
        }))
        .unwrap();
        assert!(config.is_open);
        assert!(!config.is_minimized);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let config = WindowConfig::new("", "t", WindowContent::Adapters);
        assert_eq!(config.validate(), Err(WindowError::InvalidId));

        let config = WindowConfig::new("a", "t", WindowContent::Adapters).sized(-1.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(WindowError::InvalidGeometry { field: "width", .. })
        ));

        let config = WindowConfig::new("a", "t", WindowContent::Adapters).at(f32::NAN, 0.0);
        assert!(matches!(
            config.validate(),
            Err(WindowError::InvalidGeometry { field: "x", .. })
        ));
    }
}
