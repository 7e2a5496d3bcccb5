//! Window record

use serde::{Deserialize, Serialize};
use crate::error::WindowError;
use crate::layout::SnapGuide;
use crate::math::{Rect, Size, Vec2};
use super::{WindowContent, WindowId};

/// A window in the desktop shell
///
/// Fields are public for reading. Mutation goes through
/// [`WindowRegistry`](super::WindowRegistry), which holds the only `&mut`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Icon name shown in the title bar and taskbar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Panel content, serialized as `type` + `data`
    #[serde(flatten)]
    pub content: WindowContent,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Outer size including the title bar
    pub size: Size,
    /// Stacking value (higher = on top)
    #[serde(default)]
    pub z_index: u32,
    #[serde(default)]
    pub is_dragging: bool,
    /// Pixels per tick, set while dragging and consumed by physics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Vec2>,
    /// Guides for snap targets currently in range (drag feedback only)
    #[serde(skip)]
    pub snap_guides: Vec<SnapGuide>,
    /// Geometry captured when the window was maximized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) restore_rect: Option<Rect>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window is part of the render set
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Geometry the window returns to when restored from maximized
    #[inline]
    pub fn restore_rect(&self) -> Option<Rect> {
        self.restore_rect
    }

    /// Same checks a new window goes through, for records read from storage
    pub(crate) fn validate(&self) -> Result<(), WindowError> {
        if self.id.is_empty() {
            return Err(WindowError::InvalidId);
        }
        super::config::validate_position(self.position)?;
        super::config::validate_size(self.size)?;
        if let Some(rect) = self.restore_rect {
            super::config::validate_position(rect.position())?;
            super::config::validate_size(rect.size())?;
        }
        Ok(())
    }

    /// Drop drag state that only means something mid-gesture
    pub(crate) fn clear_transient(&mut self) {
        self.is_dragging = false;
        self.velocity = None;
        self.snap_guides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::GateInData;
    use serde_json::json;

    fn create_test_window() -> Window {
        Window {
            id: WindowId::from("w1"),
            title: "Test".to_string(),
            icon: None,
            content: WindowContent::Adapters,
            is_open: true,
            is_minimized: false,
            is_maximized: false,
            position: Vec2::new(100.0, 100.0),
            size: Size::new(800.0, 600.0),
            z_index: 101,
            is_dragging: false,
            velocity: None,
            snap_guides: Vec::new(),
            restore_rect: None,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 800.0).abs() < 0.001);
        assert!((r.height - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_window_visibility() {
        let mut w = create_test_window();
        assert!(w.is_visible());
        w.is_minimized = true;
        assert!(!w.is_visible());
        w.is_minimized = false;
        w.is_open = false;
        assert!(!w.is_visible());
    }

    #[test]
    fn test_window_json_layout() {
        let mut w = create_test_window();
        w.content = WindowContent::GateIn(GateInData { target: Some("Slack".to_string()) });

        let value = serde_json::to_value(&w).unwrap();
        assert_eq!(value["id"], json!("w1"));
        assert_eq!(value["type"], json!("gateIn"));
        assert_eq!(value["data"]["target"], json!("Slack"));
        assert_eq!(value["zIndex"], json!(101));
        assert_eq!(value["isMinimized"], json!(false));
        assert!(value.get("snapGuides").is_none());

        let restored: Window = serde_json::from_value(value).unwrap();
        assert_eq!(restored, w);
    }
}
