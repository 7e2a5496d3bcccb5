//! Browser viewport the windows live in

use crate::math::{Rect, Size};

/// Screen area available to the shell.
///
/// The taskbar runs along the top edge; everything below it is the work
/// area that maximized windows fill and dragged windows are kept inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
    /// Height reserved for the taskbar
    pub taskbar_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
            taskbar_height: 60.0,
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(screen_width: f32, screen_height: f32, taskbar_height: f32) -> Self {
        Self {
            screen_size: Size::new(screen_width.max(0.0), screen_height.max(0.0)),
            taskbar_height: taskbar_height.max(0.0),
        }
    }

    /// Screen minus the taskbar strip
    pub fn work_area(&self) -> Rect {
        let top = self.taskbar_height.min(self.screen_size.height);
        Rect::new(
            0.0,
            top,
            self.screen_size.width,
            self.screen_size.height - top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_work_area() {
        let viewport = Viewport::new(1920.0, 1080.0, 60.0);
        let area = viewport.work_area();

        assert!((area.x - 0.0).abs() < 0.001);
        assert!((area.y - 60.0).abs() < 0.001);
        assert!((area.width - 1920.0).abs() < 0.001);
        assert!((area.height - 1020.0).abs() < 0.001);
    }

    #[test]
    fn test_viewport_default_work_area() {
        let area = Viewport::default().work_area();
        assert_eq!(area, Rect::new(0.0, 60.0, 1920.0, 1020.0));
    }

    #[test]
    fn test_viewport_tiny_screen() {
        let viewport = Viewport::new(300.0, 40.0, 60.0);
        let area = viewport.work_area();
        assert!((area.y - 40.0).abs() < 0.001);
        assert!((area.height - 0.0).abs() < 0.001);
    }
}
