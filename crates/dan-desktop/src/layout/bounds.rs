//! Keep windows reachable inside the work area

use crate::math::{Rect, Size, Vec2};

/// Clamp `position` so at least `margin` pixels of the window stay inside
/// `bounds` on each axis. The top-left corner never leaves the work area on
/// the leading side, so the title bar can always be grabbed.
pub fn constrain_position(position: Vec2, size: Size, bounds: Rect, margin: f32) -> Vec2 {
    let keep_x = margin.min(size.width).max(0.0);
    let keep_y = margin.min(size.height).max(0.0);

    let max_x = (bounds.right() - keep_x).max(bounds.x);
    let max_y = (bounds.bottom() - keep_y).max(bounds.y);

    Vec2::new(
        position.x.clamp(bounds.x, max_x),
        position.y.clamp(bounds.y, max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK_AREA: Rect = Rect::new(0.0, 60.0, 1920.0, 1020.0);

    #[test]
    fn test_inside_is_untouched() {
        let p = constrain_position(Vec2::new(100.0, 200.0), Size::new(400.0, 300.0), WORK_AREA, 48.0);
        assert_eq!(p, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_clamps_past_right_and_bottom() {
        let p = constrain_position(Vec2::new(5000.0, 5000.0), Size::new(400.0, 300.0), WORK_AREA, 48.0);
        assert!((p.x - (1920.0 - 48.0)).abs() < 0.001);
        assert!((p.y - (1080.0 - 48.0)).abs() < 0.001);
    }

    #[test]
    fn test_clamps_under_taskbar() {
        let p = constrain_position(Vec2::new(10.0, 5.0), Size::new(400.0, 300.0), WORK_AREA, 48.0);
        assert!((p.y - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_small_window_keeps_whole_width() {
        let p = constrain_position(Vec2::new(5000.0, 100.0), Size::new(20.0, 20.0), WORK_AREA, 48.0);
        assert!((p.x - 1900.0).abs() < 0.001);
    }
}
