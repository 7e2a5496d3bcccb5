//! Snap-to-edge and snap-to-grid
//!
//! Each axis is solved on its own. A candidate is a position for the
//! window's leading edge that would make one of its edges line up with a
//! target line: another window's edge, the work-area edge, or a grid line.
//! Only candidates within `snap_threshold` count; the nearest one wins.

use std::cmp::Ordering;
use serde::Serialize;
use crate::math::{Rect, Vec2};
use super::ShellConfig;

/// Where a snap line comes from. Declaration order is tie-break priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideKind {
    /// Edge of another window
    Edge,
    /// Edge of the work area
    Bounds,
    /// Grid line
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A line the window is (or would be) aligned to, for drawing drag feedback
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SnapGuide {
    pub kind: GuideKind,
    pub axis: Axis,
    /// Coordinate of the line on `axis`
    pub at: f32,
}

/// Outcome of a snap query
#[derive(Clone, Debug, PartialEq)]
pub struct SnapResult {
    /// Snapped position; axes without a candidate keep their coordinate
    pub position: Vec2,
    /// One guide per axis that snapped
    pub guides: Vec<SnapGuide>,
}

impl SnapResult {
    /// True if at least one axis moved to a target
    #[inline]
    pub fn snapped(&self) -> bool {
        !self.guides.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    /// New leading-edge coordinate
    origin: f32,
    /// Target line
    line: f32,
    kind: GuideKind,
    distance: f32,
}

impl Candidate {
    fn rank(&self, other: &Candidate) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.kind.cmp(&other.kind))
            .then(self.origin.total_cmp(&other.origin))
    }
}

/// Find the snap position for `rect` given the other visible windows.
pub fn find_snap(rect: Rect, others: &[Rect], bounds: Option<Rect>, config: &ShellConfig) -> SnapResult {
    let mut position = rect.position();
    let mut guides = Vec::new();

    let x_lines = |r: &Rect| [r.x, r.right()];
    let y_lines = |r: &Rect| [r.y, r.bottom()];

    if let Some(best) = best_candidate(rect.x, rect.width, others, bounds, config, x_lines) {
        position.x = best.origin;
        guides.push(SnapGuide { kind: best.kind, axis: Axis::X, at: best.line });
    }
    if let Some(best) = best_candidate(rect.y, rect.height, others, bounds, config, y_lines) {
        position.y = best.origin;
        guides.push(SnapGuide { kind: best.kind, axis: Axis::Y, at: best.line });
    }

    SnapResult { position, guides }
}

fn best_candidate(
    start: f32,
    extent: f32,
    others: &[Rect],
    bounds: Option<Rect>,
    config: &ShellConfig,
    lines_of: impl Fn(&Rect) -> [f32; 2],
) -> Option<Candidate> {
    let threshold = config.snap_threshold;
    let mut best: Option<Candidate> = None;

    let mut consider = |line: f32, kind: GuideKind| {
        // Leading edge on the line, then trailing edge on the line
        for origin in [line, line - extent] {
            let distance = (origin - start).abs();
            if distance > threshold || origin < 0.0 {
                continue;
            }
            let candidate = Candidate { origin, line, kind, distance };
            let better = match &best {
                Some(current) => candidate.rank(current) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
    };

    for other in others {
        for line in lines_of(other) {
            consider(line, GuideKind::Edge);
        }
    }

    if let Some(bounds) = bounds {
        for line in lines_of(&bounds) {
            consider(line, GuideKind::Bounds);
        }
    }

    if config.is_grid_enabled && config.grid_size > 0.0 {
        let grid = config.grid_size;
        consider((start / grid).round() * grid, GuideKind::Grid);
        consider(((start + extent) / grid).round() * grid, GuideKind::Grid);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: f32) -> ShellConfig {
        ShellConfig {
            snap_threshold: threshold,
            ..Default::default()
        }
    }

    #[test]
    fn test_snaps_to_nearest_window_edge() {
        let others = [
            Rect::new(10.0, 100.0, 30.0, 30.0),
            Rect::new(14.0, 200.0, 30.0, 30.0),
        ];
        let moving = Rect::new(16.0, 300.0, 30.0, 30.0);

        let result = find_snap(moving, &others, None, &config(5.0));
        assert!((result.position.x - 14.0).abs() < 0.001);
        assert_eq!(result.guides[0], SnapGuide { kind: GuideKind::Edge, axis: Axis::X, at: 14.0 });
    }

    #[test]
    fn test_nothing_in_range_keeps_position() {
        let others = [Rect::new(500.0, 500.0, 50.0, 50.0)];
        let moving = Rect::new(100.0, 100.0, 50.0, 50.0);

        let result = find_snap(moving, &others, None, &config(5.0));
        assert_eq!(result.position, Vec2::new(100.0, 100.0));
        assert!(!result.snapped());
    }

    #[test]
    fn test_trailing_edge_alignment() {
        // Moving window's right edge (103 + 50 = 153) lands near the other's left edge (150)
        let others = [Rect::new(150.0, 0.0, 100.0, 100.0)];
        let moving = Rect::new(103.0, 400.0, 50.0, 50.0);

        let result = find_snap(moving, &others, None, &config(5.0));
        assert!((result.position.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_axes_are_independent() {
        let others = [Rect::new(200.0, 50.0, 100.0, 100.0)];
        let moving = Rect::new(198.0, 147.0, 80.0, 80.0);

        let result = find_snap(moving, &others, None, &config(5.0));
        assert!((result.position.x - 200.0).abs() < 0.001);
        assert!((result.position.y - 150.0).abs() < 0.001);
        assert_eq!(result.guides.len(), 2);
    }

    #[test]
    fn test_grid_snap_only_when_enabled() {
        let moving = Rect::new(50.0, 71.0, 100.0, 100.0);
        let mut cfg = config(5.0);

        let result = find_snap(moving, &[], None, &cfg);
        assert!(!result.snapped());

        cfg.is_grid_enabled = true;
        let result = find_snap(moving, &[], None, &cfg);
        assert!((result.position.x - 48.0).abs() < 0.001);
        assert!((result.position.y - 72.0).abs() < 0.001);
        assert!(result.guides.iter().all(|g| g.kind == GuideKind::Grid));
    }

    #[test]
    fn test_tie_prefers_window_edge_over_grid() {
        let others = [Rect::new(48.0, 500.0, 10.0, 10.0)];
        let moving = Rect::new(50.0, 0.0, 100.0, 100.0);
        let cfg = ShellConfig {
            snap_threshold: 5.0,
            is_grid_enabled: true,
            ..Default::default()
        };

        let result = find_snap(moving, &others, None, &cfg);
        let x_guide = result.guides.iter().find(|g| g.axis == Axis::X).unwrap();
        assert_eq!(x_guide.kind, GuideKind::Edge);
    }

    #[test]
    fn test_snaps_to_bounds_edge() {
        let bounds = Rect::new(0.0, 60.0, 1920.0, 1020.0);
        let moving = Rect::new(3.0, 64.0, 400.0, 300.0);

        let result = find_snap(moving, &[], Some(bounds), &config(16.0));
        assert_eq!(result.position, Vec2::new(0.0, 60.0));
    }
}
