//! Momentum simulation for thrown windows

use crate::math::{Rect, Size, Vec2};
use super::PhysicsConfig;

/// Below this speed (pixels per tick) a window is considered at rest
pub const REST_SPEED: f32 = 0.5;

/// Result of one simulation tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsStep {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Speed dropped below [`REST_SPEED`]
    pub settled: bool,
}

/// Advance one tick.
///
/// Order: spring pull toward `target`, friction decay, speed cap,
/// integration, then reflection off `bounds`.
pub fn step(
    position: Vec2,
    size: Size,
    velocity: Vec2,
    target: Option<Vec2>,
    bounds: Rect,
    physics: &PhysicsConfig,
) -> PhysicsStep {
    let mut velocity = velocity;

    if let Some(target) = target {
        let pull = physics.snap_strength / physics.mass.max(super::config::MIN_MASS);
        velocity = velocity + (target - position) * pull;
    }

    velocity = velocity * (1.0 - physics.friction);
    velocity = velocity.clamp_length(physics.max_velocity);

    let mut position = position + velocity;

    let max_x = (bounds.right() - size.width).max(bounds.x);
    if position.x < bounds.x {
        position.x = bounds.x;
        velocity.x = -velocity.x * physics.elasticity;
    } else if position.x > max_x {
        position.x = max_x;
        velocity.x = -velocity.x * physics.elasticity;
    }

    let max_y = (bounds.bottom() - size.height).max(bounds.y);
    if position.y < bounds.y {
        position.y = bounds.y;
        velocity.y = -velocity.y * physics.elasticity;
    } else if position.y > max_y {
        position.y = max_y;
        velocity.y = -velocity.y * physics.elasticity;
    }

    PhysicsStep {
        position,
        velocity,
        settled: velocity.length() < REST_SPEED,
    }
}
