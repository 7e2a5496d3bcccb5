//! Geometry policies: configuration, snapping, bounds and physics
//!
//! Everything here is a pure function of rectangles and configuration. The
//! registry decides when to call them.

mod bounds;
mod config;
mod physics;
mod snap;

pub use bounds::constrain_position;
pub use config::{PhysicsConfig, PhysicsPatch, ShellConfig, SnapPatch, MIN_MASS};
pub use physics::{step, PhysicsStep, REST_SPEED};
pub use snap::{find_snap, Axis, GuideKind, SnapGuide, SnapResult};
