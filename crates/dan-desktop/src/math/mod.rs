//! Core geometry types for the window core
//!
//! Plain 2D value types used for window positions, sizes, velocities and
//! viewport bounds.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
