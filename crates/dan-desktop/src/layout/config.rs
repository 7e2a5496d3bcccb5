//! Snap, bounds and physics configuration

use serde::{Deserialize, Serialize};

/// Smallest mass accepted; keeps the spring term finite
pub const MIN_MASS: f32 = 0.01;

/// Physics parameters for thrown windows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    /// When false, releasing a drag snaps immediately and velocity is ignored
    pub enabled: bool,
    pub mass: f32,
    /// Fraction of velocity lost per tick (0..=1)
    pub friction: f32,
    /// Fraction of velocity kept when bouncing off the viewport edge (0..=1)
    pub elasticity: f32,
    /// Spring pull toward the nearest snap target per tick (0..=1)
    pub snap_strength: f32,
    /// Speed cap in pixels per tick
    pub max_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mass: 1.0,
            friction: 0.2,
            elasticity: 0.5,
            snap_strength: 0.8,
            max_velocity: 30.0,
        }
    }
}

/// Partial physics update; unset fields keep their current value
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsPatch {
    pub enabled: Option<bool>,
    pub mass: Option<f32>,
    pub friction: Option<f32>,
    pub elasticity: Option<f32>,
    pub snap_strength: Option<f32>,
    pub max_velocity: Option<f32>,
}

impl PhysicsConfig {
    /// Merge a patch, clamping every value into its usable range
    pub fn apply(&mut self, patch: PhysicsPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(mass) = patch.mass.filter(|v| v.is_finite()) {
            self.mass = mass.max(MIN_MASS);
        }
        if let Some(friction) = patch.friction.filter(|v| v.is_finite()) {
            self.friction = friction.clamp(0.0, 1.0);
        }
        if let Some(elasticity) = patch.elasticity.filter(|v| v.is_finite()) {
            self.elasticity = elasticity.clamp(0.0, 1.0);
        }
        if let Some(strength) = patch.snap_strength.filter(|v| v.is_finite()) {
            self.snap_strength = strength.clamp(0.0, 1.0);
        }
        if let Some(max) = patch.max_velocity.filter(|v| v.is_finite()) {
            self.max_velocity = max.max(0.0);
        }
    }
}

/// Layout configuration owned by the registry and saved with it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Grid cell size in pixels
    pub grid_size: f32,
    /// Maximum distance at which a snap target attracts a window
    pub snap_threshold: f32,
    pub is_grid_enabled: bool,
    pub is_snap_enabled: bool,
    /// Clamp dragged windows so they cannot be lost off-screen
    pub is_bounds_enabled: bool,
    /// Pixels of a window that must stay inside the viewport
    pub min_visible_margin: f32,
    /// Gap kept between cascaded windows and the viewport edge
    pub window_spacing: f32,
    /// Step between successive cascaded windows
    pub cascade_offset: f32,
    /// Height of the taskbar along the top of the viewport
    pub taskbar_height: f32,
    pub physics: PhysicsConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            grid_size: 24.0,
            snap_threshold: 16.0,
            is_grid_enabled: false,
            is_snap_enabled: true,
            is_bounds_enabled: true,
            min_visible_margin: 48.0,
            window_spacing: 24.0,
            cascade_offset: 40.0,
            taskbar_height: 60.0,
            physics: PhysicsConfig::default(),
        }
    }
}

/// Partial snap/grid update
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapPatch {
    pub grid_size: Option<f32>,
    pub snap_threshold: Option<f32>,
    pub is_grid_enabled: Option<bool>,
    pub is_snap_enabled: Option<bool>,
    pub is_bounds_enabled: Option<bool>,
}

impl ShellConfig {
    /// Merge a snap/grid patch
    pub fn apply_snap(&mut self, patch: SnapPatch) {
        if let Some(grid) = patch.grid_size.filter(|v| v.is_finite() && *v > 0.0) {
            self.grid_size = grid;
        }
        if let Some(threshold) = patch.snap_threshold.filter(|v| v.is_finite()) {
            self.snap_threshold = threshold.max(0.0);
        }
        if let Some(enabled) = patch.is_grid_enabled {
            self.is_grid_enabled = enabled;
        }
        if let Some(enabled) = patch.is_snap_enabled {
            self.is_snap_enabled = enabled;
        }
        if let Some(enabled) = patch.is_bounds_enabled {
            self.is_bounds_enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert!((config.grid_size - 24.0).abs() < 0.001);
        assert!((config.snap_threshold - 16.0).abs() < 0.001);
        assert!(config.is_snap_enabled);
        assert!(!config.is_grid_enabled);
        assert!((config.physics.max_velocity - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_physics_patch_merges_and_clamps() {
        let mut physics = PhysicsConfig::default();
        physics.apply(PhysicsPatch {
            friction: Some(3.0),
            mass: Some(0.0),
            max_velocity: Some(f32::NAN),
            ..Default::default()
        });

        assert!((physics.friction - 1.0).abs() < 0.001);
        assert!((physics.mass - MIN_MASS).abs() < 0.0001);
        assert!((physics.max_velocity - 30.0).abs() < 0.001);
        assert!((physics.elasticity - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_snap_patch_rejects_zero_grid() {
        let mut config = ShellConfig::default();
        config.apply_snap(SnapPatch {
            grid_size: Some(0.0),
            is_grid_enabled: Some(true),
            ..Default::default()
        });
        assert!((config.grid_size - 24.0).abs() < 0.001);
        assert!(config.is_grid_enabled);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ShellConfig = serde_json::from_value(json!({ "gridSize": 32.0 })).unwrap();
        assert!((config.grid_size - 32.0).abs() < 0.001);
        assert!((config.cascade_offset - 40.0).abs() < 0.001);
        assert!(!config.physics.enabled);
    }
}
