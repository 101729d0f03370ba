//! Boats: the floating hull, its helm, and the chase camera.
//!
//! A boat is three arena nodes. The boat node is what the player steers
//! (yaw + translation), the hull node hangs under it and carries the wave
//! tilt, and camera nodes hang under the hull. Component structs here hold
//! the per-entity state the tick functions integrate.

pub mod buoyancy;
pub mod camera;
pub mod movement;

pub use buoyancy::{fit_hull_to_surface, hull_sample_points, SurfaceFit};
pub use camera::tick_boat_camera;
pub use movement::tick_boat_locomotion;

use crate::transform::TransformId;
use bevy::math::{Vec2, Vec3};

/// Floating part of a boat. The node it points at carries the wave tilt; that
/// node's parent is the boat transform locomotion actually drives.
#[derive(Debug, Clone)]
pub struct Hull {
    pub transform: TransformId,
    /// Beam of the footprint, world units.
    pub width: f32,
    /// Bow-to-stern length of the footprint, world units.
    pub depth: f32,
    /// Forward speed, world units per second. Negative while drag reverses it.
    pub speed: f32,
    pub max_speed: f32,
    /// Yaw rate of the parent boat. Stays within [-1, 1] after every tick.
    pub heading_velocity: f32,
}

impl Hull {
    pub fn new(transform: TransformId, width: f32, depth: f32, max_speed: f32) -> Self {
        Self {
            transform,
            width,
            depth,
            speed: 0.0,
            max_speed,
            heading_velocity: 0.0,
        }
    }

    /// (half width, half depth) for sample placement.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.depth) * 0.5
    }
}

/// Third-person arcball rig following one hull.
#[derive(Debug, Clone)]
pub struct BoatCamera {
    pub transform: TransformId,
    pub min_dist: f32,
    pub max_dist: f32,
    /// Loaded tuning value; orbit currently runs off the fixed look speed.
    pub move_speed: f32,
    /// Wheel-to-distance scale.
    pub zoom_speed: f32,
    /// Reserved vertical orbit bound, loaded but not yet enforced.
    pub pitch_limit: f32,
    /// Orbit distance. 0.0 is the "not yet initialized" sentinel; the first
    /// tick replaces it with the camera's spawn offset from the hull.
    pub target_dist: f32,
    /// Unit vector from hull to camera, rotated incrementally by orbit input.
    pub target_hull_to_camera: Vec3,
}

impl BoatCamera {
    pub fn new(
        transform: TransformId,
        min_dist: f32,
        max_dist: f32,
        move_speed: f32,
        zoom_speed: f32,
        pitch_limit: f32,
    ) -> Self {
        Self {
            transform,
            min_dist,
            max_dist,
            move_speed,
            zoom_speed,
            pitch_limit,
            target_dist: 0.0,
            target_hull_to_camera: Vec3::ZERO,
        }
    }
}
