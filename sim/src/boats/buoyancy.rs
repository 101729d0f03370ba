//! Fitting a hull to the water surface.
//!
//! One surface query per sample point, averaged before deriving the frame.
//! Averaging first smooths high-frequency chop into a raft-like tilt instead
//! of letting a single noisy sample jitter the whole hull.

use crate::constants::HULL_SAMPLE_COUNT;
use crate::ocean::{OceanSample, OceanSurface};
use bevy::prelude::*;

/// Solved pose target for one hull, blended in by the locomotion tick.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFit {
    /// Water height at the footprint, world Y.
    pub target_height: f32,
    /// Orientation matching the averaged surface frame.
    pub target_orientation: Quat,
}

/// Sample constellation across the hull footprint, world XZ.
///
/// ```text
///        *        bow
///       / \
///   *  |   |  *   beams, at the center line
///      |   |
///   *  |___|  *   quarters
/// ```
///
/// Six points: the center plus the five above. Offsets come from the boat's
/// current heading, not the hull's own tilted frame, so the footprint tracks
/// where the boat is actually pointed.
pub fn hull_sample_points(
    center: Vec3,
    boat_rotation: Quat,
    half_extents: Vec2,
) -> [Vec2; HULL_SAMPLE_COUNT] {
    let forward = boat_rotation * Vec3::NEG_Z * half_extents.y;
    let right = boat_rotation * Vec3::X * half_extents.x;

    let center = Vec2::new(center.x, center.z);
    let forward = Vec2::new(forward.x, forward.z);
    let right = Vec2::new(right.x, right.z);

    [
        center,
        center + forward,
        center + right,
        center - right,
        center + right - forward,
        center - right - forward,
    ]
}

/// Solve the target height and orientation for a hull footprint.
///
/// Queries the ocean once per sample point, averages position and surface
/// derivatives componentwise, renormalizes the averaged derivatives, and
/// builds the orientation that looks along the averaged binormal with the
/// surface normal as up.
pub fn fit_hull_to_surface(
    center: Vec3,
    boat_rotation: Quat,
    half_extents: Vec2,
    ocean: &impl OceanSurface,
) -> SurfaceFit {
    let points = hull_sample_points(center, boat_rotation, half_extents);

    let mut average = OceanSample::default();
    for point in points {
        let sample = ocean.sample(point);
        average.pos += sample.pos;
        average.tangent += sample.tangent;
        average.binormal += sample.binormal;
    }
    let count = points.len() as f32;
    average.pos /= count;
    average.tangent = (average.tangent / count).normalize_or(Vec3::X);
    average.binormal = (average.binormal / count).normalize_or(Vec3::Z);

    let normal = average
        .binormal
        .cross(average.tangent)
        .normalize_or(Vec3::Y);
    let target_orientation = Transform::IDENTITY
        .looking_to(average.binormal, normal)
        .rotation;

    SurfaceFit {
        target_height: average.pos.y,
        target_orientation,
    }
}
