//! Procedural ocean surface.
//!
//! One [`WaveConfig`] drives a closed-form Gerstner field; everything a hull
//! needs back out of it is an [`OceanSample`] per queried point.
//!
//! ```text
//!  WaveConfig / SeaState preset
//!            │
//!            ▼
//!     GerstnerOcean ── advance(dt) once per tick (host)
//!            │
//!            ▼  sample(xz), any number of times, read-only
//!     OceanSample { pos, tangent, binormal }
//! ```
//!
//! Consumers only see the [`OceanSurface`] trait, so tests can float hulls on
//! hand-written surfaces without touching wave math.

pub mod config;
pub mod surface;

pub use config::{SeaState, WaveConfig, WaveParams, MAX_WAVES};
pub use surface::GerstnerOcean;

use bevy::math::{Vec2, Vec3};

/// One surface evaluation. Ephemeral; produced fresh per query and averaged
/// by the buoyancy solve, never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OceanSample {
    /// Displaced world-space point on the surface.
    pub pos: Vec3,
    /// Surface derivative along world +X (not normalized).
    pub tangent: Vec3,
    /// Surface derivative along world +Z (not normalized).
    pub binormal: Vec3,
}

/// Read-only view of the water at the current simulation time.
///
/// `sample` must be free of side effects: the solver calls it several times
/// per hull per tick and relies on identical answers for identical points.
pub trait OceanSurface {
    fn sample(&self, point: Vec2) -> OceanSample;

    /// Surface height at a point, for callers that only need the scalar.
    fn height_at(&self, point: Vec2) -> f32 {
        self.sample(point).pos.y
    }
}
