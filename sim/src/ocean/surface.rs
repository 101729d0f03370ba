//! Gerstner wave field evaluation.
//!
//! Horizontal displacement `dir * a * sin(θ)`, height `a * cos(θ)`, with
//! `θ = k(dir · p) − ωt` and `ω = k * speed`. The tangent/binormal returned
//! per sample are the analytic ∂/∂x and ∂/∂z of the displaced position, so
//! they stay consistent with the heights the same phases produce.

use super::config::{WaveConfig, MAX_WAVES};
use super::{OceanSample, OceanSurface};
use bevy::math::{Vec2, Vec3};

/// Precomputed per-wave constants.
#[derive(Debug, Clone, Copy, Default)]
struct WaveConstants {
    /// Wave number k = 2π / wavelength.
    k: f32,
    /// Angular frequency ω = k * speed.
    omega: f32,
    /// Amplitude = steepness / k, scaled.
    amplitude: f32,
    /// Slope factor q = amplitude * k = steepness * scale.
    q: f32,
    dir_x: f32,
    dir_y: f32,
}

/// Stateful ocean: a wave field plus the current simulation time.
///
/// The host advances time exactly once per tick; sampling is pure at the
/// frozen time, which is what keeps multi-point hull queries coherent.
#[derive(Debug)]
pub struct GerstnerOcean {
    config: WaveConfig,
    constants: [WaveConstants; MAX_WAVES],
    time: f32,
}

impl GerstnerOcean {
    pub fn new(config: WaveConfig) -> Self {
        let mut constants = [WaveConstants::default(); MAX_WAVES];

        for (i, wave) in config.active_waves().enumerate() {
            let k = wave.wave_number();
            constants[i] = WaveConstants {
                k,
                omega: wave.frequency(),
                amplitude: (wave.steepness / k) * config.amplitude_scale,
                q: wave.steepness * config.amplitude_scale,
                dir_x: wave.direction.x,
                dir_y: wave.direction.y,
            };
        }

        Self {
            config,
            constants,
            time: 0.0,
        }
    }

    /// Swap the wave field (weather change); time keeps running.
    pub fn set_config(&mut self, config: WaveConfig) {
        let time = self.time;
        *self = Self::new(config);
        self.time = time;
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance simulation time. Call once per tick, before any sampling.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Evaluate the field at a world XZ point and an explicit time.
    pub fn sample_at(&self, point: Vec2, time: f32) -> OceanSample {
        let mut pos = Vec3::new(point.x, self.config.base_level, point.y);
        let mut tangent = Vec3::X;
        let mut binormal = Vec3::Z;

        for i in 0..self.config.num_waves as usize {
            let wc = &self.constants[i];

            let dot = wc.dir_x * point.x + wc.dir_y * point.y;
            let phase = wc.k * dot - wc.omega * time;
            let (sin_phase, cos_phase) = phase.sin_cos();

            pos.x += wc.dir_x * wc.amplitude * sin_phase;
            pos.y += wc.amplitude * cos_phase;
            pos.z += wc.dir_y * wc.amplitude * sin_phase;

            // d(phase)/dx = k * dir_x, d(phase)/dz = k * dir_y; the q factor
            // below absorbs amplitude * k.
            tangent.x += wc.q * wc.dir_x * wc.dir_x * cos_phase;
            tangent.y -= wc.q * wc.dir_x * sin_phase;
            tangent.z += wc.q * wc.dir_x * wc.dir_y * cos_phase;

            binormal.x += wc.q * wc.dir_x * wc.dir_y * cos_phase;
            binormal.y -= wc.q * wc.dir_y * sin_phase;
            binormal.z += wc.q * wc.dir_y * wc.dir_y * cos_phase;
        }

        OceanSample {
            pos,
            tangent,
            binormal,
        }
    }

    /// Height-only evaluation, cheaper than a full sample.
    pub fn height_only(&self, point: Vec2, time: f32) -> f32 {
        let mut height = self.config.base_level;

        for i in 0..self.config.num_waves as usize {
            let wc = &self.constants[i];
            let dot = wc.dir_x * point.x + wc.dir_y * point.y;
            let phase = wc.k * dot - wc.omega * time;
            height += wc.amplitude * phase.cos();
        }

        height
    }
}

impl OceanSurface for GerstnerOcean {
    fn sample(&self, point: Vec2) -> OceanSample {
        self.sample_at(point, self.time)
    }

    fn height_at(&self, point: Vec2) -> f32 {
        self.height_only(point, self.time)
    }
}
