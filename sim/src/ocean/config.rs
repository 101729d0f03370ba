//! Wave field configuration.
//!
//! Scene files either name a [`SeaState`] preset or list explicit
//! [`WaveParams`]; both reduce to a [`WaveConfig`] the surface evaluator
//! precomputes its constants from.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Maximum number of superimposed waves.
pub const MAX_WAVES: usize = 4;

/// A single Gerstner wave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveParams {
    /// Propagation direction (normalized 2D vector over the XZ plane).
    pub direction: Vec2,
    /// 0.0 = plain sine, 1.0 = sharp crest.
    pub steepness: f32,
    /// Crest-to-crest distance in world units.
    pub wavelength: f32,
    /// Phase speed multiplier.
    pub speed: f32,
}

impl WaveParams {
    pub fn new(direction: Vec2, steepness: f32, wavelength: f32, speed: f32) -> Self {
        Self {
            direction: direction.normalize_or(Vec2::X),
            steepness: steepness.clamp(0.0, 1.0),
            wavelength: wavelength.max(0.1),
            speed,
        }
    }

    /// Wave number (k = 2π / wavelength).
    #[inline(always)]
    pub fn wave_number(&self) -> f32 {
        2.0 * PI / self.wavelength
    }

    /// Angular frequency (ω = k * speed).
    #[inline(always)]
    pub fn frequency(&self) -> f32 {
        self.wave_number() * self.speed
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::new(Vec2::X, 0.3, 12.0, 1.0)
    }
}

/// Complete wave field description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub waves: [WaveParams; MAX_WAVES],
    /// Number of active entries in `waves`.
    pub num_waves: u32,
    /// Resting water level (world Y).
    pub base_level: f32,
    /// Global amplitude multiplier.
    pub amplitude_scale: f32,
}

impl WaveConfig {
    /// Flat water at the given level, no active waves.
    pub fn new(base_level: f32) -> Self {
        Self {
            waves: [WaveParams::default(); MAX_WAVES],
            num_waves: 0,
            base_level,
            amplitude_scale: 1.0,
        }
    }

    /// Add a wave. Returns false once the field is full.
    pub fn add_wave(&mut self, params: WaveParams) -> bool {
        if (self.num_waves as usize) < MAX_WAVES {
            self.waves[self.num_waves as usize] = params;
            self.num_waves += 1;
            true
        } else {
            false
        }
    }

    pub fn active_waves(&self) -> impl Iterator<Item = &WaveParams> {
        self.waves.iter().take(self.num_waves as usize)
    }
}

/// Named sea conditions for scene files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeaState {
    /// Perfectly flat water.
    Still,
    /// Sheltered chop, short and low.
    Harbor,
    /// Sailing swell.
    #[default]
    OpenSea,
    /// Heavy weather.
    Storm,
}

impl SeaState {
    pub fn to_config(self, base_level: f32) -> WaveConfig {
        let mut config = WaveConfig::new(base_level);

        match self {
            SeaState::Still => {
                // No waves
            }
            SeaState::Harbor => {
                config.amplitude_scale = 0.4;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.1), 0.15, 5.0, 0.6));
                config.add_wave(WaveParams::new(Vec2::new(-0.2, 1.0), 0.1, 3.0, 0.9));
            }
            SeaState::OpenSea => {
                config.amplitude_scale = 1.0;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.2), 0.45, 28.0, 1.2));
                config.add_wave(WaveParams::new(Vec2::new(0.6, -1.0), 0.35, 16.0, 1.6));
                config.add_wave(WaveParams::new(Vec2::new(-0.8, 0.5), 0.25, 9.0, 2.0));
            }
            SeaState::Storm => {
                config.amplitude_scale = 1.8;
                config.add_wave(WaveParams::new(Vec2::new(1.0, 0.15), 0.7, 40.0, 1.8));
                config.add_wave(WaveParams::new(Vec2::new(-0.4, 1.0), 0.6, 24.0, 2.2));
                config.add_wave(WaveParams::new(Vec2::new(0.8, -0.6), 0.5, 14.0, 2.6));
                config.add_wave(WaveParams::new(Vec2::new(-1.0, -0.2), 0.45, 8.0, 3.0));
            }
        }

        config
    }
}
