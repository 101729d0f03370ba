//! Scene descriptions and world construction.
//!
//! A scene file lists entities: exactly one ocean plus any number of boats,
//! each with optional cameras. Construction validates everything a tick
//! assumes, so a world that builds never trips the spawn checks.

use crate::ocean::{GerstnerOcean, SeaState, WaveConfig, WaveParams, MAX_WAVES};
use crate::world::SailingWorld;
use bevy::math::Vec3;
use bevy_log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDesc {
    pub entities: Vec<EntityDesc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityDesc {
    Ocean(OceanDesc),
    Boat(BoatDesc),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanDesc {
    pub sea_state: SeaState,
    /// Resting water level, world Y.
    pub base_level: f32,
    /// Explicit wave list; overrides the preset when present.
    pub waves: Option<Vec<WaveParams>>,
    /// Amplitude multiplier for an explicit wave list. Presets carry their
    /// own.
    pub amplitude_scale: f32,
}

impl Default for OceanDesc {
    fn default() -> Self {
        Self {
            sea_state: SeaState::default(),
            base_level: 0.0,
            waves: None,
            amplitude_scale: 1.0,
        }
    }
}

impl OceanDesc {
    /// Reduce to a wave field. Explicit waves are re-sanitized on the way in
    /// since scene files bypass the [`WaveParams`] constructor.
    pub fn wave_config(&self) -> WaveConfig {
        let Some(waves) = &self.waves else {
            return self.sea_state.to_config(self.base_level);
        };

        let mut config = WaveConfig::new(self.base_level);
        config.amplitude_scale = self.amplitude_scale;
        for wave in waves {
            let wave = WaveParams::new(wave.direction, wave.steepness, wave.wavelength, wave.speed);
            if !config.add_wave(wave) {
                warn!("scene lists more than {MAX_WAVES} waves, extras ignored");
                break;
            }
        }
        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatDesc {
    pub position: Vec3,
    /// Heading around world up, degrees. Zero faces -Z.
    #[serde(default)]
    pub yaw_degrees: f32,
    /// Hull footprint, world units.
    pub width: f32,
    pub depth: f32,
    pub max_speed: f32,
    #[serde(default)]
    pub cameras: Vec<CameraDesc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    /// Spawn offset from the hull; the first tick turns this into the orbit
    /// distance and direction.
    pub offset: Vec3,
    pub min_dist: f32,
    pub max_dist: f32,
    pub move_speed: f32,
    pub zoom_speed: f32,
    pub pitch_limit: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 6.0, 12.0),
            min_dist: 5.0,
            max_dist: 20.0,
            move_speed: 10.0,
            zoom_speed: 4.0,
            pitch_limit: 1.2,
        }
    }
}

impl SceneDesc {
    /// Built-in scene used when no file is given: open-sea swell, one sloop,
    /// one chase camera.
    pub fn demo() -> Self {
        Self {
            entities: vec![
                EntityDesc::Ocean(OceanDesc::default()),
                EntityDesc::Boat(BoatDesc {
                    position: Vec3::ZERO,
                    yaw_degrees: 0.0,
                    width: 2.0,
                    depth: 5.5,
                    max_speed: 25.0,
                    cameras: vec![CameraDesc::default()],
                }),
            ],
        }
    }
}

/// Build a runnable world from a scene description.
pub fn build_world(scene: &SceneDesc) -> Result<SailingWorld, Box<dyn Error>> {
    let mut ocean: Option<&OceanDesc> = None;
    for entity in &scene.entities {
        if let EntityDesc::Ocean(desc) = entity {
            if ocean.is_some() {
                return Err("scene declares more than one ocean".into());
            }
            ocean = Some(desc);
        }
    }
    let Some(ocean) = ocean else {
        return Err("scene declares no ocean".into());
    };

    let mut world = SailingWorld::new(GerstnerOcean::new(ocean.wave_config()));

    for entity in &scene.entities {
        let EntityDesc::Boat(boat) = entity else {
            continue;
        };
        if boat.width <= 0.0 || boat.depth <= 0.0 {
            return Err(format!(
                "boat footprint must have positive extents, got {} x {}",
                boat.width, boat.depth
            )
            .into());
        }
        if boat.max_speed <= 0.0 {
            return Err(format!("boat max_speed must be positive, got {}", boat.max_speed).into());
        }

        let hull = world.spawn_boat(
            boat.position,
            boat.yaw_degrees.to_radians(),
            boat.width,
            boat.depth,
            boat.max_speed,
        );

        for camera in &boat.cameras {
            if camera.min_dist <= 0.0 || camera.min_dist > camera.max_dist {
                return Err(format!(
                    "camera distance bounds must satisfy 0 < min <= max, got {}..{}",
                    camera.min_dist, camera.max_dist
                )
                .into());
            }
            if camera.offset == Vec3::ZERO {
                warn!("camera spawned directly on its hull, orbit will start from behind");
            }
            world.spawn_boat_camera(
                hull,
                camera.offset,
                camera.min_dist,
                camera.max_dist,
                camera.move_speed,
                camera.zoom_speed,
                camera.pitch_limit,
            );
        }
    }

    Ok(world)
}
