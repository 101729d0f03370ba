use crate::helm::{self, HelmInput};
use crate::telemetry;
use bevy::prelude::*;
use bevy_app::ScheduleRunnerPlugin;
use ron::de::from_str;
use sim::scene::{build_world, SceneDesc};
use sim::world::SailingWorld;
use std::path::Path;
use std::time::Duration;

/// Seconds of simulation advanced per tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct StepDt(pub f32);

/// Ticks elapsed so far plus the optional stop point (0 runs forever).
#[derive(Resource, Debug, Default)]
pub struct TickClock {
    pub elapsed: u64,
    pub stop_after: u64,
}

pub fn init(scene_path: &str, tick_rate: u64, ticks: u64) {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / tick_rate as f64,
        ))),
    );
    app.add_plugins(bevy::log::LogPlugin::default());

    let scene = match load_scene(scene_path) {
        Ok(scene) => scene,
        Err(err) => {
            error!("Failed to load scene {} : {}", scene_path, err);
            panic!()
        }
    };
    let world = match build_world(&scene) {
        Ok(world) => world,
        Err(err) => {
            error!("Scene {} does not describe a valid world : {}", scene_path, err);
            panic!()
        }
    };

    info!(
        "Simulating {} boat(s) and {} camera(s) at {} ticks per second",
        world.hulls.len(),
        world.cameras.len(),
        tick_rate
    );

    app.insert_resource(world);
    app.insert_resource(StepDt(1.0 / tick_rate as f32));
    app.insert_resource(TickClock {
        elapsed: 0,
        stop_after: ticks,
    });
    app.insert_resource(HelmInput::default());

    app.add_systems(
        Update,
        (
            helm::drive_helm,
            step_world,
            telemetry::report,
            stop_when_done,
        )
            .chain(),
    );

    app.run();
}

fn load_scene(path: &str) -> Result<SceneDesc, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        info!(
            "Scene file not found: {}. Using the built-in demo scene.",
            path
        );
        return Ok(SceneDesc::demo());
    }

    let contents = std::fs::read_to_string(path)?;
    let scene: SceneDesc = from_str(&contents)?;

    info!("Loaded scene file from disk: {}", path);

    Ok(scene)
}

fn step_world(mut world: ResMut<SailingWorld>, helm: Res<HelmInput>, dt: Res<StepDt>) {
    world.step(&helm.0, dt.0);
}

fn stop_when_done(mut clock: ResMut<TickClock>, mut exit: EventWriter<AppExit>) {
    clock.elapsed += 1;
    if clock.stop_after > 0 && clock.elapsed >= clock.stop_after {
        info!("Reached {} ticks, shutting down", clock.stop_after);
        exit.write(AppExit::Success);
    }
}
