//! Periodic state reporting. Doubles as the downstream consumer of the
//! arena's dirty flags; a renderer would drain them the same way.

use crate::init::StepDt;
use bevy::prelude::*;
use sim::ocean::OceanSurface;
use sim::world::SailingWorld;

pub fn report(mut world: ResMut<SailingWorld>, dt: Res<StepDt>, mut since_info: Local<f32>) {
    let dirty = world.arena.take_dirty();
    debug!("{} pose(s) updated this tick", dirty.len());

    *since_info += dt.0;
    if *since_info < 1.0 {
        return;
    }
    *since_info = 0.0;

    for (index, hull) in world.hulls.iter().enumerate() {
        let node = world.arena.get(hull.transform);
        let wave = world
            .ocean
            .height_at(Vec2::new(node.translation.x, node.translation.z));
        info!(
            "boat {}: pos ({:.1}, {:.1}, {:.1}) speed {:.1} helm {:.2} wave {:.2}",
            index,
            node.translation.x,
            node.translation.y,
            node.translation.z,
            hull.speed,
            hull.heading_velocity,
            wave
        );
    }
    for (index, camera) in world.cameras.iter().enumerate() {
        info!(
            "camera {}: dist {:.1} in [{}, {}]",
            index, camera.target_dist, camera.min_dist, camera.max_dist
        );
    }
}
