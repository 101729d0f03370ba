//! The simulated world: one ocean, boats, and their cameras.
//!
//! Spawning is the only place hierarchy gets built, so the per-tick code can
//! lean on every hull having a parent boat and every camera a parent hull.

use crate::boats::{
    fit_hull_to_surface, tick_boat_camera, tick_boat_locomotion, BoatCamera, Hull,
};
use crate::input::InputSnapshot;
use crate::ocean::GerstnerOcean;
use crate::transform::{TransformArena, TransformId};
use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct SailingWorld {
    pub arena: TransformArena,
    pub hulls: Vec<Hull>,
    pub cameras: Vec<BoatCamera>,
    pub ocean: GerstnerOcean,
}

impl SailingWorld {
    pub fn new(ocean: GerstnerOcean) -> Self {
        Self {
            arena: TransformArena::new(),
            hulls: Vec::new(),
            cameras: Vec::new(),
            ocean,
        }
    }

    /// Spawn a boat node with a hull node under it. Returns the hull's id,
    /// which is what cameras attach to.
    pub fn spawn_boat(
        &mut self,
        position: Vec3,
        yaw: f32,
        width: f32,
        depth: f32,
        max_speed: f32,
    ) -> TransformId {
        assert!(
            width > 0.0 && depth > 0.0,
            "hull footprint must have positive extents"
        );
        assert!(max_speed > 0.0, "max_speed must be positive");

        let pose = Transform::from_translation(position)
            .with_rotation(Quat::from_rotation_y(yaw));
        let boat = self.arena.insert(pose, None);
        let hull = self.arena.insert(pose, Some(boat));
        self.hulls.push(Hull::new(hull, width, depth, max_speed));
        hull
    }

    /// Attach an arcball camera to a hull, offset from it in world space.
    /// Orbit distance starts uninitialized and bootstraps on the first tick.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_boat_camera(
        &mut self,
        hull: TransformId,
        offset: Vec3,
        min_dist: f32,
        max_dist: f32,
        move_speed: f32,
        zoom_speed: f32,
        pitch_limit: f32,
    ) -> TransformId {
        assert!(self.arena.contains(hull), "camera hull does not exist");
        assert!(
            min_dist > 0.0 && min_dist <= max_dist,
            "camera distance bounds must satisfy 0 < min_dist <= max_dist"
        );

        let position = self.arena.get(hull).translation + offset;
        let camera = self
            .arena
            .insert(Transform::from_translation(position), Some(hull));
        self.cameras.push(BoatCamera::new(
            camera,
            min_dist,
            max_dist,
            move_speed,
            zoom_speed,
            pitch_limit,
        ));
        camera
    }

    /// Advance the whole world by one tick.
    ///
    /// Ocean time moves first so every hull this tick samples the same sea,
    /// then each hull is fit and driven, then each camera follows its hull.
    pub fn step(&mut self, input: &InputSnapshot, dt: f32) {
        let Self {
            arena,
            hulls,
            cameras,
            ocean,
        } = self;

        ocean.advance(dt);

        for hull in hulls.iter_mut() {
            let center = arena.get(hull.transform).translation;
            let boat_rotation = arena
                .parent_transform(hull.transform)
                .expect("hull transform must be parented to a boat")
                .rotation;
            let fit = fit_hull_to_surface(center, boat_rotation, hull.half_extents(), &*ocean);
            tick_boat_locomotion(hull, &fit, arena, input, dt);
        }

        for camera in cameras.iter_mut() {
            tick_boat_camera(camera, arena, input, dt);
        }
    }
}
