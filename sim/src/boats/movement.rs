//! Boat locomotion: heading, speed, and hull pose blending.
//!
//! The solved surface fit goes onto the hull node, steering and thrust go
//! onto the parent boat node. Acceleration curves are fixed per-tick nudges
//! rather than dt-scaled rates; only the applied yaw and translation scale
//! with dt. The pose blend factor is the raw clamped dt, so smoothing speeds
//! up at low tick rates. Both quirks are load-bearing for the handling feel
//! and stay as tuned.

use crate::boats::buoyancy::SurfaceFit;
use crate::boats::Hull;
use crate::constants::{
    HEADING_SNAP_EPSILON, HELM_ACCEL_RATE, HULL_DRAG, MAX_HEADING_VELOCITY, SPEED_SNAP_EPSILON,
    STICK_DEAD_ZONE,
};
use crate::input::{dead_zoned, InputSnapshot};
use crate::transform::TransformArena;
use bevy::prelude::*;

/// Steering axis in [-1, 1]. Positive turns the bow to port.
fn rotation_axis(input: &InputSnapshot) -> f32 {
    if input.keyboard.turn_left {
        1.0
    } else if input.keyboard.turn_right {
        -1.0
    } else if let Some(pad) = input.first_gamepad() {
        dead_zoned(pad.left_stick.x, STICK_DEAD_ZONE).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Thrust axis in [0, 1] from the forward key, else the trigger.
fn movement_axis(input: &InputSnapshot) -> f32 {
    if input.keyboard.forward {
        1.0
    } else if let Some(pad) = input.first_gamepad() {
        pad.left_trigger.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn integrate_heading(mut velocity: f32, axis: f32) -> f32 {
    if axis != 0.0 {
        velocity += HELM_ACCEL_RATE * axis;
    } else if velocity != 0.0 {
        velocity -= HELM_ACCEL_RATE * velocity.signum();
        if velocity.abs() < HEADING_SNAP_EPSILON {
            velocity = 0.0;
        }
    }
    velocity.clamp(-MAX_HEADING_VELOCITY, MAX_HEADING_VELOCITY)
}

fn integrate_speed(mut speed: f32, axis: f32) -> f32 {
    if axis == 0.0 {
        // Drag writes the residual, it does not subtract. A hull coasting
        // above the drag floor lands on a small reversed remainder which the
        // snap band then parks at zero.
        if speed > HULL_DRAG && speed - HULL_DRAG >= 0.0 {
            speed = HULL_DRAG * -speed.signum();
        }
        if speed.abs() < SPEED_SNAP_EPSILON {
            speed = 0.0;
        }
    } else {
        speed += HELM_ACCEL_RATE * axis;
    }
    speed
}

/// Advance one hull by one tick.
///
/// Blends the surface fit into the hull node, integrates helm and thrust
/// onto the parent boat node, then drags the hull node along under the boat.
/// Marks both nodes dirty.
pub fn tick_boat_locomotion(
    hull: &mut Hull,
    fit: &SurfaceFit,
    arena: &mut TransformArena,
    input: &InputSnapshot,
    dt: f32,
) {
    let boat_id = arena
        .parent_of(hull.transform)
        .expect("hull transform must be parented to a boat");
    let blend = dt.clamp(0.0, 1.0);

    {
        let hull_node = arena.get_mut(hull.transform);
        hull_node.translation.y += (fit.target_height - hull_node.translation.y) * blend;
        hull_node.rotation = hull_node.rotation.slerp(fit.target_orientation, blend);
    }

    hull.heading_velocity = integrate_heading(hull.heading_velocity, rotation_axis(input));
    hull.speed = integrate_speed(hull.speed, movement_axis(input));

    let boat_pos = {
        let boat = arena.get_mut(boat_id);
        boat.rotate_local_y(hull.heading_velocity * dt);

        let forward = boat.forward();
        let heading = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        let mut velocity = heading * hull.speed;
        if velocity.length_squared() > hull.max_speed * hull.max_speed {
            hull.speed = hull.max_speed;
            velocity = heading * hull.max_speed;
        }

        boat.translation += velocity * dt;
        boat.translation
    };

    // The hull node shares the boat's XZ and keeps its own blended height.
    let hull_node = arena.get_mut(hull.transform);
    hull_node.translation.x = boat_pos.x;
    hull_node.translation.z = boat_pos.z;

    arena.mark_dirty(boat_id);
    arena.mark_dirty(hull.transform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boats::buoyancy::fit_hull_to_surface;
    use crate::input::{GamepadSnapshot, KeyboardSnapshot};
    use crate::ocean::{GerstnerOcean, SeaState};

    fn still_sea() -> GerstnerOcean {
        GerstnerOcean::new(SeaState::Still.to_config(0.0))
    }

    /// Boat node plus hull node, both at the given position.
    fn rig(arena: &mut TransformArena, position: Vec3) -> Hull {
        let boat = arena.insert(Transform::from_translation(position), None);
        let hull_id = arena.insert(Transform::from_translation(position), Some(boat));
        Hull::new(hull_id, 2.0, 4.0, 25.0)
    }

    fn forward_key() -> InputSnapshot {
        InputSnapshot {
            keyboard: KeyboardSnapshot {
                forward: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn tick(hull: &mut Hull, arena: &mut TransformArena, input: &InputSnapshot, dt: f32) {
        let ocean = still_sea();
        let center = arena.get(hull.transform).translation;
        let boat_rotation = arena.parent_transform(hull.transform).unwrap().rotation;
        let fit = fit_hull_to_surface(center, boat_rotation, hull.half_extents(), &ocean);
        tick_boat_locomotion(hull, &fit, arena, input, dt);
    }

    #[test]
    fn held_helm_ramps_heading_velocity() {
        let mut velocity = 0.0;
        for _ in 0..5 {
            velocity = integrate_heading(velocity, 1.0);
        }
        assert!((velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn released_helm_decays_and_snaps_to_zero() {
        let mut velocity = 0.5;
        for _ in 0..4 {
            velocity = integrate_heading(velocity, 0.0);
            assert!(velocity > 0.0);
        }
        velocity = integrate_heading(velocity, 0.0);
        assert_eq!(velocity, 0.0);
        assert_eq!(integrate_heading(velocity, 0.0), 0.0);
    }

    #[test]
    fn heading_velocity_is_clamped() {
        assert_eq!(integrate_heading(0.95, 1.0), 1.0);
        assert_eq!(integrate_heading(-0.95, -1.0), -1.0);
    }

    #[test]
    fn drag_parks_a_coasting_hull() {
        assert_eq!(integrate_speed(5.0, 0.0), 0.0);
        assert_eq!(integrate_speed(0.05, 0.0), 0.0);
        assert_eq!(integrate_speed(-0.1, 0.0), 0.0);
        // At the drag floor the write does not fire; the snap band does.
        assert_eq!(integrate_speed(0.1, 0.0), 0.0);
    }

    #[test]
    fn keyboard_steering_beats_the_stick() {
        let mut input = InputSnapshot::default();
        input.gamepads.push(GamepadSnapshot {
            left_stick: Vec2::new(-0.8, 0.0),
            ..Default::default()
        });
        assert_eq!(rotation_axis(&input), -0.8);

        input.keyboard.turn_left = true;
        assert_eq!(rotation_axis(&input), 1.0);
        input.keyboard.turn_left = false;
        input.keyboard.turn_right = true;
        assert_eq!(rotation_axis(&input), -1.0);
    }

    #[test]
    fn stick_dead_zone_applies_to_steering_only() {
        let mut input = InputSnapshot::default();
        input.gamepads.push(GamepadSnapshot {
            left_stick: Vec2::new(0.1, 0.0),
            left_trigger: 0.1,
            ..Default::default()
        });
        assert_eq!(rotation_axis(&input), 0.0);
        // Triggers pass through without a dead zone.
        assert_eq!(movement_axis(&input), 0.1);
    }

    #[test]
    fn forward_key_wins_over_trigger() {
        let mut input = forward_key();
        input.gamepads.push(GamepadSnapshot {
            left_trigger: 0.3,
            ..Default::default()
        });
        assert_eq!(movement_axis(&input), 1.0);
    }

    #[test]
    fn speed_clamps_at_max_and_stays_there() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::ZERO);
        let input = forward_key();

        for _ in 0..300 {
            tick(&mut hull, &mut arena, &input, 0.05);
        }
        assert_eq!(hull.speed, 25.0);

        tick(&mut hull, &mut arena, &input, 0.05);
        assert_eq!(hull.speed, 25.0);

        // Identity heading faces -Z; the boat went that way and nowhere else.
        let boat = arena.parent_transform(hull.transform).unwrap();
        assert!(boat.translation.z < 0.0);
        assert!(boat.translation.x.abs() < 1e-4);
        assert_eq!(boat.translation.y, 0.0);
    }

    #[test]
    fn full_blend_lands_on_the_fit_in_one_tick() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::new(0.0, 5.0, 0.0));

        tick(&mut hull, &mut arena, &InputSnapshot::default(), 1.0);

        let hull_node = arena.get(hull.transform);
        assert_eq!(hull_node.translation.y, 0.0);
        let up = hull_node.rotation * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn partial_blend_moves_toward_the_fit() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::new(0.0, 4.0, 0.0));

        tick(&mut hull, &mut arena, &InputSnapshot::default(), 0.25);

        let y = arena.get(hull.transform).translation.y;
        assert!((y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn helm_yaws_the_boat_about_world_up() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::ZERO);
        let input = InputSnapshot {
            keyboard: KeyboardSnapshot {
                turn_left: true,
                ..Default::default()
            },
            ..Default::default()
        };

        tick(&mut hull, &mut arena, &input, 0.5);

        assert!((hull.heading_velocity - 0.1).abs() < 1e-6);
        let boat = arena.parent_transform(hull.transform).unwrap();
        let expected = Quat::from_rotation_y(hull.heading_velocity * 0.5);
        assert!(boat.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn velocity_is_projected_onto_the_water_plane() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::ZERO);
        // Pitch the boat nose-down; thrust must still move it horizontally.
        arena
            .parent_transform_mut(hull.transform)
            .unwrap()
            .rotation = Quat::from_rotation_y(0.6) * Quat::from_rotation_x(0.4);
        hull.speed = 10.0;

        let dt = 0.1;
        tick(&mut hull, &mut arena, &forward_key(), dt);

        let boat = arena.parent_transform(hull.transform).unwrap();
        assert_eq!(boat.translation.y, 0.0);
        let travelled = Vec2::new(boat.translation.x, boat.translation.z).length();
        assert!((travelled - hull.speed * dt).abs() < 1e-4);
    }

    #[test]
    fn tick_marks_both_nodes_dirty() {
        let mut arena = TransformArena::new();
        let mut hull = rig(&mut arena, Vec3::ZERO);

        tick(&mut hull, &mut arena, &InputSnapshot::default(), 0.05);

        let boat_id = arena.parent_of(hull.transform).unwrap();
        assert!(arena.is_dirty(hull.transform));
        assert!(arena.is_dirty(boat_id));
    }
}
