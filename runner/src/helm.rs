//! Scripted helm for headless runs.
//!
//! There is no input device in a headless run, so the runner plays a small
//! sail plan on a loop: throttle up, a long turn, an orbiting mouse drag, a
//! gamepad cruise, then coasting down with the camera zooming out.

use crate::init::TickClock;
use bevy::prelude::*;
use sim::input::{GamepadSnapshot, InputSnapshot};

/// Input snapshot the world steps with this tick.
#[derive(Resource, Debug, Default)]
pub struct HelmInput(pub InputSnapshot);

/// One full pass through the sail plan, in ticks.
const SCRIPT_PERIOD: u64 = 400;

pub fn drive_helm(mut helm: ResMut<HelmInput>, clock: Res<TickClock>) {
    let phase = clock.elapsed % SCRIPT_PERIOD;

    let mut input = InputSnapshot::default();
    match phase {
        0..=79 => {
            input.keyboard.forward = true;
        }
        80..=159 => {
            input.keyboard.forward = true;
            input.keyboard.turn_left = true;
        }
        160..=239 => {
            input.keyboard.forward = true;
            input.mouse.left = true;
            input.mouse.axis = Vec2::new(
                0.6 + (rand::random::<f32>() - 0.5) * 0.4,
                (rand::random::<f32>() - 0.5) * 0.2,
            );
        }
        240..=319 => {
            // Stick x wanders in and out of the dead zone on purpose.
            input.gamepads.push(GamepadSnapshot {
                left_stick: Vec2::new(rand::random::<f32>() * 0.6 - 0.4, 0.0),
                right_stick: Vec2::new(-0.3, 0.05),
                left_trigger: 0.6,
            });
        }
        _ => {
            if phase % 20 == 0 {
                input.mouse.wheel = Vec2::new(0.0, -1.0);
            }
        }
    }

    helm.0 = input;
}
