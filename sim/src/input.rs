//! Per-tick input snapshots consumed by the simulation.
//!
//! The host gathers whatever raw device state it has into an [`InputSnapshot`]
//! once per tick. Stick axes arrive raw; dead-zone filtering happens here, in
//! the consumer, so every controller applies the same threshold.

use bevy::math::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardSnapshot {
    /// W held.
    pub forward: bool,
    /// A held.
    pub turn_left: bool,
    /// D held.
    pub turn_right: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    /// Relative look motion accumulated since the previous tick.
    pub axis: Vec2,
    /// Scroll wheel motion; `y` is the vertical wheel.
    pub wheel: Vec2,
}

impl MouseSnapshot {
    #[inline]
    pub fn any_button(&self) -> bool {
        self.left || self.right || self.middle
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    /// Analog trigger, expected in [0, 1] from well-behaved drivers.
    pub left_trigger: f32,
}

/// Immutable device state for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub keyboard: KeyboardSnapshot,
    pub mouse: MouseSnapshot,
    pub gamepads: Vec<GamepadSnapshot>,
}

impl InputSnapshot {
    #[inline]
    pub fn first_gamepad(&self) -> Option<&GamepadSnapshot> {
        self.gamepads.first()
    }
}

/// Zero out stick deflection below the dead-zone threshold. Deflection past
/// the threshold passes through unscaled.
#[inline]
pub fn dead_zoned(value: f32, dead_zone: f32) -> f32 {
    if value.abs() < dead_zone {
        0.0
    } else {
        value
    }
}
