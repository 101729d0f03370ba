pub const TICKS_PER_SECOND: u64 = 20;

/// Fixed per-tick nudge applied to heading velocity and forward speed while
/// the matching input is held. Deliberately not scaled by delta time.
pub const HELM_ACCEL_RATE: f32 = 0.1;

/// Heading velocity inside this band snaps to exactly zero once the helm
/// is released.
pub const HEADING_SNAP_EPSILON: f32 = 0.01;

pub const MAX_HEADING_VELOCITY: f32 = 1.0;

/// Coasting deceleration. Also the floor below which the drag step no longer
/// fires.
pub const HULL_DRAG: f32 = 0.1;

/// Residual speed left behind by the drag step parks to zero inside this
/// band. Must exceed [`HULL_DRAG`] or a coasting hull never fully stops.
pub const SPEED_SNAP_EPSILON: f32 = 0.2;

/// Raw stick deflection below this magnitude reads as zero.
pub const STICK_DEAD_ZONE: f32 = 0.15;

/// Orbit speed multiplier for mouse-driven camera look.
pub const CAMERA_LOOK_SPEED: f32 = 5.0;

/// Sample points taken across a hull footprint per buoyancy solve.
pub const HULL_SAMPLE_COUNT: usize = 6;
