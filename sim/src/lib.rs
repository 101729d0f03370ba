//! Sailing simulation core: a procedural ocean, hulls that fit themselves to
//! it, helm-driven locomotion, and arcball chase cameras.
//!
//! The host owns the loop; each tick it hands [`world::SailingWorld::step`]
//! an [`input::InputSnapshot`] and a delta time.

pub mod boats;
pub mod constants;
pub mod input;
pub mod ocean;
pub mod scene;
pub mod transform;
pub mod world;

pub use constants::*;
