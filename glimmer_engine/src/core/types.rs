//! Type aliases used across the whole engine.
//!
//! Geometry is done in `f64` ([Number]), colour channels in `f32` ([Channel]).

pub use crate::core::colour::Colour;

/// The scalar type used for all geometric calculations
pub type Number = f64;
/// The scalar type used for colour channels
pub type Channel = f32;

pub type Vector3 = glam::DVec3;
pub type Point3 = glam::DVec3;
pub type Vector2 = glam::DVec2;
pub type Point2 = glam::DVec2;
