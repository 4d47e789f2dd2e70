//! # Module [crate::surface]
//!
//! This module contains the submodules for the different surface types
//! (see [Surface] and [SurfaceInstance]).
//!
//! # DEV: Code Structure
//!
//! Surfaces are placed into named submodules, and those submodules are publicly
//! exported. Where a surface has precomputed state, it is split into a "Builder"
//! struct with the publicly accessible properties, and a built struct with
//! cached, immutable/private fields (see [sphere] for an example). Each built
//! struct gets an entry in [SurfaceInstance] for static dispatch.

use crate::core::types::Number;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;
use rand_core::RngCore;
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{
    axis_box::AxisBoxSurface, bvh::BvhSurface, homogeneous_volume::HomogeneousVolumeSurface, list::SurfaceList,
    moving_sphere::MovingSphereSurface, rect::RectSurface, rotate_y::RotateYSurface, sphere::SphereSurface,
    translate::TranslateSurface,
};

pub mod axis_box;
pub mod bvh;
pub mod homogeneous_volume;
pub mod list;
pub mod moving_sphere;
pub mod rect;
pub mod rotate_y;
pub mod sphere;
pub mod translate;

#[enum_dispatch]
pub trait Surface: ComponentRequirements {
    /// Attempts to perform an intersection between the given ray and the target surface
    ///
    /// # Return Value
    /// This should return the *closest* intersection within the given distance
    /// interval, else [None]
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection>;

    /// Gets the bounding box enclosing this surface over the time window
    /// `[time0, time1]`. Returns [None] if the surface can't be bounded;
    /// aggregates must propagate that conservatively.
    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb>;
}

/// An optimised implementation of [Surface].
///
/// See [crate::material::MaterialInstance] for an explanation of the
/// [macro@enum_dispatch] macro usage
#[enum_dispatch(Surface)]
#[derive(Clone, Debug)]
pub enum SurfaceInstance {
    SphereSurface,
    MovingSphereSurface,
    RectSurface,
    AxisBoxSurface,
    HomogeneousVolumeSurface,
    TranslateSurface,
    RotateYSurface,
    SurfaceList,
    BvhSurface,
}
