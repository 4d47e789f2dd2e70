//noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{
    dielectric::DielectricMaterial, isotropic::IsotropicMaterial, lambertian::LambertianMaterial,
    light::DiffuseLightMaterial, metal::MetalMaterial,
};
use crate::core::types::{Colour, Point2, Point3};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;
use rand_core::RngCore;

pub mod dielectric;
pub mod isotropic;
pub mod lambertian;
pub mod light;
pub mod metal;

/// The outcome of a successful scatter: the bounced ray, and how much each
/// colour channel survives the bounce
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scatter {
    pub attenuation: Colour,
    pub ray: Ray,
}

/// The trait that defines what properties a material has
#[enum_dispatch]
pub trait Material: ComponentRequirements {
    /// Scatters the input ray according to the material's properties.
    ///
    /// Returns [None] if the ray was absorbed instead of scattered.
    /// The bounced ray must carry the incoming ray's time, so motion blur
    /// stays consistent along a bounce chain.
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter>;

    /// The light the material emits at the given surface point.
    ///
    /// [Colour::BLACK] for everything except emissive materials.
    fn emitted(&self, _uv: Point2, _pos: Point3) -> Colour { Colour::BLACK }
}

/// An optimised implementation of [Material].
///
/// By using an enum, we can replace dynamic-dispatch with static dispatch.
#[enum_dispatch(Material)]
#[derive(Clone, Debug)]
pub enum MaterialInstance {
    LambertianMaterial,
    MetalMaterial,
    DielectricMaterial,
    DiffuseLightMaterial,
    IsotropicMaterial,
}

impl Default for MaterialInstance {
    fn default() -> Self { LambertianMaterial::default().into() }
}
