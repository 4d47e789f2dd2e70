use crate::core::types::Colour;
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::rng;
use crate::texture::{Texture, TextureInstance};
use rand_core::RngCore;
use std::sync::Arc;

/// Scatters uniformly in all directions; the phase function of a
/// constant-density volume
#[derive(Clone, Debug)]
pub struct IsotropicMaterial {
    pub albedo: Arc<TextureInstance>,
}

impl IsotropicMaterial {
    pub fn new(albedo: impl Into<TextureInstance>) -> Self {
        Self {
            albedo: Arc::new(albedo.into()),
        }
    }
}

impl From<Colour> for IsotropicMaterial {
    fn from(value: Colour) -> Self { Self::new(value) }
}

impl Material for IsotropicMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        Some(Scatter {
            attenuation: self.albedo.value(intersection.uv, intersection.pos_w),
            ray: Ray::new_with_time(intersection.pos_w, rng::vector_on_unit_sphere(rng), ray.time()),
        })
    }
}
