use crate::core::types::Colour;
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::rng;
use crate::texture::{Texture, TextureInstance};
use rand_core::RngCore;
use std::sync::Arc;

/// An ideal diffuse material with a textured albedo
#[derive(Clone, Debug)]
pub struct LambertianMaterial {
    pub albedo: Arc<TextureInstance>,
}

impl LambertianMaterial {
    pub fn new(albedo: impl Into<TextureInstance>) -> Self {
        Self {
            albedo: Arc::new(albedo.into()),
        }
    }
}

impl Default for LambertianMaterial {
    fn default() -> Self { Self::new(Colour::HALF_GREY) }
}

impl From<Colour> for LambertianMaterial {
    fn from(value: Colour) -> Self { Self::new(value) }
}

impl Material for LambertianMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        // Bias a uniform sphere sample towards the normal so we get a
        // `cos(theta)` distribution (Lambertian scatter)
        let mut dir = intersection.ray_normal + rng::vector_on_unit_sphere(rng);
        // The sample can cancel the normal out almost exactly; fall back to the normal
        if dir.length_squared() < 1e-16 {
            dir = intersection.ray_normal;
        }

        Some(Scatter {
            attenuation: self.albedo.value(intersection.uv, intersection.pos_w),
            ray: Ray::new_with_time(intersection.pos_w, dir, ray.time()),
        })
    }
}
