use crate::core::types::{Number, Vector3};
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::{math, rng};
use crate::texture::{Texture, TextureInstance};
use rand_core::RngCore;
use std::sync::Arc;

/// A reflective material with optional fuzzing of the reflected direction
#[derive(Clone, Debug)]
pub struct MetalMaterial {
    pub albedo: Arc<TextureInstance>,
    pub fuzz: Number,
}

impl MetalMaterial {
    pub fn new(albedo: impl Into<TextureInstance>, fuzz: Number) -> Self {
        Self {
            albedo: Arc::new(albedo.into()),
            // Fuzz past 1 would let the fuzz sphere swallow the reflection entirely
            fuzz: fuzz.clamp(0., 1.),
        }
    }
}

impl Material for MetalMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = math::reflect(ray.dir().normalize(), intersection.ray_normal);
        let dir = reflected + self.fuzz * rng::vector_in_unit_sphere(rng);

        // Fuzzing can push the bounce through the surface; those rays are absorbed
        if Vector3::dot(dir, intersection.ray_normal) <= 0. {
            return None;
        }

        Some(Scatter {
            attenuation: self.albedo.value(intersection.uv, intersection.pos_w),
            ray: Ray::new_with_time(intersection.pos_w, dir, ray.time()),
        })
    }
}
