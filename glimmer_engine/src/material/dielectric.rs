use crate::core::types::{Colour, Number, Vector3};
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::math;
use crate::shared::ray::Ray;
use rand::{Rng, RngCore};

/// A clear refractive material (glass, water, ...)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DielectricMaterial {
    pub refractive_index: Number,
}

impl Material for DielectricMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let index_ratio = if intersection.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_dir = ray.dir().normalize();
        let cos_theta = Number::min(Vector3::dot(-unit_dir, intersection.ray_normal), 1.0);
        let sin_theta = Number::sqrt(1.0 - cos_theta * cos_theta);

        let total_internal_reflection = index_ratio * sin_theta > 1.0;
        let schlick_approx_reflect = math::reflectance(cos_theta, index_ratio) > rng.gen::<Number>();

        let dir = if total_internal_reflection || schlick_approx_reflect {
            // Cannot refract, have to reflect
            math::reflect(unit_dir, intersection.ray_normal)
        } else {
            math::refract(unit_dir, intersection.ray_normal, index_ratio)
        };

        Some(Scatter {
            attenuation: Colour::WHITE,
            ray: Ray::new_with_time(intersection.pos_w, dir, ray.time()),
        })
    }
}
