//! Shared helpers for integration tests

use glimmer_engine::core::types::{Number, Point3, Vector3};
use glimmer_engine::material::MaterialInstance;
use glimmer_engine::shared::ray::Ray;
use glimmer_engine::surface::sphere::SphereBuilder;
use glimmer_engine::surface::SurfaceInstance;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub fn seeded_rng(seed: u64) -> SmallRng { SmallRng::seed_from_u64(seed) }

/// A cloud of small spheres scattered through a cube around the origin,
/// all sharing a default material
pub fn random_spheres(rng: &mut SmallRng, count: usize) -> Vec<Arc<SurfaceInstance>> {
    let material = Arc::new(MaterialInstance::default());
    (0..count)
        .map(|_| {
            let centre = Point3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            Arc::new(SurfaceInstance::from(SphereBuilder {
                centre,
                radius: rng.gen_range(0.1..1.5),
                material: material.clone(),
            }))
        })
        .collect()
}

/// A ray from a random point on a large sphere, aimed somewhere near the origin
pub fn random_inward_ray(rng: &mut SmallRng, dist: Number) -> Ray {
    let pos = Point3::from(glimmer_engine::shared::rng::vector_on_unit_sphere(rng) * dist);
    let target = Point3::new(
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    );
    Ray::new(pos, target - pos)
}

#[allow(dead_code)]
pub fn axis_ray(pos: Point3, dir: Vector3) -> Ray { Ray::new(pos, dir) }
