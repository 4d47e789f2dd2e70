use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::{orient_normal, Intersection};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;
use crate::surface::{Surface, SurfaceInstance};
use getset::{CopyGetters, Getters};
use rand_core::RngCore;
use std::sync::Arc;

/// A builder struct used to create a sphere
///
/// Call [Into::into] or [SphereSurface::from] to create the actual sphere surface
#[derive(Clone, Debug)]
pub struct SphereBuilder {
    pub centre: Point3,
    /// May be negative, in which case the surface normals point *inwards*;
    /// useful for hollow glass spheres
    pub radius: Number,
    pub material: Arc<MaterialInstance>,
}

/// The actual instance of a sphere that can be rendered.
/// Has precomputed values and therefore cannot be mutated
#[derive(Clone, Debug, CopyGetters, Getters)]
pub struct SphereSurface {
    #[getset(get_copy = "pub")]
    centre: Point3,
    #[getset(get_copy = "pub")]
    radius: Number,
    radius_sqr: Number,
    aabb: Aabb,
    #[getset(get = "pub")]
    material: Arc<MaterialInstance>,
}

/// Builds the sphere
impl From<SphereBuilder> for SphereSurface {
    fn from(value: SphereBuilder) -> Self {
        Self {
            centre: value.centre,
            radius: value.radius,
            radius_sqr: value.radius * value.radius,
            // Cube centred around self; `Aabb::new` sorts the corners, so a
            // negative radius still gives a valid box
            aabb: Aabb::new(
                value.centre - Vector3::splat(value.radius),
                value.centre + Vector3::splat(value.radius),
            ),
            material: value.material,
        }
    }
}

/// Converts the sphere builder into a [SurfaceInstance]
impl From<SphereBuilder> for SurfaceInstance {
    fn from(value: SphereBuilder) -> SurfaceInstance { SphereSurface::from(value).into() }
}

impl Surface for SphereSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, _rng: &mut dyn RngCore) -> Option<Intersection> {
        // Do some ray-sphere intersection math to find if the ray intersects
        let ray_rel_pos = ray.pos() - self.centre;

        // Quadratic formula variables
        let a = ray.dir().length_squared();
        let half_b = Vector3::dot(ray_rel_pos, ray.dir());
        let c = ray_rel_pos.length_squared() - self.radius_sqr;
        let discriminant = (half_b * half_b) - (a * c);

        // No solutions to where ray intersects with sphere because of negative square root
        if discriminant < 0. {
            return None;
        }

        let sqrt_d = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range.
        // Try the less-positive root first (as it's closer), and only return
        // None if neither is valid
        let mut root = (-half_b - sqrt_d) / a;
        if !interval.contains(&root) {
            root = (-half_b + sqrt_d) / a;
            if !interval.contains(&root) {
                return None;
            }
        }

        let dist = root;
        let world_point = ray.at(dist);
        // Dividing by the signed radius flips the normal inwards when the
        // radius is negative
        let outward_normal = (world_point - self.centre) / self.radius;
        let (ray_normal, front_face) = orient_normal(ray, outward_normal);

        let intersection = Intersection {
            pos_w: world_point,
            dist,
            normal: outward_normal,
            ray_normal,
            front_face,
            uv: sphere_uv(outward_normal),
            material: self.material.clone(),
        };
        validate::intersection(ray, &intersection, interval);
        Some(intersection)
    }

    fn bounding_box(&self, _time0: Number, _time1: Number) -> Option<Aabb> { Some(self.aabb) }
}

/// Converts a point on a sphere (centred at [Point3::ZERO], radius `1`), into a UV coordinate
pub fn sphere_uv(p: Vector3) -> Point2 {
    let theta = Number::acos(-p.y);
    let phi = Number::atan2(-p.z, p.x) + std::f64::consts::PI;

    let u = phi / (2. * std::f64::consts::PI);
    let v = theta / std::f64::consts::PI;
    return Point2::new(u, v);
}
