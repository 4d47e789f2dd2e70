use crate::core::types::{Number, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::{orient_normal, Intersection};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;
use crate::surface::sphere::sphere_uv;
use crate::surface::{Surface, SurfaceInstance};
use getset::CopyGetters;
use rand_core::RngCore;
use std::sync::Arc;

/// A builder struct used to create a moving sphere
///
/// The sphere's centre moves linearly from `centre0` (at `time0`) to `centre1`
/// (at `time1`); rays carry a time, so different samples see the sphere at
/// different positions (motion blur)
#[derive(Clone, Debug)]
pub struct MovingSphereBuilder {
    pub centre0: Point3,
    pub centre1: Point3,
    pub time0: Number,
    pub time1: Number,
    pub radius: Number,
    pub material: Arc<MaterialInstance>,
}

/// The actual instance of a moving sphere that can be rendered.
/// Has precomputed values and therefore cannot be mutated
#[derive(Clone, Debug, CopyGetters)]
pub struct MovingSphereSurface {
    #[getset(get_copy = "pub")]
    centre0: Point3,
    #[getset(get_copy = "pub")]
    centre1: Point3,
    time0: Number,
    time1: Number,
    #[getset(get_copy = "pub")]
    radius: Number,
    radius_sqr: Number,
    material: Arc<MaterialInstance>,
}

impl From<MovingSphereBuilder> for MovingSphereSurface {
    fn from(value: MovingSphereBuilder) -> Self {
        Self {
            centre0: value.centre0,
            centre1: value.centre1,
            time0: value.time0,
            time1: value.time1,
            radius: value.radius,
            radius_sqr: value.radius * value.radius,
            material: value.material,
        }
    }
}

impl From<MovingSphereBuilder> for SurfaceInstance {
    fn from(value: MovingSphereBuilder) -> SurfaceInstance { MovingSphereSurface::from(value).into() }
}

impl MovingSphereSurface {
    /// The centre of the sphere at the given moment in time.
    ///
    /// A zero-length keyframe window resolves to the first keyframe's centre,
    /// so no division by zero can occur.
    pub fn centre_at(&self, time: Number) -> Point3 {
        if self.time1 == self.time0 {
            return self.centre0;
        }
        self.centre0 + ((self.centre1 - self.centre0) * ((time - self.time0) / (self.time1 - self.time0)))
    }

    fn aabb_at(&self, time: Number) -> Aabb {
        let centre = self.centre_at(time);
        Aabb::new(
            centre - Vector3::splat(self.radius),
            centre + Vector3::splat(self.radius),
        )
    }
}

impl Surface for MovingSphereSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, _rng: &mut dyn RngCore) -> Option<Intersection> {
        // Same as the static sphere, against the centre at the ray's time
        let centre = self.centre_at(ray.time());
        let ray_rel_pos = ray.pos() - centre;

        let a = ray.dir().length_squared();
        let half_b = Vector3::dot(ray_rel_pos, ray.dir());
        let c = ray_rel_pos.length_squared() - self.radius_sqr;
        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0. {
            return None;
        }

        let sqrt_d = discriminant.sqrt();

        let mut root = (-half_b - sqrt_d) / a;
        if !interval.contains(&root) {
            root = (-half_b + sqrt_d) / a;
            if !interval.contains(&root) {
                return None;
            }
        }

        let dist = root;
        let world_point = ray.at(dist);
        let outward_normal = (world_point - centre) / self.radius;
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

    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb> {
        // The motion is linear, so the boxes at the window's endpoints cover
        // every position in between
        Some(Aabb::surrounding(self.aabb_at(time0), self.aabb_at(time1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::aabb::Aabb;
    use approx::assert_relative_eq;

    fn moving(time0: Number, time1: Number) -> MovingSphereSurface {
        MovingSphereBuilder {
            centre0: Point3::new(0., 0., 0.),
            centre1: Point3::new(2., 0., 0.),
            time0,
            time1,
            radius: 0.5,
            material: Arc::new(MaterialInstance::default()),
        }
        .into()
    }

    #[test]
    fn centre_interpolates() {
        let s = moving(0., 1.);
        assert_relative_eq!(s.centre_at(0.), Point3::new(0., 0., 0.));
        assert_relative_eq!(s.centre_at(0.5), Point3::new(1., 0., 0.));
        assert_relative_eq!(s.centre_at(1.), Point3::new(2., 0., 0.));
    }

    #[test]
    fn zero_length_window_uses_first_keyframe() {
        let s = moving(0.7, 0.7);
        let c = s.centre_at(0.3);
        assert!(!c.is_nan());
        assert_relative_eq!(c, Point3::new(0., 0., 0.));
    }

    #[test]
    fn hit_depends_on_ray_time() {
        let s = moving(0., 1.);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);

        // At t=0 the sphere sits at the origin; at t=1 it has moved +2x away
        let early = Ray::new_with_time(Point3::new(0., 0., -5.), Vector3::Z, 0.);
        let late = Ray::new_with_time(Point3::new(0., 0., -5.), Vector3::Z, 1.);
        assert!(s.intersect(&early, &Interval::from(0.0..), &mut rng).is_some());
        assert!(s.intersect(&late, &Interval::from(0.0..), &mut rng).is_none());
    }

    #[test]
    fn window_box_covers_both_keyframes() {
        let s = moving(0., 1.);
        let whole = s.bounding_box(0., 1.).unwrap();
        assert!(whole.contains_box(&Aabb::new_centred(Point3::new(0., 0., 0.), Vector3::splat(1.))));
        assert!(whole.contains_box(&Aabb::new_centred(Point3::new(2., 0., 0.), Vector3::splat(1.))));

        // A narrower window gives a tighter box
        let narrow = s.bounding_box(0., 0.25).unwrap();
        assert!(whole.contains_box(&narrow));
        assert!(narrow.max().x < whole.max().x);
    }
}
