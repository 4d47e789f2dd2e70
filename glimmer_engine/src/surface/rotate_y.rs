use crate::core::types::{Number, Point3, Vector3};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::{orient_normal, Intersection};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::surface::{Surface, SurfaceInstance};
use getset::Getters;
use rand_core::RngCore;
use std::sync::Arc;

/// A surface wrapper that renders the inner surface rotated about the y axis.
///
/// As with [crate::surface::translate::TranslateSurface], the ray is
/// re-expressed in the inner surface's frame (rotated by `-angle`), and the
/// hit point and normal are rotated back into world space. Rotation preserves
/// lengths, so parametric distances along the ray are unchanged.
#[derive(Clone, Debug, Getters)]
pub struct RotateYSurface {
    #[getset(get = "pub")]
    inner: Arc<SurfaceInstance>,
    sin_theta: Number,
    cos_theta: Number,
}

impl RotateYSurface {
    /// `degrees` is the counter-clockwise rotation angle, seen from +y
    pub fn new(inner: impl Into<Arc<SurfaceInstance>>, degrees: Number) -> Self {
        let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
        Self {
            inner: inner.into(),
            sin_theta,
            cos_theta,
        }
    }

    fn world_to_local(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    fn local_to_world(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Surface for RotateYSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        let local_ray = Ray::new_with_time(
            self.world_to_local(ray.pos()),
            self.world_to_local(ray.dir()),
            ray.time(),
        );
        let mut hit = self.inner.intersect(&local_ray, interval, rng)?;

        hit.pos_w = self.local_to_world(hit.pos_w);
        hit.normal = self.local_to_world(hit.normal);
        let (ray_normal, front_face) = orient_normal(ray, hit.normal);
        hit.ray_normal = ray_normal;
        hit.front_face = front_face;
        Some(hit)
    }

    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb> {
        // Sweep the inner box's corners through the rotation and wrap them
        let aabb = self.inner.bounding_box(time0, time1)?;
        Some(Aabb::encompass_points(
            aabb.corners().map(|c: Point3| self.local_to_world(c)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialInstance;
    use crate::surface::axis_box::AxisBoxBuilder;
    use crate::surface::sphere::SphereBuilder;
    use approx::assert_relative_eq;

    fn sphere_at(centre: Point3) -> SurfaceInstance {
        SphereBuilder {
            centre,
            radius: 1.,
            material: Arc::new(MaterialInstance::default()),
        }
        .into()
    }

    /// Rotating by `theta` then `-theta` must behave like no rotation at all
    #[test]
    fn opposite_rotations_cancel() {
        let plain = sphere_at(Point3::new(3., 0., 0.));
        let wrapped: SurfaceInstance = RotateYSurface::new(
            SurfaceInstance::from(RotateYSurface::new(sphere_at(Point3::new(3., 0., 0.)), 37.)),
            -37.,
        )
        .into();

        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let rays = [
            Ray::new(Point3::new(3., 0., -5.), Vector3::Z),
            Ray::new(Point3::new(0., 0., 0.), Vector3::new(1., 0.05, 0.)),
            Ray::new(Point3::new(3., 5., 0.), Vector3::NEG_Y),
        ];
        for ray in rays {
            let a = plain.intersect(&ray, &Interval::from(0.0..), &mut rng);
            let b = wrapped.intersect(&ray, &Interval::from(0.0..), &mut rng);
            match (a, b) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_relative_eq!(a.dist, b.dist, epsilon = 1e-9);
                    assert_relative_eq!(a.pos_w, b.pos_w, epsilon = 1e-9);
                    assert_relative_eq!(a.normal, b.normal, epsilon = 1e-9);
                }
                (a, b) => panic!("hit mismatch: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn quarter_turn_moves_surface() {
        // A sphere on +x, rotated 90 degrees about y, ends up on -z
        let rotated = RotateYSurface::new(sphere_at(Point3::new(3., 0., 0.)), 90.);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);

        let towards_new_pos = Ray::new(Point3::ZERO, Vector3::NEG_Z);
        let towards_old_pos = Ray::new(Point3::ZERO, Vector3::X);
        let hit = rotated
            .intersect(&towards_new_pos, &Interval::from(0.0..), &mut rng)
            .expect("sphere should now sit on -z");
        assert_relative_eq!(hit.dist, 2., epsilon = 1e-9);
        assert!(rotated
            .intersect(&towards_old_pos, &Interval::from(0.0..), &mut rng)
            .is_none());
    }

    #[test]
    fn swept_box_covers_rotated_corners() {
        let cube: SurfaceInstance = AxisBoxBuilder {
            corner_1: Point3::new(-1., 0., -1.),
            corner_2: Point3::new(1., 1., 1.),
            material: Arc::new(MaterialInstance::default()),
        }
        .into();
        let rotated = RotateYSurface::new(cube, 45.);
        let b = rotated.bounding_box(0., 1.).unwrap();

        // The xz diagonal is sqrt(2), y is untouched
        let half_diag = Number::sqrt(2.);
        assert_relative_eq!(b.min().x, -half_diag, epsilon = 1e-9);
        assert_relative_eq!(b.max().z, half_diag, epsilon = 1e-9);
        assert_relative_eq!(b.min().y, 0.);
        assert_relative_eq!(b.max().y, 1.);
    }
}
