use crate::core::types::{Number, Vector3};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::{orient_normal, Intersection};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::surface::{Surface, SurfaceInstance};
use getset::{CopyGetters, Getters};
use rand_core::RngCore;
use std::sync::Arc;

/// A surface wrapper that renders the inner surface displaced by `offset`.
///
/// Instead of moving the surface, the ray is moved the opposite way: the
/// intersection maths happens in the inner surface's own frame, and the hit
/// point is mapped back afterwards. Distances along the ray are unchanged.
#[derive(Clone, Debug, CopyGetters, Getters)]
pub struct TranslateSurface {
    #[getset(get = "pub")]
    inner: Arc<SurfaceInstance>,
    #[getset(get_copy = "pub")]
    offset: Vector3,
}

impl TranslateSurface {
    pub fn new(inner: impl Into<Arc<SurfaceInstance>>, offset: Vector3) -> Self {
        Self {
            inner: inner.into(),
            offset,
        }
    }
}

impl Surface for TranslateSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        let local_ray = Ray::new_with_time(ray.pos() - self.offset, ray.dir(), ray.time());
        let mut hit = self.inner.intersect(&local_ray, interval, rng)?;

        hit.pos_w += self.offset;
        // Re-orient against the original ray; the geometric normal is unaffected
        let (ray_normal, front_face) = orient_normal(ray, hit.normal);
        hit.ray_normal = ray_normal;
        hit.front_face = front_face;
        Some(hit)
    }

    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb> {
        self.inner
            .bounding_box(time0, time1)
            .map(|aabb| Aabb::new(aabb.min() + self.offset, aabb.max() + self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point3;
    use crate::material::MaterialInstance;
    use crate::surface::sphere::SphereBuilder;
    use approx::assert_relative_eq;

    fn unit_sphere_at(centre: Point3) -> SurfaceInstance {
        SphereBuilder {
            centre,
            radius: 1.,
            material: Arc::new(MaterialInstance::default()),
        }
        .into()
    }

    /// A translated sphere must be indistinguishable from a sphere built at
    /// the translated position
    #[test]
    fn equivalent_to_pretranslated_surface() {
        let offset = Vector3::new(3., -2., 7.);
        let wrapped = TranslateSurface::new(unit_sphere_at(Point3::ZERO), offset);
        let direct = unit_sphere_at(Point3::ZERO + offset);

        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let rays = [
            Ray::new(Point3::new(3., -2., -5.), Vector3::Z),
            Ray::new(Point3::new(3.5, -2., -5.), Vector3::new(0., 0.05, 1.)),
            Ray::new(Point3::new(0., 0., -5.), Vector3::Z),
        ];
        for ray in rays {
            let a = wrapped.intersect(&ray, &Interval::from(0.0..), &mut rng);
            let b = direct.intersect(&ray, &Interval::from(0.0..), &mut rng);
            match (a, b) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_relative_eq!(a.dist, b.dist);
                    assert_relative_eq!(a.pos_w, b.pos_w);
                    assert_relative_eq!(a.normal, b.normal);
                    assert_eq!(a.front_face, b.front_face);
                }
                (a, b) => panic!("hit mismatch: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn box_is_offset() {
        let wrapped = TranslateSurface::new(unit_sphere_at(Point3::ZERO), Vector3::new(10., 0., 0.));
        let b = wrapped.bounding_box(0., 1.).unwrap();
        assert_relative_eq!(b.min(), Point3::new(9., -1., -1.));
        assert_relative_eq!(b.max(), Point3::new(11., 1., 1.));
    }
}
