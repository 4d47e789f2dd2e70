use crate::core::types::Number;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::surface::{Surface, SurfaceInstance};
use rand_core::RngCore;
use std::sync::Arc;

/// A plain, unaccelerated collection of surfaces.
///
/// Intersection is a linear scan; for large scenes prefer wrapping the
/// surfaces in a [crate::surface::bvh::BvhSurface]. This list is also the
/// reference the BVH is checked against in tests.
#[derive(Clone, Debug, Default)]
pub struct SurfaceList {
    surfaces: Vec<Arc<SurfaceInstance>>,
}

impl SurfaceList {
    pub fn new(surfaces: Vec<Arc<SurfaceInstance>>) -> Self { Self { surfaces } }

    pub fn push(&mut self, surface: impl Into<SurfaceInstance>) { self.surfaces.push(Arc::new(surface.into())); }

    /// Adds an already-shared surface; the same [Arc] may be held by other
    /// aggregates at the same time
    pub fn push_shared(&mut self, surface: Arc<SurfaceInstance>) { self.surfaces.push(surface); }

    pub fn surfaces(&self) -> &[Arc<SurfaceInstance>] { &self.surfaces }

    pub fn len(&self) -> usize { self.surfaces.len() }
    pub fn is_empty(&self) -> bool { self.surfaces.is_empty() }
}

impl FromIterator<Arc<SurfaceInstance>> for SurfaceList {
    fn from_iter<T: IntoIterator<Item = Arc<SurfaceInstance>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Surface for SurfaceList {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        // Shrink the search window to the closest hit so far, so later members
        // can only beat it, never tie past it
        let mut window = *interval;
        let mut closest: Option<Intersection> = None;
        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray, &window, rng) {
                window = window.with_some_end(hit.dist);
                closest = Some(hit);
            }
        }
        closest
    }

    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb> {
        // An empty list has no box, and a single unbounded member poisons the whole union
        let mut whole: Option<Aabb> = None;
        for surface in &self.surfaces {
            let aabb = surface.bounding_box(time0, time1)?;
            whole = Some(match whole {
                Some(w) => Aabb::surrounding(&w, &aabb),
                None => aabb,
            });
        }
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Point3, Vector3};
    use crate::material::MaterialInstance;
    use crate::surface::sphere::SphereBuilder;
    use approx::assert_relative_eq;

    fn sphere_at(z: Number) -> Arc<SurfaceInstance> {
        Arc::new(
            SphereBuilder {
                centre: Point3::new(0., 0., z),
                radius: 1.,
                material: Arc::new(MaterialInstance::default()),
            }
            .into(),
        )
    }

    #[test]
    fn returns_closest_hit_regardless_of_order() {
        let near = sphere_at(0.);
        let far = sphere_at(10.);
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::Z);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);

        for list in [
            SurfaceList::new(vec![near.clone(), far.clone()]),
            SurfaceList::new(vec![far, near]),
        ] {
            let hit = list.intersect(&ray, &Interval::from(0.0..), &mut rng).unwrap();
            assert_relative_eq!(hit.dist, 4.);
        }
    }

    #[test]
    fn empty_list() {
        let list = SurfaceList::default();
        let ray = Ray::new(Point3::ZERO, Vector3::Z);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        assert!(list.intersect(&ray, &Interval::FULL, &mut rng).is_none());
        assert!(list.bounding_box(0., 1.).is_none());
    }

    #[test]
    fn box_is_union_of_members() {
        let list = SurfaceList::new(vec![sphere_at(0.), sphere_at(10.)]);
        let b = list.bounding_box(0., 1.).unwrap();
        assert_relative_eq!(b.min(), Point3::new(-1., -1., -1.));
        assert_relative_eq!(b.max(), Point3::new(1., 1., 11.));
    }
}
