use crate::core::types::{Number, Point2, Vector3};
use crate::material::MaterialInstance;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::surface::{Surface, SurfaceInstance};
use getset::{CopyGetters, Getters};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Offset used when re-probing the boundary for the exit point, so the same
/// intersection isn't found twice
const REPROBE_OFFSET: Number = 1e-4;

/// A builder struct used to create a constant-density participating medium
///
/// The wrapped `boundary` surface defines the extent of the medium; the
/// boundary itself is never rendered. This assumes the boundary is convex:
/// each ray must enter and leave it at most once.
#[derive(Clone, Debug)]
pub struct HomogeneousVolumeBuilder {
    pub boundary: Arc<SurfaceInstance>,
    pub density: Number,
    pub phase_function: Arc<MaterialInstance>,
}

/// A surface wrapper that treats the wrapped surface as a constant-density volume
#[derive(Clone, Debug, CopyGetters, Getters)]
pub struct HomogeneousVolumeSurface {
    #[getset(get = "pub")]
    boundary: Arc<SurfaceInstance>,
    #[getset(get_copy = "pub")]
    density: Number,
    neg_inv_density: Number,
    phase_function: Arc<MaterialInstance>,
}

impl From<HomogeneousVolumeBuilder> for HomogeneousVolumeSurface {
    fn from(value: HomogeneousVolumeBuilder) -> Self {
        Self {
            boundary: value.boundary,
            density: value.density,
            neg_inv_density: -1.0 / value.density,
            phase_function: value.phase_function,
        }
    }
}

impl From<HomogeneousVolumeBuilder> for SurfaceInstance {
    fn from(value: HomogeneousVolumeBuilder) -> SurfaceInstance { HomogeneousVolumeSurface::from(value).into() }
}

impl Surface for HomogeneousVolumeSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        // Find where the ray enters and exits the boundary. The probes run over
        // an unrestricted window so a ray starting inside the medium still
        // finds its (negative-distance) entry point
        let entering = self.boundary.intersect(ray, &Interval::FULL, rng)?;
        let exiting = self
            .boundary
            .intersect(ray, &Interval::from((entering.dist + REPROBE_OFFSET)..), rng)?;

        // Clamp the traversed segment to the query window and to in-front-of-the-ray
        let mut t_entry = entering.dist;
        let mut t_exit = exiting.dist;
        if let Some(start) = interval.start {
            t_entry = t_entry.max(start);
        }
        if let Some(end) = interval.end {
            t_exit = t_exit.min(end);
        }
        t_entry = t_entry.max(0.);
        if t_entry >= t_exit {
            return None;
        }

        // Sample an exponentially-distributed free-flight distance, in world
        // units (the ray's direction is not unit length)
        let ray_length = ray.dir().length();
        let dist_inside = (t_exit - t_entry) * ray_length;
        let hit_dist = self.neg_inv_density * Number::ln(rng.gen());

        // `rng.gen()` can return zero, making `hit_dist` infinite; the
        // comparison then fails and the ray passes through unscattered
        if !(hit_dist <= dist_inside) {
            return None;
        }

        let dist = t_entry + (hit_dist / ray_length);

        Some(Intersection {
            pos_w: ray.at(dist),
            dist,
            // There is no meaningful surface normal inside a medium; these are
            // fixed arbitrary values the phase function ignores
            normal: Vector3::X,
            ray_normal: Vector3::X,
            front_face: true,
            uv: Point2::ZERO,
            material: self.phase_function.clone(),
        })
    }

    fn bounding_box(&self, time0: Number, time1: Number) -> Option<Aabb> { self.boundary.bounding_box(time0, time1) }
}
