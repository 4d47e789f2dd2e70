use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::{orient_normal, Intersection};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;
use crate::surface::{Surface, SurfaceInstance};
use getset::CopyGetters;
use rand_core::RngCore;
use std::sync::Arc;

/// How much an axis-aligned rect's (otherwise flat) bounding box is padded
/// along its constant axis, half on each side
pub const AABB_PADDING: Number = 1e-4;

/// Which pair of axes an axis-aligned rect spans.
///
/// The remaining axis is the one the rect is constant along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RectAxes {
    Xy,
    Xz,
    Yz,
}

impl RectAxes {
    /// Component indices `(u, v, k)`: the two spanned axes and the constant axis
    pub const fn indices(self) -> (usize, usize, usize) {
        match self {
            Self::Xy => (0, 1, 2),
            Self::Xz => (0, 2, 1),
            Self::Yz => (1, 2, 0),
        }
    }

    /// The geometric normal: a unit vector along the constant axis
    pub const fn outward_normal(self) -> Vector3 {
        match self {
            Self::Xy => Vector3::Z,
            Self::Xz => Vector3::Y,
            Self::Yz => Vector3::X,
        }
    }
}

/// A builder struct used to create an axis-aligned rect
///
/// The rect spans `a0..a1` x `b0..b1` across the axes chosen by [RectAxes],
/// at position `k` along the remaining axis
#[derive(Clone, Debug)]
pub struct RectBuilder {
    pub axes: RectAxes,
    pub a0: Number,
    pub a1: Number,
    pub b0: Number,
    pub b1: Number,
    pub k: Number,
    pub material: Arc<MaterialInstance>,
}

/// The actual instance of an axis-aligned rect that can be rendered.
/// Has precomputed values and therefore cannot be mutated
#[derive(Clone, Debug, CopyGetters)]
pub struct RectSurface {
    #[getset(get_copy = "pub")]
    axes: RectAxes,
    a0: Number,
    a1: Number,
    b0: Number,
    b1: Number,
    #[getset(get_copy = "pub")]
    k: Number,
    aabb: Aabb,
    material: Arc<MaterialInstance>,
}

impl From<RectBuilder> for RectSurface {
    fn from(value: RectBuilder) -> Self {
        let (ui, vi, ki) = value.axes.indices();
        let mut lo = [0.; 3];
        let mut hi = [0.; 3];
        (lo[ui], hi[ui]) = (value.a0, value.a1);
        (lo[vi], hi[vi]) = (value.b0, value.b1);
        (lo[ki], hi[ki]) = (value.k, value.k);
        // The box is flat along `k`; pad it so slab tests can't degenerate
        let aabb = Aabb::new(Point3::from(lo), Point3::from(hi)).min_padded(2. * AABB_PADDING);

        Self {
            axes: value.axes,
            a0: value.a0,
            a1: value.a1,
            b0: value.b0,
            b1: value.b1,
            k: value.k,
            aabb,
            material: value.material,
        }
    }
}

impl From<RectBuilder> for SurfaceInstance {
    fn from(value: RectBuilder) -> SurfaceInstance { RectSurface::from(value).into() }
}

impl Surface for RectSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, _rng: &mut dyn RngCore) -> Option<Intersection> {
        let (ui, vi, ki) = self.axes.indices();

        // A ray parallel to the plane never crosses it; bail before dividing
        let denom = ray.dir()[ki];
        if denom == 0. {
            return None;
        }

        let dist = (self.k - ray.pos()[ki]) / denom;
        if !interval.contains(&dist) {
            return None;
        }

        let u_hit = ray.pos()[ui] + (dist * ray.dir()[ui]);
        let v_hit = ray.pos()[vi] + (dist * ray.dir()[vi]);
        if u_hit < self.a0 || u_hit > self.a1 || v_hit < self.b0 || v_hit > self.b1 {
            return None;
        }

        let outward_normal = self.axes.outward_normal();
        let (ray_normal, front_face) = orient_normal(ray, outward_normal);

        let intersection = Intersection {
            pos_w: ray.at(dist),
            dist,
            normal: outward_normal,
            ray_normal,
            front_face,
            uv: Point2::new(
                (u_hit - self.a0) / (self.a1 - self.a0),
                (v_hit - self.b0) / (self.b1 - self.b0),
            ),
            material: self.material.clone(),
        };
        validate::intersection(ray, &intersection, interval);
        Some(intersection)
    }

    fn bounding_box(&self, _time0: Number, _time1: Number) -> Option<Aabb> { Some(self.aabb) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(axes: RectAxes) -> RectSurface {
        RectBuilder {
            axes,
            a0: -1.,
            a1: 1.,
            b0: -2.,
            b1: 2.,
            k: 3.,
            material: Arc::new(MaterialInstance::default()),
        }
        .into()
    }

    #[test]
    fn head_on_hit_with_uv() {
        let r = rect(RectAxes::Xy);
        let ray = Ray::new(Point3::new(0.5, 1., 0.), Vector3::Z);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);

        let hit = r.intersect(&ray, &Interval::from(0.0..), &mut rng).unwrap();
        assert_relative_eq!(hit.dist, 3.);
        assert_relative_eq!(hit.normal, Vector3::Z);
        // Ray travels along +z, so the oriented normal faces back at it
        assert!(!hit.front_face);
        assert_relative_eq!(hit.uv, Point2::new(0.75, 0.75));
    }

    #[test]
    fn parallel_ray_misses() {
        let r = rect(RectAxes::Xy);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        // Direction has no z component, even lying exactly in the rect's plane
        let in_plane = Ray::new(Point3::new(0., 0., 3.), Vector3::X);
        let off_plane = Ray::new(Point3::new(0., 0., 0.), Vector3::X);
        assert!(r.intersect(&in_plane, &Interval::FULL, &mut rng).is_none());
        assert!(r.intersect(&off_plane, &Interval::FULL, &mut rng).is_none());
    }

    #[test]
    fn outside_extents_misses() {
        let r = rect(RectAxes::Xy);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let ray = Ray::new(Point3::new(1.5, 0., 0.), Vector3::Z);
        assert!(r.intersect(&ray, &Interval::from(0.0..), &mut rng).is_none());
    }

    #[test]
    fn all_axis_variants_hit() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let cases = [
            (RectAxes::Xy, Point3::new(0., 0., 0.), Vector3::Z),
            (RectAxes::Xz, Point3::new(0., 0., 0.), Vector3::Y),
            (RectAxes::Yz, Point3::new(0., 0., 0.), Vector3::X),
        ];
        for (axes, pos, dir) in cases {
            let r = rect(axes);
            let hit = r
                .intersect(&Ray::new(pos, dir), &Interval::from(0.0..), &mut rng)
                .unwrap_or_else(|| panic!("{axes:?} should hit"));
            assert_relative_eq!(hit.dist, 3.);
            assert_relative_eq!(hit.normal, axes.outward_normal());
        }
    }

    #[test]
    fn aabb_padded_on_flat_axis() {
        let r = rect(RectAxes::Xz);
        let b = r.bounding_box(0., 1.).unwrap();
        assert_relative_eq!(b.min().y, 3. - AABB_PADDING);
        assert_relative_eq!(b.max().y, 3. + AABB_PADDING);
        assert_relative_eq!(b.min().x, -1.);
        assert_relative_eq!(b.max().z, 2.);
    }
}
