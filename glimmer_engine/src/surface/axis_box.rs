use crate::core::types::{Number, Point3};
use crate::material::MaterialInstance;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::surface::list::SurfaceList;
use crate::surface::rect::{RectAxes, RectBuilder};
use crate::surface::{Surface, SurfaceInstance};
use getset::CopyGetters;
use rand_core::RngCore;
use std::sync::Arc;

/// A builder struct used to create an axis-aligned box
///
/// The corners do *not* have to be sorted by min/max
#[derive(Clone, Debug)]
pub struct AxisBoxBuilder {
    pub corner_1: Point3,
    pub corner_2: Point3,
    pub material: Arc<MaterialInstance>,
}

/// An axis-aligned box, assembled from six axis-aligned rects sharing one material
#[derive(Clone, Debug, CopyGetters)]
pub struct AxisBoxSurface {
    /// The exact box spanned by the corners; unlike the sides' own boxes,
    /// this one is not padded
    #[getset(get_copy = "pub")]
    aabb: Aabb,
    sides: SurfaceList,
}

impl From<AxisBoxBuilder> for AxisBoxSurface {
    fn from(value: AxisBoxBuilder) -> Self {
        let aabb = Aabb::new(value.corner_1, value.corner_2);
        let (min, max) = (aabb.min(), aabb.max());
        let material = value.material;

        let rect = |axes: RectAxes, a0, a1, b0, b1, k| RectBuilder {
            axes,
            a0,
            a1,
            b0,
            b1,
            k,
            material: material.clone(),
        };

        let mut sides = SurfaceList::default();
        sides.push(rect(RectAxes::Xy, min.x, max.x, min.y, max.y, max.z));
        sides.push(rect(RectAxes::Xy, min.x, max.x, min.y, max.y, min.z));
        sides.push(rect(RectAxes::Xz, min.x, max.x, min.z, max.z, max.y));
        sides.push(rect(RectAxes::Xz, min.x, max.x, min.z, max.z, min.y));
        sides.push(rect(RectAxes::Yz, min.y, max.y, min.z, max.z, max.x));
        sides.push(rect(RectAxes::Yz, min.y, max.y, min.z, max.z, min.x));

        Self { aabb, sides }
    }
}

impl From<AxisBoxBuilder> for SurfaceInstance {
    fn from(value: AxisBoxBuilder) -> SurfaceInstance { AxisBoxSurface::from(value).into() }
}

impl Surface for AxisBoxSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        self.sides.intersect(ray, interval, rng)
    }

    fn bounding_box(&self, _time0: Number, _time1: Number) -> Option<Aabb> { Some(self.aabb) }
}
