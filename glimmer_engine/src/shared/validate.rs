//! Debug-only invariant checks, compiled away in release builds.

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use approx::assert_relative_eq;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();
    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn point3(v: impl Borrow<Point3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; point: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn uv(uv: impl Borrow<Point2>) {
    debug_assert_only!();
    let uv = uv.borrow();
    assert!(!uv.is_nan(), "should not be nan; uv: {uv:?}");
}

/// Asserts that an intersection is valid for the ray and interval it was produced from
#[inline(always)]
#[track_caller]
pub fn intersection(
    ray: impl Borrow<Ray>,
    intersect: impl Borrow<Intersection>,
    interval: impl Borrow<Interval<Number>>,
) {
    debug_assert_only!();

    let (ray, intersect, interval) = (ray.borrow(), intersect.borrow(), interval.borrow());

    point3(intersect.pos_w);
    number(intersect.dist);
    vector3(intersect.normal);
    vector3(intersect.ray_normal);
    uv(intersect.uv);

    assert!(
        interval.contains(&intersect.dist),
        "intersect dist {} not in interval {}",
        intersect.dist,
        interval
    );

    // Walking the ray by `dist` must land on the intersection point.
    // Note: `dist` is in multiples of `dir`, which is not necessarily unit length
    assert_relative_eq!(
        ray.at(intersect.dist),
        intersect.pos_w,
        epsilon = EPSILON,
        max_relative = RELATIVE
    );
}
