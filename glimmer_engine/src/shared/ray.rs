use crate::core::types::{Number, Point3, Vector3};

/// A parametric ray `pos + t * dir`, tagged with the moment in time it was cast.
///
/// The direction is *not* normalised; parametric distances are measured in
/// multiples of `dir`'s length. This keeps distances stable when a ray is
/// re-expressed in a translated or rotated frame.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
    inv_dir: Vector3,
    time: Number,
}

impl Ray {
    pub fn new(pos: Point3, dir: Vector3) -> Self { Self::new_with_time(pos, dir, 0.) }

    pub fn new_with_time(pos: Point3, dir: Vector3, time: Number) -> Self {
        Self {
            pos,
            dir,
            // Zero components give infinities here, which the AABB slab test relies on
            inv_dir: dir.recip(),
            time,
        }
    }

    /// World-space origin of the ray
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray (not normalised)
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// Componentwise reciprocal of [Self::dir], cached for AABB slab tests
    #[inline(always)]
    pub fn inv_dir(&self) -> Vector3 { self.inv_dir }

    /// The moment in time the ray exists at (used for motion blur)
    #[inline(always)]
    pub fn time(&self) -> Number { self.time }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Point3::new(1., 2., 3.), Vector3::new(0., 0., 2.));
        assert_eq!(ray.at(0.), Point3::new(1., 2., 3.));
        assert_eq!(ray.at(1.5), Point3::new(1., 2., 6.));
    }

    #[test]
    fn inv_dir_matches_reciprocal() {
        let ray = Ray::new(Point3::ZERO, Vector3::new(2., -4., 0.));
        assert_eq!(ray.inv_dir().x, 0.5);
        assert_eq!(ray.inv_dir().y, -0.25);
        assert!(ray.inv_dir().z.is_infinite());
    }
}
