use crate::core::types::{Number, Point3, Vector3};
use crate::shared::ray::Ray;
use crate::shared::rng;
use rand::{Rng, RngCore};

/// A builder struct used to create a camera
///
/// Call [Into::into] or [Camera::from] to create the actual camera
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraBuilder {
    pub look_from: Point3,
    pub look_at: Point3,
    pub v_up: Vector3,
    /// Vertical field of view, in degrees
    pub v_fov: Number,
    pub aspect_ratio: Number,
    /// Diameter of the lens; zero gives a perfect pinhole camera
    pub aperture: Number,
    pub focus_dist: Number,
    /// Shutter window: each ray is tagged with a uniform random time in
    /// `[time0, time1]`
    pub time0: Number,
    pub time1: Number,
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self {
            look_from: Point3::new(13., 2., 3.),
            look_at: Point3::ZERO,
            v_up: Vector3::Y,
            v_fov: 20.,
            aspect_ratio: 16. / 9.,
            aperture: 0.,
            focus_dist: 10.,
            time0: 0.,
            time1: 1.,
        }
    }
}

/// A thin-lens camera with a shutter window.
/// Has precomputed values and therefore cannot be mutated
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left: Point3,
    horizontal: Vector3,
    vertical: Vector3,
    u: Vector3,
    v: Vector3,
    lens_radius: Number,
    time0: Number,
    time1: Number,
}

impl From<CameraBuilder> for Camera {
    fn from(value: CameraBuilder) -> Self {
        let theta = value.v_fov.to_radians();
        let h = Number::tan(theta / 2.);
        let viewport_height = 2.0 * h;
        let viewport_width = value.aspect_ratio * viewport_height;

        let w = (value.look_from - value.look_at).normalize();
        let u = Vector3::cross(value.v_up, w).normalize();
        let v = Vector3::cross(w, u);

        let origin = value.look_from;
        let horizontal = value.focus_dist * viewport_width * u;
        let vertical = value.focus_dist * viewport_height * v;
        let lower_left = origin - (horizontal / 2.) - (vertical / 2.) - (value.focus_dist * w);

        Self {
            origin,
            lower_left,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: value.aperture / 2.,
            time0: value.time0,
            time1: value.time1,
        }
    }
}

impl Camera {
    /// Generates the ray for the viewport position `(s, t)`, both in `0..=1`
    /// (`(0, 0)` being the bottom-left corner), sampling the lens disc and the
    /// shutter window from the given RNG
    pub fn ray(&self, s: Number, t: Number, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * rng::vector_in_unit_disc(rng);
        let offset = (self.u * rd.x) + (self.v * rd.y);

        Ray::new_with_time(
            self.origin + offset,
            self.lower_left + (s * self.horizontal) + (t * self.vertical) - self.origin - offset,
            rng.gen_range(self.time0..=self.time1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn pinhole_rays_start_at_origin() {
        let cam = Camera::from(CameraBuilder {
            aperture: 0.,
            ..CameraBuilder::default()
        });
        let mut rng = SmallRng::seed_from_u64(0);
        for (s, t) in [(0., 0.), (0.5, 0.5), (1., 1.)] {
            let ray = cam.ray(s, t, &mut rng);
            assert_eq!(ray.pos(), Point3::new(13., 2., 3.));
        }
    }

    #[test]
    fn ray_times_stay_in_shutter_window() {
        let cam = Camera::from(CameraBuilder {
            time0: 0.25,
            time1: 0.75,
            ..CameraBuilder::default()
        });
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let t = cam.ray(0.5, 0.5, &mut rng).time();
            assert!((0.25..=0.75).contains(&t), "time {t} outside shutter window");
        }
    }

    #[test]
    fn centre_ray_points_at_target() {
        let cam = Camera::from(CameraBuilder::default());
        let mut rng = SmallRng::seed_from_u64(2);
        let ray = cam.ray(0.5, 0.5, &mut rng);
        let to_target = (Point3::ZERO - ray.pos()).normalize();
        assert!(ray.dir().normalize().dot(to_target) > 0.999);
    }
}
