use crate::core::image::Image;
use crate::core::types::{Channel, Colour, Number};
use crate::material::Material;
use crate::render::render_opts::RenderOpts;
use crate::scene::camera::Camera;
use crate::scene::Scene;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::skybox::Skybox;
use crate::surface::Surface;
use rand::{Rng, RngCore};
use tracing::{debug, info};

/// Hits closer than this are ignored, so a bounced ray can't immediately
/// re-hit the surface it just left ("shadow acne")
pub const MIN_HIT_DIST: Number = 1e-3;

/// A single-threaded Monte-Carlo renderer
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    opts: RenderOpts,
}

impl Renderer {
    pub fn new(opts: RenderOpts) -> Self { Self { opts } }

    pub fn opts(&self) -> RenderOpts { self.opts }

    /// Renders the scene into a linear (not gamma-corrected) image
    pub fn render(&self, scene: &Scene, camera: &Camera, rng: &mut dyn RngCore) -> Image {
        let [width, height] = self.opts.dims();
        let samples = self.opts.samples().get();
        let max_bounces = self.opts.max_bounces();

        info!(target: "render", width, height, samples, max_bounces, "render started");
        let start = std::time::Instant::now();

        let mut img = Image::new_blank(width, height);
        for y in 0..height {
            for x in 0..width {
                let mut accum = Colour::BLACK;
                for _ in 0..samples {
                    // Jitter the sample inside the pixel; image row 0 is the
                    // top of the viewport, so flip `t`
                    let s = (x as Number + rng.gen::<Number>()) / (width - 1) as Number;
                    let t = ((height - 1 - y) as Number + rng.gen::<Number>()) / (height - 1) as Number;
                    accum += Self::ray_colour(scene, &camera.ray(s, t, rng), max_bounces, rng);
                }
                img[(x, y)] = accum / samples as Channel;
            }
            debug!(target: "render", row = y, "scanline done");
        }

        info!(target: "render", elapsed = ?start.elapsed(), "render finished");
        img
    }

    /// The recursive path-tracing estimator.
    ///
    /// The bounce budget is a hard truncation: once it runs out the ray
    /// contributes black, which slightly darkens heavily-scattering corners
    /// rather than tracing forever.
    pub fn ray_colour(scene: &Scene, ray: &Ray, bounces: usize, rng: &mut dyn RngCore) -> Colour {
        if bounces == 0 {
            return Colour::BLACK;
        }

        let interval = Interval::from(MIN_HIT_DIST..);
        let Some(intersection) = scene.root().intersect(ray, &interval, rng) else {
            return scene.skybox().sky_colour(ray);
        };

        let material = intersection.material.clone();
        let emitted = material.emitted(intersection.uv, intersection.pos_w);

        match material.scatter(ray, &intersection, rng) {
            Some(scatter) => emitted + (scatter.attenuation * Self::ray_colour(scene, &scatter.ray, bounces - 1, rng)),
            // Absorbed; only the surface's own emission survives
            None => emitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Point3, Vector3};
    use crate::material::MaterialInstance;
    use crate::skybox::simple::GradientSkybox;
    use crate::surface::sphere::SphereBuilder;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn test_scene() -> Scene {
        Scene::new(
            SphereBuilder {
                centre: Point3::ZERO,
                radius: 1.,
                material: Arc::new(MaterialInstance::default()),
            },
            GradientSkybox::default(),
        )
    }

    #[test]
    fn zero_bounce_budget_is_black() {
        let scene = test_scene();
        let mut rng = SmallRng::seed_from_u64(0);
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::Z);
        assert_eq!(Renderer::ray_colour(&scene, &ray, 0, &mut rng), Colour::BLACK);
    }

    #[test]
    fn miss_returns_sky_gradient() {
        let scene = test_scene();
        let sky = GradientSkybox::default();
        let mut rng = SmallRng::seed_from_u64(1);
        // Pointing well away from the sphere
        let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 1., -1.));
        assert_eq!(Renderer::ray_colour(&scene, &ray, 10, &mut rng), sky.sky_colour(&ray));
    }
}
