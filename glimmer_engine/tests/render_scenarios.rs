//! End-to-end render sanity checks on tiny images

mod common;

use glimmer_engine::core::types::{Colour, Point3};
use glimmer_engine::material::lambertian::LambertianMaterial;
use glimmer_engine::material::light::DiffuseLightMaterial;
use glimmer_engine::material::MaterialInstance;
use glimmer_engine::render::render_opts::RenderOpts;
use glimmer_engine::render::renderer::Renderer;
use glimmer_engine::scene::camera::CameraBuilder;
use glimmer_engine::scene::Scene;
use glimmer_engine::skybox::simple::{GradientSkybox, NoSkybox};
use glimmer_engine::surface::sphere::SphereBuilder;
use std::sync::Arc;

fn tiny_opts() -> RenderOpts { RenderOpts::new(16, 9, 4, 8) }

#[test]
fn empty_sky_renders_black() {
    // One unlit sphere behind the camera; every ray escapes into a black sky
    let scene = Scene::new(
        SphereBuilder {
            centre: Point3::new(0., 0., 1000.),
            radius: 1.,
            material: Arc::new(MaterialInstance::default()),
        },
        NoSkybox,
    );
    let camera = CameraBuilder::default().into();

    let mut rng = common::seeded_rng(0);
    let img = Renderer::new(tiny_opts()).render(&scene, &camera, &mut rng);
    assert!(img.iter().all(|&px| px == Colour::BLACK));
}

#[test]
fn gradient_sky_reaches_the_image() {
    let scene = Scene::new(
        SphereBuilder {
            centre: Point3::new(0., 0., 1000.),
            radius: 1.,
            material: Arc::new(MaterialInstance::default()),
        },
        GradientSkybox::default(),
    );
    let camera = CameraBuilder::default().into();

    let mut rng = common::seeded_rng(1);
    let img = Renderer::new(tiny_opts()).render(&scene, &camera, &mut rng);
    // Every pixel sees sky, and the gradient is never black
    assert!(img.iter().all(|&px| px != Colour::BLACK));
    // Rows near the top of the image look up at a bluer sky than rows near
    // the bottom, so blue should not be uniform
    let top = img[(8, 0)];
    let bottom = img[(8, 8)];
    assert_ne!(top, bottom);
}

#[test]
fn emissive_sphere_lights_a_black_sky() {
    let scene = Scene::new(
        SphereBuilder {
            centre: Point3::ZERO,
            radius: 3.,
            material: Arc::new(DiffuseLightMaterial::new(Colour::WHITE * 4.).into()),
        },
        NoSkybox,
    );
    let camera = CameraBuilder {
        look_from: Point3::new(0., 0., -10.),
        look_at: Point3::ZERO,
        ..CameraBuilder::default()
    }
    .into();

    let mut rng = common::seeded_rng(2);
    let img = Renderer::new(tiny_opts()).render(&scene, &camera, &mut rng);
    // The sphere fills the centre of the frame
    let centre = img[(8, 4)];
    assert_eq!(centre, Colour::WHITE * 4.);
}

#[test]
fn deterministic_given_a_seed() {
    let scene = Scene::new(
        SphereBuilder {
            centre: Point3::ZERO,
            radius: 1.,
            material: Arc::new(LambertianMaterial::from(Colour::new(0.5, 0.2, 0.8)).into()),
        },
        GradientSkybox::default(),
    );
    let camera = CameraBuilder::default().into();
    let renderer = Renderer::new(tiny_opts());

    let img_a = renderer.render(&scene, &camera, &mut common::seeded_rng(42));
    let img_b = renderer.render(&scene, &camera, &mut common::seeded_rng(42));
    assert_eq!(&img_a[..], &img_b[..]);
}
