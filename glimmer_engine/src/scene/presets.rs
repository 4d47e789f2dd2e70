//! Built-in demo scenes.
//!
//! Each preset builds its surfaces, wraps them in a BVH, and pairs the scene
//! with a matching camera. The RNG drives both scene generation (where a
//! preset is randomised) and the BVH's split axes, so a fixed seed gives a
//! fully reproducible scene.

use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::material::dielectric::DielectricMaterial;
use crate::material::isotropic::IsotropicMaterial;
use crate::material::lambertian::LambertianMaterial;
use crate::material::light::DiffuseLightMaterial;
use crate::material::metal::MetalMaterial;
use crate::material::MaterialInstance;
use crate::scene::camera::{Camera, CameraBuilder};
use crate::scene::Scene;
use crate::skybox::simple::NoSkybox;
use crate::skybox::SkyboxInstance;
use crate::surface::axis_box::AxisBoxBuilder;
use crate::surface::bvh::{BvhBuildError, BvhSurface};
use crate::surface::homogeneous_volume::HomogeneousVolumeBuilder;
use crate::surface::moving_sphere::MovingSphereBuilder;
use crate::surface::rect::{RectAxes, RectBuilder};
use crate::surface::rotate_y::RotateYSurface;
use crate::surface::sphere::SphereBuilder;
use crate::surface::translate::TranslateSurface;
use crate::surface::SurfaceInstance;
use crate::texture::checker::CheckerTexture;
use crate::texture::noise::NoiseTexture;
use itertools::iproduct;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// A scene preset: the scene plus the camera it is meant to be viewed through
#[derive(Clone, Debug)]
pub struct Preset {
    pub scene: Scene,
    pub camera: Camera,
}

/// The names accepted by [load]
pub const NAMES: &[&str] = &[
    "bouncing-spheres",
    "two-spheres",
    "perlin-spheres",
    "cornell-box",
    "cornell-smoke",
];

/// Loads a preset by name; [None] if the name is unknown
pub fn load(name: &str, aspect_ratio: Number, rng: &mut dyn RngCore) -> Option<Result<Preset, BvhBuildError>> {
    match name {
        "bouncing-spheres" => Some(bouncing_spheres(aspect_ratio, rng)),
        "two-spheres" => Some(two_spheres(aspect_ratio, rng)),
        "perlin-spheres" => Some(perlin_spheres(aspect_ratio, rng)),
        "cornell-box" => Some(cornell_box(aspect_ratio, rng)),
        "cornell-smoke" => Some(cornell_smoke(aspect_ratio, rng)),
        _ => None,
    }
}

fn shared(material: impl Into<MaterialInstance>) -> Arc<MaterialInstance> { Arc::new(material.into()) }

fn build_scene(
    surfaces: Vec<Arc<SurfaceInstance>>,
    skybox: impl Into<SkyboxInstance>,
    rng: &mut dyn RngCore,
) -> Result<Scene, BvhBuildError> {
    let bvh = BvhSurface::new(surfaces, 0., 1., rng)?;
    Ok(Scene::new(bvh, skybox))
}

/// The classic field of random small spheres (some of them bouncing) around
/// three large feature spheres, on a checkered ground
pub fn bouncing_spheres(aspect_ratio: Number, rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let mut surfaces: Vec<Arc<SurfaceInstance>> = vec![];

    let ground = shared(LambertianMaterial::new(CheckerTexture::new(
        Colour::new(0.2, 0.3, 0.1),
        Colour::new(0.9, 0.9, 0.9),
    )));
    surfaces.push(Arc::new(
        SphereBuilder {
            centre: Point3::new(0., -1000., 0.),
            radius: 1000.,
            material: ground,
        }
        .into(),
    ));

    for (a, b) in iproduct!(-11..11, -11..11) {
        let centre = Point3::new(
            a as Number + 0.9 * rng.gen::<Number>(),
            0.2,
            b as Number + 0.9 * rng.gen::<Number>(),
        );
        if (centre - Point3::new(4., 0.2, 0.)).length() <= 0.9 {
            continue;
        }

        let choose_mat = rng.gen::<Number>();
        let surface: SurfaceInstance = if choose_mat < 0.8 {
            // Diffuse spheres bounce during the shutter window
            let albedo = Colour::new(rng.gen::<f32>() * rng.gen::<f32>(), rng.gen::<f32>() * rng.gen::<f32>(), rng.gen::<f32>() * rng.gen::<f32>());
            MovingSphereBuilder {
                centre0: centre,
                centre1: centre + Vector3::new(0., rng.gen_range(0.0..0.5), 0.),
                time0: 0.,
                time1: 1.,
                radius: 0.2,
                material: shared(LambertianMaterial::new(albedo)),
            }
            .into()
        } else if choose_mat < 0.95 {
            let albedo = Colour::new(
                rng.gen_range(0.5..1.0),
                rng.gen_range(0.5..1.0),
                rng.gen_range(0.5..1.0),
            );
            SphereBuilder {
                centre,
                radius: 0.2,
                material: shared(MetalMaterial::new(albedo, rng.gen_range(0.0..0.5))),
            }
            .into()
        } else {
            SphereBuilder {
                centre,
                radius: 0.2,
                material: shared(DielectricMaterial { refractive_index: 1.5 }),
            }
            .into()
        };
        surfaces.push(Arc::new(surface));
    }

    surfaces.push(Arc::new(
        SphereBuilder {
            centre: Point3::new(0., 1., 0.),
            radius: 1.,
            material: shared(DielectricMaterial { refractive_index: 1.5 }),
        }
        .into(),
    ));
    surfaces.push(Arc::new(
        SphereBuilder {
            centre: Point3::new(-4., 1., 0.),
            radius: 1.,
            material: shared(LambertianMaterial::new(Colour::new(0.4, 0.2, 0.1))),
        }
        .into(),
    ));
    surfaces.push(Arc::new(
        SphereBuilder {
            centre: Point3::new(4., 1., 0.),
            radius: 1.,
            material: shared(MetalMaterial::new(Colour::new(0.7, 0.6, 0.5), 0.)),
        }
        .into(),
    ));

    Ok(Preset {
        scene: build_scene(surfaces, SkyboxInstance::default(), rng)?,
        camera: CameraBuilder {
            look_from: Point3::new(13., 2., 3.),
            look_at: Point3::ZERO,
            v_fov: 20.,
            aperture: 0.1,
            focus_dist: 10.,
            aspect_ratio,
            ..CameraBuilder::default()
        }
        .into(),
    })
}

/// Two large checkered spheres facing each other
pub fn two_spheres(aspect_ratio: Number, rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let checker = || {
        shared(LambertianMaterial::new(CheckerTexture::new(
            Colour::new(0.2, 0.3, 0.1),
            Colour::new(0.9, 0.9, 0.9),
        )))
    };
    let surfaces: Vec<Arc<SurfaceInstance>> = vec![
        Arc::new(
            SphereBuilder {
                centre: Point3::new(0., -10., 0.),
                radius: 10.,
                material: checker(),
            }
            .into(),
        ),
        Arc::new(
            SphereBuilder {
                centre: Point3::new(0., 10., 0.),
                radius: 10.,
                material: checker(),
            }
            .into(),
        ),
    ];

    Ok(Preset {
        scene: build_scene(surfaces, SkyboxInstance::default(), rng)?,
        camera: CameraBuilder {
            aspect_ratio,
            ..CameraBuilder::default()
        }
        .into(),
    })
}

/// A marble-textured sphere resting on a marble-textured ground
pub fn perlin_spheres(aspect_ratio: Number, rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let marble = shared(LambertianMaterial::new(NoiseTexture::new(rng.gen(), 4.)));
    let surfaces: Vec<Arc<SurfaceInstance>> = vec![
        Arc::new(
            SphereBuilder {
                centre: Point3::new(0., -1000., 0.),
                radius: 1000.,
                material: marble.clone(),
            }
            .into(),
        ),
        Arc::new(
            SphereBuilder {
                centre: Point3::new(0., 2., 0.),
                radius: 2.,
                material: marble,
            }
            .into(),
        ),
    ];

    Ok(Preset {
        scene: build_scene(surfaces, SkyboxInstance::default(), rng)?,
        camera: CameraBuilder {
            aspect_ratio,
            ..CameraBuilder::default()
        }
        .into(),
    })
}

/// The walls, light and two rotated boxes of the Cornell box
fn cornell_shell(surfaces: &mut Vec<Arc<SurfaceInstance>>, light_brightness: f32) {
    let red = shared(LambertianMaterial::new(Colour::new(0.65, 0.05, 0.05)));
    let white = shared(LambertianMaterial::new(Colour::new(0.73, 0.73, 0.73)));
    let green = shared(LambertianMaterial::new(Colour::new(0.12, 0.45, 0.15)));
    let light = shared(DiffuseLightMaterial::new(Colour::WHITE * light_brightness));

    let rect = |axes, a0, a1, b0, b1, k, material| {
        Arc::new(SurfaceInstance::from(RectBuilder {
            axes,
            a0,
            a1,
            b0,
            b1,
            k,
            material,
        }))
    };

    surfaces.push(rect(RectAxes::Yz, 0., 555., 0., 555., 555., green));
    surfaces.push(rect(RectAxes::Yz, 0., 555., 0., 555., 0., red));
    surfaces.push(rect(RectAxes::Xz, 113., 443., 127., 432., 554., light));
    surfaces.push(rect(RectAxes::Xz, 0., 555., 0., 555., 0., white.clone()));
    surfaces.push(rect(RectAxes::Xz, 0., 555., 0., 555., 555., white.clone()));
    surfaces.push(rect(RectAxes::Xy, 0., 555., 0., 555., 555., white));
}

/// The two boxes inside the Cornell box, rotated and pushed into place
fn cornell_boxes() -> [Arc<SurfaceInstance>; 2] {
    let white = shared(LambertianMaterial::new(Colour::new(0.73, 0.73, 0.73)));

    let tall: SurfaceInstance = AxisBoxBuilder {
        corner_1: Point3::ZERO,
        corner_2: Point3::new(165., 330., 165.),
        material: white.clone(),
    }
    .into();
    let tall = TranslateSurface::new(
        SurfaceInstance::from(RotateYSurface::new(tall, 15.)),
        Vector3::new(265., 0., 295.),
    );

    let short: SurfaceInstance = AxisBoxBuilder {
        corner_1: Point3::ZERO,
        corner_2: Point3::new(165., 165., 165.),
        material: white,
    }
    .into();
    let short = TranslateSurface::new(
        SurfaceInstance::from(RotateYSurface::new(short, -18.)),
        Vector3::new(130., 0., 65.),
    );

    [Arc::new(tall.into()), Arc::new(short.into())]
}

fn cornell_camera(aspect_ratio: Number) -> Camera {
    CameraBuilder {
        look_from: Point3::new(278., 278., -800.),
        look_at: Point3::new(278., 278., 0.),
        v_fov: 40.,
        aperture: 0.,
        focus_dist: 10.,
        aspect_ratio,
        ..CameraBuilder::default()
    }
    .into()
}

/// The classic Cornell box: emissive ceiling light, coloured walls, two boxes
pub fn cornell_box(aspect_ratio: Number, rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let mut surfaces = vec![];
    cornell_shell(&mut surfaces, 15.);
    surfaces.extend(cornell_boxes());

    Ok(Preset {
        scene: build_scene(surfaces, NoSkybox, rng)?,
        camera: cornell_camera(aspect_ratio),
    })
}

/// The Cornell box with the two boxes replaced by volumes of smoke
pub fn cornell_smoke(aspect_ratio: Number, rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let mut surfaces = vec![];
    cornell_shell(&mut surfaces, 7.);

    let [tall, short] = cornell_boxes();
    surfaces.push(Arc::new(
        HomogeneousVolumeBuilder {
            boundary: tall,
            density: 0.01,
            phase_function: shared(IsotropicMaterial::from(Colour::BLACK)),
        }
        .into(),
    ));
    surfaces.push(Arc::new(
        HomogeneousVolumeBuilder {
            boundary: short,
            density: 0.01,
            phase_function: shared(IsotropicMaterial::from(Colour::WHITE)),
        }
        .into(),
    ));

    Ok(Preset {
        scene: build_scene(surfaces, NoSkybox, rng)?,
        camera: cornell_camera(aspect_ratio),
    })
}
