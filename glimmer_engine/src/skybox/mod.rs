pub mod simple;

use self::simple::{GradientSkybox, NoSkybox, WhiteSkybox};
use crate::core::types::Colour;
use crate::shared::ray::Ray;
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;

/// The light a ray picks up when it escapes the scene without hitting anything
#[enum_dispatch]
pub trait Skybox: ComponentRequirements {
    fn sky_colour(&self, ray: &Ray) -> Colour;
}

#[enum_dispatch(Skybox)]
#[derive(Clone, Debug)]
pub enum SkyboxInstance {
    GradientSkybox,
    WhiteSkybox,
    NoSkybox,
}

impl Default for SkyboxInstance {
    fn default() -> Self { GradientSkybox::default().into() }
}
