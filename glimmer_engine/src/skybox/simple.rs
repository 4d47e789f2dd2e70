use crate::core::types::{Channel, Colour};
use crate::shared::ray::Ray;
use crate::skybox::Skybox;

/// A vertical gradient from `bottom` at the horizon's underside to `top`
/// straight up; the classic daylight sky
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientSkybox {
    pub bottom: Colour,
    pub top: Colour,
}

impl Default for GradientSkybox {
    fn default() -> Self {
        Self {
            bottom: Colour::WHITE,
            top: Colour::new(0.5, 0.7, 1.0),
        }
    }
}

impl Skybox for GradientSkybox {
    fn sky_colour(&self, ray: &Ray) -> Colour {
        let a = 0.5 * (ray.dir().normalize().y + 1.0);
        Colour::lerp(self.bottom, self.top, a as Channel)
    }
}

/// Uniform white; keeps test oracles simple
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WhiteSkybox;

impl Skybox for WhiteSkybox {
    fn sky_colour(&self, _ray: &Ray) -> Colour { Colour::WHITE }
}

/// No sky at all; scenes lit purely by emissive surfaces
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NoSkybox;

impl Skybox for NoSkybox {
    fn sky_colour(&self, _ray: &Ray) -> Colour { Colour::BLACK }
}
