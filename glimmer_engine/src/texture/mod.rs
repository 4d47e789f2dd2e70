//noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{checker::CheckerTexture, noise::NoiseTexture, solid::SolidTexture};
use crate::core::types::{Colour, Point2, Point3};
use crate::shared::ComponentRequirements;
use enum_dispatch::enum_dispatch;

pub mod checker;
pub mod noise;
pub mod solid;

/// The trait that defines what properties a texture has
#[enum_dispatch]
pub trait Texture: ComponentRequirements {
    /// Samples the texture's colour for a surface point, given the point's
    /// UV coordinates and world position
    fn value(&self, uv: Point2, pos: Point3) -> Colour;
}

/// An optimised implementation of [Texture], using static dispatch
#[enum_dispatch(Texture)]
#[derive(Clone, Debug)]
pub enum TextureInstance {
    SolidTexture,
    CheckerTexture,
    NoiseTexture,
}

impl Default for TextureInstance {
    fn default() -> Self { SolidTexture::default().into() }
}

impl From<Colour> for TextureInstance {
    fn from(value: Colour) -> Self { SolidTexture::from(value).into() }
}
