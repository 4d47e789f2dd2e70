use crate::core::types::{Colour, Point2, Point3};
use crate::texture::Texture;

/// The simplest of all textures: the same colour everywhere
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SolidTexture {
    pub albedo: Colour,
}

impl From<Colour> for SolidTexture {
    fn from(albedo: Colour) -> Self { Self { albedo } }
}

impl Texture for SolidTexture {
    fn value(&self, _uv: Point2, _pos: Point3) -> Colour { self.albedo }
}
