use crate::core::types::{Colour, Number, Point2, Point3};
use crate::texture::{Texture, TextureInstance};
use std::sync::Arc;

/// A 3D checker pattern, alternating between two inner textures.
///
/// The pattern is driven by the sign of a product of sines over the world
/// position, so it holds up across adjacent surfaces without UV seams.
#[derive(Clone, Debug)]
pub struct CheckerTexture {
    pub even: Arc<TextureInstance>,
    pub odd: Arc<TextureInstance>,
    pub scale: Number,
}

impl CheckerTexture {
    pub const DEFAULT_SCALE: Number = 10.;

    pub fn new(even: impl Into<TextureInstance>, odd: impl Into<TextureInstance>) -> Self {
        Self {
            even: Arc::new(even.into()),
            odd: Arc::new(odd.into()),
            scale: Self::DEFAULT_SCALE,
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: Point2, pos: Point3) -> Colour {
        let sines = Number::sin(self.scale * pos.x)
            * Number::sin(self.scale * pos.y)
            * Number::sin(self.scale * pos.z);
        if sines < 0. {
            self.odd.value(uv, pos)
        } else {
            self.even.value(uv, pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_between_cells() {
        let tex = CheckerTexture::new(Colour::WHITE, Colour::BLACK);
        // One half-period along x flips the sign of the sine product
        let a = tex.value(Point2::ZERO, Point3::new(0.05, 0.05, 0.05));
        let b = tex.value(Point2::ZERO, Point3::new(0.05 + std::f64::consts::PI / 10., 0.05, 0.05));
        assert_eq!(a, Colour::WHITE);
        assert_eq!(b, Colour::BLACK);
    }
}
