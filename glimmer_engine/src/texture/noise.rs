use crate::core::types::{Channel, Colour, Number, Point2, Point3};
use crate::texture::Texture;
use noise::{NoiseFn, Perlin};
use std::fmt::{Debug, Formatter};

/// A marble-like greyscale texture: a sine stripe along `z`, phase-shifted by
/// several octaves of Perlin turbulence.
#[derive(Clone)]
pub struct NoiseTexture {
    perlin: Perlin,
    seed: u32,
    pub scale: Number,
    pub turbulence_depth: usize,
}

impl NoiseTexture {
    pub const DEFAULT_TURBULENCE_DEPTH: usize = 7;

    pub fn new(seed: u32, scale: Number) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
            scale,
            turbulence_depth: Self::DEFAULT_TURBULENCE_DEPTH,
        }
    }

    /// Sum of `depth` octaves of noise, each at double the frequency and half
    /// the amplitude of the previous
    fn turbulence(&self, pos: Point3) -> Number {
        let mut accum = 0.;
        let mut p = pos;
        let mut weight = 1.;
        for _ in 0..self.turbulence_depth {
            accum += weight * self.perlin.get(p.to_array());
            weight *= 0.5;
            p *= 2.;
        }
        accum.abs()
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _uv: Point2, pos: Point3) -> Colour {
        let stripe = Number::sin(self.scale * pos.z + 10. * self.turbulence(pos));
        let grey = (0.5 * (1. + stripe)) as Channel;
        Colour::WHITE * grey
    }
}

impl Debug for NoiseTexture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseTexture")
            .field("seed", &self.seed)
            .field("scale", &self.scale)
            .field("turbulence_depth", &self.turbulence_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_valid_greyscale() {
        let tex = NoiseTexture::new(42, 4.);
        for i in 0..100 {
            let p = Point3::new(i as Number * 0.37, i as Number * -0.11, i as Number * 0.73);
            let c = tex.value(Point2::ZERO, p);
            assert!((0.0..=1.0).contains(&c[0]), "channel out of range: {c:?}");
            assert_eq!(c[0], c[1]);
            assert_eq!(c[1], c[2]);
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let a = NoiseTexture::new(7, 2.);
        let b = NoiseTexture::new(7, 2.);
        let p = Point3::new(1.3, -0.2, 5.9);
        assert_eq!(a.value(Point2::ZERO, p), b.value(Point2::ZERO, p));
    }
}
