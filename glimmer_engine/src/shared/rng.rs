//! Helper module for RNG-related functions

use crate::core::types::{Vector2, Vector3};
use rand::Rng;

// region 3D

/// Returns a random vector in a unit cube (-1..=1)
pub fn vector_in_unit_cube(rng: &mut (impl Rng + ?Sized)) -> Vector3 {
    let mut arr = [0.; 3];
    arr.fill_with(|| rng.gen_range(-1.0..=1.0));
    arr.into()
}

/// Returns a random vector in a unit sphere (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_sphere(rng: &mut (impl Rng + ?Sized)) -> Vector3 {
    loop {
        let v = vector_in_unit_cube(rng);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

/// Returns a random vector on a unit sphere (`-1..=1`, `length = 1`)
pub fn vector_on_unit_sphere(rng: &mut (impl Rng + ?Sized)) -> Vector3 {
    loop {
        let Some(vec) = vector_in_unit_sphere(rng).try_normalize() else {
            continue;
        };
        return vec;
    }
}

// endregion 3D

// region 2D

/// Returns a random vector in a unit square (-1..=1)
pub fn vector_in_unit_square(rng: &mut (impl Rng + ?Sized)) -> Vector2 {
    let mut arr = [0.; 2];
    arr.fill_with(|| rng.gen_range(-1.0..=1.0));
    arr.into()
}

/// Returns a random vector in a unit disc (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_disc(rng: &mut (impl Rng + ?Sized)) -> Vector2 {
    loop {
        let v = vector_in_unit_square(rng);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

// endregion 2D

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_their_domains() {
        let mut rng = SmallRng::seed_from_u64(0x_5EED);
        for _ in 0..1000 {
            assert!(vector_in_unit_sphere(&mut rng).length_squared() <= 1.);
            assert!(vector_on_unit_sphere(&mut rng).is_normalized());
            assert!(vector_in_unit_disc(&mut rng).length_squared() <= 1.);
        }
    }
}
