use crate::core::types::{Number, Vector3};

/// Calculates the vector reflection of vector `d` across the surface normal `n`
pub fn reflect(d: Vector3, n: Vector3) -> Vector3 { d - n * (2. * d.dot(n)) }

/// Refracts the (normalised) vector `vec` through a surface with (normalised)
/// normal `n` and the given ratio of refractive indices
pub fn refract(vec: Vector3, n: Vector3, ir_ratio: Number) -> Vector3 {
    let cos_theta = Vector3::dot(-vec, n).min(1.);
    let r_out_perp = (vec + n * cos_theta) * ir_ratio;
    let r_out_parallel = n * -Number::sqrt(Number::abs(1.0 - r_out_perp.length_squared()));
    return r_out_perp + r_out_parallel;
}

/// Schlick's approximation for reflectance
pub fn reflectance(cosine: Number, ref_idx: Number) -> Number {
    let r0 = (1. - ref_idx) / (1. + ref_idx);
    let r0_sqr = r0 * r0;
    return r0_sqr + (1. - r0_sqr) * Number::powi(1. - cosine, 5);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reflect_across_plane() {
        let d = Vector3::new(1., -1., 0.).normalize();
        let r = reflect(d, Vector3::Y);
        assert_relative_eq!(r.x, d.x);
        assert_relative_eq!(r.y, -d.y);
        assert_relative_eq!(r.z, 0.);
    }

    #[test]
    fn refract_straight_through() {
        // Normal incidence is unchanged regardless of the index ratio
        let d = Vector3::NEG_Y;
        let r = refract(d, Vector3::Y, 1.5);
        assert_relative_eq!(r.x, 0.);
        assert_relative_eq!(r.y, -1.);
        assert_relative_eq!(r.z, 0.);
    }

    #[test]
    fn reflectance_grazing_is_total() {
        assert_relative_eq!(reflectance(0., 1.5), 1.0, epsilon = 0.05);
        assert!(reflectance(1., 1.5) < 0.1);
    }
}
