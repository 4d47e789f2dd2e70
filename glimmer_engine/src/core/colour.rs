use crate::core::types::Channel;
use std::array;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub};

/// An RGB colour, stored as three [Channel]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Colour(pub [Channel; 3]);

// region Constructors & Known Colours

impl Colour {
    pub const fn new(r: Channel, g: Channel, b: Channel) -> Self { Self([r, g, b]) }

    pub const BLACK: Self = Self([0.; 3]);
    pub const WHITE: Self = Self([1.; 3]);
    pub const HALF_GREY: Self = Self([0.5; 3]);
}

impl From<[Channel; 3]> for Colour {
    fn from(val: [Channel; 3]) -> Self { Self(val) }
}
impl From<Colour> for [Channel; 3] {
    fn from(val: Colour) -> Self { val.0 }
}
impl From<(Channel, Channel, Channel)> for Colour {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self([r, g, b]) }
}

// endregion Constructors & Known Colours

// region Combinators

impl Colour {
    /// Maps each channel of the colour with the given closure
    #[inline]
    pub fn map(&self, op: impl Fn(Channel) -> Channel) -> Self { Self(self.0.map(op)) }

    /// Maps each channel of the colour with the corresponding channel of `other`
    #[inline]
    pub fn map2(&self, other: &Self, mut op: impl FnMut(Channel, Channel) -> Channel) -> Self {
        Self(array::from_fn(|i| op(self.0[i], other.0[i])))
    }

    pub fn abs(&self) -> Self { self.map(Channel::abs) }
    pub fn sqrt(&self) -> Self { self.map(Channel::sqrt) }
    pub fn clamp(&self, min: Channel, max: Channel) -> Self { self.map(|c| c.clamp(min, max)) }

    /// Your standard linear interpolation, channel-wise
    pub fn lerp(a: Self, b: Self, t: Channel) -> Self { a + ((b - a) * t) }
}

// endregion Combinators

// region Iterating/Indexing

impl IntoIterator for Colour {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, 3>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl Index<usize> for Colour {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

// endregion Iterating/Indexing

// region Operators

impl Add for Colour {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { self.map2(&rhs, Channel::add) }
}
impl Sub for Colour {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { self.map2(&rhs, Channel::sub) }
}
impl Mul for Colour {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self { self.map2(&rhs, Channel::mul) }
}
impl Mul<Channel> for Colour {
    type Output = Self;
    fn mul(self, rhs: Channel) -> Self { self.map(|c| c * rhs) }
}
impl Mul<Colour> for Channel {
    type Output = Colour;
    fn mul(self, rhs: Colour) -> Colour { rhs * self }
}
impl Div<Channel> for Colour {
    type Output = Self;
    fn div(self, rhs: Channel) -> Self { self.map(|c| c / rhs) }
}
impl AddAssign for Colour {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl MulAssign for Colour {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}
impl DivAssign<Channel> for Colour {
    fn div_assign(&mut self, rhs: Channel) { *self = *self / rhs; }
}

// endregion Operators

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Colour::new(0.2, 0.4, 0.6);
        let b = Colour::new(1.0, 0.0, 0.5);
        assert_eq!(Colour::lerp(a, b, 0.), a);
        assert_eq!(Colour::lerp(a, b, 1.), b);
    }

    #[test]
    fn channel_ops() {
        let c = Colour::new(0.5, 0.25, 1.0) * Colour::new(2.0, 2.0, 0.5);
        assert_eq!(c, Colour::new(1.0, 0.5, 0.5));
        assert_eq!(c / 2.0, Colour::new(0.5, 0.25, 0.25));
    }
}
