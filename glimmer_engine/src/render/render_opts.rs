use crate::core::types::Number;
use getset::CopyGetters;
use std::num::NonZeroUsize;

/// Per-render settings: image dimensions and sampling limits
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq, Eq)]
#[getset(get_copy = "pub")]
pub struct RenderOpts {
    width: NonZeroUsize,
    height: NonZeroUsize,
    /// Rays traced per pixel; the pixel is the average of all of them
    samples: NonZeroUsize,
    /// How many bounces a single ray may take before its contribution is
    /// truncated to black
    max_bounces: usize,
}

impl RenderOpts {
    /// # Panics
    /// `width`, `height` and `samples` must all be non-zero
    pub fn new(width: usize, height: usize, samples: usize, max_bounces: usize) -> Self {
        Self {
            width: NonZeroUsize::new(width).expect("width must be non-zero"),
            height: NonZeroUsize::new(height).expect("height must be non-zero"),
            samples: NonZeroUsize::new(samples).expect("samples must be non-zero"),
            max_bounces,
        }
    }

    pub fn dims(&self) -> [usize; 2] { [self.width.get(), self.height.get()] }

    pub fn aspect_ratio(&self) -> Number { self.width.get() as Number / self.height.get() as Number }
}

impl Default for RenderOpts {
    fn default() -> Self { Self::new(400, 225, 100, 50) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio() {
        let opts = RenderOpts::new(400, 225, 1, 1);
        assert_eq!(opts.aspect_ratio(), 16. / 9.);
    }

    #[test]
    #[should_panic]
    fn zero_dims_panic() { let _ = RenderOpts::new(0, 225, 1, 1); }
}
