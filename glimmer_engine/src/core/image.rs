use crate::core::types::Colour;
use getset::CopyGetters;
use std::ops::{Deref, Index, IndexMut};

/// An owned 2D buffer of pixels, stored row-major.
#[derive(CopyGetters, Clone, Debug)]
pub struct Image<Col = Colour> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    data: Box<[Col]>,
}

// region Constructors

impl<Col: Clone + Default> Image<Col> {
    /// Creates a new image with the specified dimensions, and the default pixel value
    pub fn new_blank(width: usize, height: usize) -> Self {
        Self::new_from(width, height, vec![Col::default(); width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a buffer of pixels
    ///
    /// # Panics
    /// The length of `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        assert_eq!(data.len(), width * height, "number of pixels does not match dimensions");
        Self { width, height, data }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let data = (0..width * height)
            .map(|i| func(i % width, i / width))
            .collect::<Vec<Col>>();
        Self::new_from(width, height, data)
    }
}

// endregion Constructors

// region Pixel Accessors

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[x + (y * self.width)]
    }
}

impl<Col> IndexMut<(usize, usize)> for Image<Col> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        &mut self.data[x + (y * self.width)]
    }
}

impl<Col> Index<std::ops::RangeFull> for Image<Col> {
    type Output = [Col];

    fn index(&self, _index: std::ops::RangeFull) -> &Self::Output { &self.data }
}

impl<Col> Deref for Image<Col> {
    type Target = [Col];

    fn deref(&self) -> &Self::Target { &self.data }
}

// endregion Pixel Accessors
