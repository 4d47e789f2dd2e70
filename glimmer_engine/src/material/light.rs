use crate::core::types::{Colour, Point2, Point3};
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::texture::{Texture, TextureInstance};
use rand_core::RngCore;
use std::sync::Arc;

/// A simple emissive material for turning a surface into a light.
///
/// Does not scatter.
#[derive(Clone, Debug)]
pub struct DiffuseLightMaterial {
    pub emit: Arc<TextureInstance>,
}

impl DiffuseLightMaterial {
    pub fn new(emit: impl Into<TextureInstance>) -> Self {
        Self {
            emit: Arc::new(emit.into()),
        }
    }
}

impl Material for DiffuseLightMaterial {
    fn scatter(&self, _ray: &Ray, _intersection: &Intersection, _rng: &mut dyn RngCore) -> Option<Scatter> { None }

    fn emitted(&self, uv: Point2, pos: Point3) -> Colour { self.emit.value(uv, pos) }
}
