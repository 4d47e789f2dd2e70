use crate::skybox::SkyboxInstance;
use crate::surface::SurfaceInstance;
use getset::Getters;

pub mod camera;
pub mod presets;

/// Everything a renderer needs to trace rays against: the root surface
/// (usually a BVH or a list over the whole scene) and the sky behind it
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Scene {
    root: SurfaceInstance,
    skybox: SkyboxInstance,
}

impl Scene {
    pub fn new(root: impl Into<SurfaceInstance>, skybox: impl Into<SkyboxInstance>) -> Self {
        Self {
            root: root.into(),
            skybox: skybox.into(),
        }
    }
}
