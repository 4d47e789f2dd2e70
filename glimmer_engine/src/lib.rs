//! # glimmer_engine
//!
//! An offline Monte-Carlo path tracer: geometric primitives, transform wrappers,
//! a bounding-volume hierarchy for acceleration, materials/textures, and a
//! single-threaded recursive renderer.
//!
//! The entry points are [scene::Scene] + [scene::camera::Camera] fed into
//! [render::renderer::Renderer]; scenes are assembled out of
//! [surface::SurfaceInstance]s and [material::MaterialInstance]s.

pub mod core;
pub mod material;
pub mod render;
pub mod scene;
pub mod shared;
pub mod skybox;
pub mod surface;
pub mod texture;
