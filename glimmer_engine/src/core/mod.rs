pub mod colour;
pub mod image;
pub mod types;
