//! Types shared with the GPU rendering layer.

pub mod vertex;

pub use vertex::Vertex;
