//! Mathematical utilities shared between maze synthesis and rendering.

pub mod vec;

pub use vec::Vec3;
