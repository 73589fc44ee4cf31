//! Core math and support types shared by every system.

pub mod color;
pub mod rng;
pub mod vec2;

pub use color::Rgba;
pub use vec2::Vec2;
