//! Color model for drawable tints.

mod color;

pub use color::Color;
