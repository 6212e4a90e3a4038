//! Binary entry points.

pub mod features;
pub mod normalize;
