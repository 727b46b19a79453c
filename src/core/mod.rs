//! The core types shared by all lights: geometry, colour, the
//! **Light** trait, parameter sets, errors, and the helpers that
//! evaluate a light over a grid of samples.

pub mod animation;
pub mod error;
pub mod felights;
pub mod geometry;
pub mod light;
pub mod lightmap;
pub mod logging;
pub mod paramset;
pub mod spectrum;
