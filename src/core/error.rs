//! Error types for light construction and evaluation helpers.

use thiserror::Error;

use crate::core::felights::Float;

/// Reasons a light (or a light map) could not be built.
///
/// Per-pixel evaluation never returns an error; these are raised at
/// the configuration boundary only.
#[derive(Error, Debug)]
pub enum LightError {
    /// Light type name not known to **make_light()**
    #[error("unknown light type {0:?}")]
    UnknownLight(String),

    /// Light position and target coincide, the spot direction is undefined
    #[error("light position and target coincide at ({x}, {y}, {z})")]
    DegenerateDirection { x: Float, y: Float, z: Float },

    /// A parameter was NaN or infinite
    #[error("parameter {parameter:?} is not finite ({value})")]
    NonFinite { parameter: String, value: Float },

    /// Height field does not match the requested grid
    #[error("height field holds {found} samples, expected {expected}")]
    HeightField { expected: usize, found: usize },

    /// A light map worker thread panicked
    #[error("light map worker panicked")]
    WorkerPanic,

    /// Writing a diagnostic image failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias using **LightError**.
pub type Result<T> = std::result::Result<T, LightError>;
