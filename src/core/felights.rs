//! Type definitions of Float and Spectrum, otherwise constants and
//! functions which can be used almost everywhere else in the code.

// std
use std::f64::consts::PI;
// felights
use crate::core::spectrum::RGBSpectrum;

pub type Spectrum = RGBSpectrum;

/// Lighting filters evaluate in double precision.
pub type Float = f64;

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    let r: T;
    if val < low {
        r = low;
    } else if val > high {
        r = high;
    } else {
        r = val;
    }
    r
}

/// Is used to write sRGB-compatible 8-bit image files.
pub fn gamma_correct(value: Float) -> Float {
    if value <= 0.003_130_8 {
        12.92 * value
    } else {
        1.055 as Float * value.powf((1.0 / 2.4) as Float) - 0.055
    }
}

/// Undo the sRGB transfer curve, mapping an encoded component in
/// [0, 1] back into linear RGB.
pub fn inverse_gamma_correct(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) * 1.0 / 1.055).powf(2.4)
    }
}
