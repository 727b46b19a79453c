// std
use std::ops::Index;
// felights
use crate::core::felights::{inverse_gamma_correct, Float};

/// Light colour as three RGB components. Lights keep the colour as
/// given (sRGB encoded, nominally in [0, 1]); use **to_linear()** for
/// filters operating in linear RGB.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RGBSpectrum {
    pub c: [Float; 3],
}

impl RGBSpectrum {
    pub fn new(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }
    pub fn rgb(r: Float, g: Float, b: Float) -> RGBSpectrum {
        RGBSpectrum { c: [r, g, b] }
    }
    pub fn white() -> RGBSpectrum {
        RGBSpectrum::new(1.0 as Float)
    }
    /// Components of an 8-bit colour scaled into [0, 1], still sRGB
    /// encoded.
    pub fn from_srgb8(rgb: &[u8; 3]) -> RGBSpectrum {
        RGBSpectrum::rgb(
            rgb[0] as Float / 255.0,
            rgb[1] as Float / 255.0,
            rgb[2] as Float / 255.0,
        )
    }
    pub fn to_linear(&self) -> RGBSpectrum {
        RGBSpectrum::rgb(
            inverse_gamma_correct(self.c[0]),
            inverse_gamma_correct(self.c[1]),
            inverse_gamma_correct(self.c[2]),
        )
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        &self.c[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb8_scales_into_unit_range() {
        let s = RGBSpectrum::from_srgb8(&[255, 0, 51]);
        assert_eq!(s.c[0], 1.0);
        assert_eq!(s.c[1], 0.0);
        assert!((s.c[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn linear_keeps_black_and_white() {
        let white = RGBSpectrum::white().to_linear();
        assert!((white[0] - 1.0).abs() < 1e-12);
        assert_eq!(RGBSpectrum::default().to_linear(), RGBSpectrum::default());
        // mid grey darkens in linear space
        let grey = RGBSpectrum::new(0.5).to_linear();
        assert!((grey[0] - 0.214_041).abs() < 1e-5);
        assert_eq!(grey[0], grey[2]);
    }

    #[test]
    fn srgb8_to_linear() {
        let s = RGBSpectrum::from_srgb8(&[255, 128, 0]).to_linear();
        assert!((s[0] - 1.0).abs() < 1e-12);
        assert!((s[1] - 0.215_861).abs() < 1e-5);
        assert_eq!(s[2], 0.0);
    }
}
