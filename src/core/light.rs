//! Lighting filters shade a surface derived from an image: every
//! pixel becomes a surface point `(x, y, z)` with the height *z*
//! taken from the image. A light answers, for such a point, which
//! direction the light comes from and how strong it arrives there.

// felights
use crate::core::felights::{Float, Spectrum};
use crate::core::geometry::Vector3f;

pub trait Light {
    /// Returns true if the light vector is the same for every point
    /// of the surface. Callers may then evaluate it once per image
    /// instead of once per pixel.
    fn is_constant(&self) -> bool;
    /// Computes the light vector at `(x, y, z)`. Its direction points
    /// from the surface toward the light, its length is the
    /// attenuated intensity. Must only read immutable state.
    fn get_light(&self, x: Float, y: Float, z: Float) -> Vector3f;
    /// The light colour as it was given (sRGB components).
    fn get_color(&self) -> Spectrum;
    /// The light colour, converted to linear RGB if `linear` is set.
    fn color(&self, linear: bool) -> Spectrum {
        if linear {
            self.get_color().to_linear()
        } else {
            self.get_color()
        }
    }
    /// Computes one row of light vectors starting at `(x, y)`, moving
    /// by `dx` per sample and taking the heights from `z_row`.
    fn get_light_row(&self, x: Float, y: Float, dx: Float, z_row: &[Float]) -> Vec<Vector3f> {
        if self.is_constant() {
            let l: Vector3f = self.get_light(x, y, 0.0 as Float);
            return vec![l; z_row.len()];
        }
        let mut row: Vec<Vector3f> = Vec::with_capacity(z_row.len());
        let mut xi: Float = x;
        for z in z_row {
            row.push(self.get_light(xi, y, *z));
            xi += dx;
        }
        row
    }
}
