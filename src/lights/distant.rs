// others
use tracing::debug;
// felights
use crate::core::felights::{radians, Float, Spectrum};
use crate::core::geometry::Vector3f;
use crate::core::light::Light;

/// A light so far away that it arrives from the same direction at
/// every point of the surface. The direction is given by an
/// `azimuth` in the xy-plane and an `elevation` above it, both in
/// degrees.
#[derive(Debug, Copy, Clone)]
pub struct DistantLight {
    azimuth: Float,
    elevation: Float,
    color: Spectrum,
    w_light: Vector3f,
}

impl DistantLight {
    pub fn new(azimuth: Float, elevation: Float, color: &Spectrum) -> Self {
        let a: Float = radians(azimuth);
        let e: Float = radians(elevation);
        let w_light = Vector3f {
            x: a.cos() * e.cos(),
            y: a.sin() * e.cos(),
            z: e.sin(),
        };
        debug!("distant light toward {:?}", w_light);
        DistantLight {
            azimuth,
            elevation,
            color: *color,
            w_light,
        }
    }
    pub fn azimuth(&self) -> Float {
        self.azimuth
    }
    pub fn elevation(&self) -> Float {
        self.elevation
    }
}

impl Light for DistantLight {
    fn is_constant(&self) -> bool {
        true
    }
    fn get_light(&self, _x: Float, _y: Float, _z: Float) -> Vector3f {
        self.w_light
    }
    fn get_color(&self) -> Spectrum {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::RGBSpectrum;

    #[test]
    fn straight_up() {
        let light = DistantLight::new(0.0, 90.0, &RGBSpectrum::white());
        let l = light.get_light(3.0, -7.0, 1.5);
        assert!(l.x.abs() < 1e-15);
        assert_eq!(l.y, 0.0);
        assert_eq!(l.z, 1.0);
        assert!(light.is_constant());
    }

    #[test]
    fn azimuth_rotates_in_plane() {
        let light = DistantLight::new(90.0, 0.0, &RGBSpectrum::white());
        let l = light.get_light(0.0, 0.0, 0.0);
        assert!(l.x.abs() < 1e-15);
        assert!((l.y - 1.0).abs() < 1e-15);
        assert_eq!(l.z, 0.0);
        assert_eq!(light.azimuth(), 90.0);
        assert_eq!(light.elevation(), 0.0);
    }

    #[test]
    fn same_vector_everywhere() {
        let light = DistantLight::new(30.0, 45.0, &RGBSpectrum::rgb(1.0, 0.0, 0.0));
        let l0 = light.get_light(0.0, 0.0, 0.0);
        let l1 = light.get_light(100.0, -50.0, 12.0);
        assert_eq!(l0, l1);
        assert!((l0.length() - 1.0).abs() < 1e-15);
        assert_eq!(light.get_color(), RGBSpectrum::rgb(1.0, 0.0, 0.0));
    }
}
