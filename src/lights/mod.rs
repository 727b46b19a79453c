//! Light sources of the lighting filter primitives.
//!
//! - DistantLight
//! - PointLight
//! - SpotLight
//!
//! ## Distant Lights
//!
//! A distant light, also known as directional light, describes an
//! emitter that deposits illumination from the same direction at
//! every point of the surface. It is the only constant light.
//!
//! ```rust
//! use rs_felights::core::felights::Spectrum;
//! use rs_felights::core::light::Light;
//! use rs_felights::lights::distant::DistantLight;
//!
//! let azimuth = 45.0;
//! let elevation = 30.0;
//! let distant_light = DistantLight::new(azimuth, elevation, &Spectrum::white());
//! assert!(distant_light.is_constant());
//! println!("distant_light = {:?}", distant_light.get_light(0.0, 0.0, 0.0));
//! ```
//!
//! ## Point Lights
//!
//! Isotropic point light source that emits the same amount of light
//! in all directions.
//!
//! ```rust
//! use rs_felights::core::felights::Spectrum;
//! use rs_felights::core::geometry::Point3f;
//! use rs_felights::lights::point::PointLight;
//!
//! let point_light = PointLight::new(&Point3f::new(0.0, 0.0, 50.0), &Spectrum::white());
//! println!("point_light = {:?}", point_light);
//! ```
//!
//! ## Spotlights
//!
//! A point light restricted to a cone aimed at a target. The
//! intensity falls off smoothly toward the border of the cone and is
//! shaped by a specular exponent around the axis.
//!
//! ```rust
//! use rs_felights::core::felights::Spectrum;
//! use rs_felights::core::geometry::Point3f;
//! use rs_felights::core::light::Light;
//! use rs_felights::lights::spot::SpotLight;
//!
//! let from = Point3f::new(0.0, 0.0, 10.0);
//! let to = Point3f::new(0.0, 0.0, 0.0);
//! let spot_light = SpotLight::new(&from, &to, 1.0, 90.0, &Spectrum::white());
//! let l = spot_light.get_light(0.0, 0.0, 0.0);
//! assert!((l.z - 1.0).abs() < 1e-12);
//! ```

pub mod distant;
pub mod point;
pub mod spot;

// std
use std::str::FromStr;
use std::sync::Arc;
// others
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;
// felights
use crate::core::error::{LightError, Result};
use crate::core::felights::{Float, Spectrum};
use crate::core::geometry::Point3f;
use crate::core::light::Light;
use crate::core::paramset::ParamSet;
use crate::lights::distant::DistantLight;
use crate::lights::point::PointLight;
use crate::lights::spot::SpotLight;

/// The light types **make_light()** knows how to build.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LightKind {
    Distant,
    Point,
    Spot,
}

/// Creates a light of the type given by `name` from the parameters
/// found in `param_set`. Missing parameters fall back to the
/// defaults of the lighting filter primitives.
pub fn make_light(name: &str, param_set: &ParamSet) -> Result<Arc<dyn Light + Send + Sync>> {
    let kind: LightKind =
        LightKind::from_str(name).map_err(|_| LightError::UnknownLight(name.to_string()))?;
    let color: Spectrum = param_set.find_one_spectrum("lightingColor", Spectrum::white());
    check_color(&color)?;
    debug!("make_light {} {:?}", kind, color);
    match kind {
        LightKind::Distant => {
            let azimuth: Float = param_set.find_one_float("azimuth", 0.0 as Float);
            let elevation: Float = param_set.find_one_float("elevation", 0.0 as Float);
            check_finite("azimuth", azimuth)?;
            check_finite("elevation", elevation)?;
            Ok(Arc::new(DistantLight::new(azimuth, elevation, &color)))
        }
        LightKind::Point => {
            let from: Point3f = find_position(param_set, "from", ["x", "y", "z"]);
            check_point("from", &from)?;
            Ok(Arc::new(PointLight::new(&from, &color)))
        }
        LightKind::Spot => {
            let from: Point3f = find_position(param_set, "from", ["x", "y", "z"]);
            let to: Point3f =
                find_position(param_set, "to", ["pointsAtX", "pointsAtY", "pointsAtZ"]);
            let specular_exponent: Float =
                param_set.find_one_float("specularExponent", 1.0 as Float);
            let limiting_cone_angle: Float =
                param_set.find_one_float("limitingConeAngle", 90.0 as Float);
            Ok(Arc::new(SpotLight::try_new(
                &from,
                &to,
                specular_exponent,
                limiting_cone_angle,
                &color,
            )?))
        }
    }
}

/// A position is either one point parameter or three scalar
/// attributes; missing coordinates default to zero.
fn find_position(param_set: &ParamSet, point_name: &str, coordinates: [&str; 3]) -> Point3f {
    if param_set.has_point3f(point_name) {
        return param_set.find_one_point3f(point_name, Point3f::default());
    }
    Point3f {
        x: param_set.find_one_float(coordinates[0], 0.0 as Float),
        y: param_set.find_one_float(coordinates[1], 0.0 as Float),
        z: param_set.find_one_float(coordinates[2], 0.0 as Float),
    }
}

pub(crate) fn check_finite(parameter: &str, value: Float) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LightError::NonFinite {
            parameter: parameter.to_string(),
            value,
        })
    }
}

pub(crate) fn check_point(parameter: &str, p: &Point3f) -> Result<()> {
    check_finite(&format!("{}.x", parameter), p.x)?;
    check_finite(&format!("{}.y", parameter), p.y)?;
    check_finite(&format!("{}.z", parameter), p.z)
}

fn check_color(color: &Spectrum) -> Result<()> {
    check_finite("lightingColor.r", color[0])?;
    check_finite("lightingColor.g", color[1])?;
    check_finite("lightingColor.b", color[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::RGBSpectrum;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_parse_from_lowercase_names() {
        for kind in LightKind::iter() {
            assert_eq!(LightKind::from_str(&kind.to_string()).ok(), Some(kind));
        }
        assert_eq!(LightKind::Spot.to_string(), "spot");
        assert!(LightKind::from_str("area").is_err());
    }

    #[test]
    fn unknown_light_is_an_error() {
        match make_light("goniometric", &ParamSet::default()) {
            Err(LightError::UnknownLight(name)) => assert_eq!(name, "goniometric"),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("unexpected light"),
        }
    }

    #[test]
    fn distant_defaults() {
        let light = make_light("distant", &ParamSet::default()).unwrap();
        assert!(light.is_constant());
        let l = light.get_light(0.0, 0.0, 0.0);
        assert_eq!(l.x, 1.0);
        assert_eq!(l.y, 0.0);
        assert_eq!(l.z, 0.0);
        assert_eq!(light.get_color(), RGBSpectrum::white());
    }

    #[test]
    fn point_from_scalar_attributes() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("z"), 2.0);
        ps.add_rgb_spectrum(String::from("lightingColor"), RGBSpectrum::rgb(1.0, 0.0, 0.0));
        let light = make_light("point", &ps).unwrap();
        assert!(!light.is_constant());
        assert_eq!(light.get_light(0.0, 0.0, 0.0).z, 1.0);
        assert_eq!(light.get_color(), RGBSpectrum::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn point_parameter_wins_over_scalars() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("x"), 100.0);
        ps.add_point3f(String::from("from"), Point3f::new(0.0, 0.0, 1.0));
        let light = make_light("point", &ps).unwrap();
        assert_eq!(light.get_light(0.0, 0.0, 0.0).z, 1.0);
    }

    #[test]
    fn spot_with_markup_names() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("z"), 10.0);
        ps.add_float(String::from("pointsAtZ"), 0.0);
        ps.add_float(String::from("limitingConeAngle"), 30.0);
        let light = make_light("spot", &ps).unwrap();
        assert!(!light.is_constant());
        assert!(light.get_light(0.0, 0.0, 0.0).z > 0.99);
        assert_eq!(light.get_light(10.0, 0.0, 0.0).z, 0.0);
    }

    #[test]
    fn spot_at_its_own_target_is_rejected() {
        // both positions default to the origin
        let result = make_light("spot", &ParamSet::default());
        assert!(matches!(result, Err(LightError::DegenerateDirection { .. })));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("azimuth"), Float::NAN);
        assert!(matches!(
            make_light("distant", &ps),
            Err(LightError::NonFinite { .. })
        ));
        let mut ps = ParamSet::default();
        ps.add_rgb_spectrum(String::from("lightingColor"), RGBSpectrum::new(Float::INFINITY));
        assert!(matches!(
            make_light("point", &ps),
            Err(LightError::NonFinite { .. })
        ));
    }
}
