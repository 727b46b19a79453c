//! Hooks for whatever animates light attributes.
//!
//! Lights themselves are immutable. An animation engine changes the
//! attributes of a light element and then tells its dependents that a
//! base value changed; a **LightSource** reacts by building a new
//! light from its current parameters and swapping it in. Filter
//! passes that already hold the previous light keep using it.

// std
use std::sync::{Arc, RwLock};
// others
use tracing::{debug, warn};
// felights
use crate::core::error::Result;
use crate::core::felights::{Float, Spectrum};
use crate::core::geometry::Point3f;
use crate::core::light::Light;
use crate::core::paramset::ParamSet;
use crate::lights::make_light;

/// Receives notifications that an animated attribute or property of
/// `target` got a new base value.
pub trait AnimationTargetListener {
    fn base_value_changed(
        &self,
        target: &str,
        namespace: Option<&str>,
        local_name: &str,
        is_css: bool,
    );
}

/// A light together with the parameters it was built from.
pub struct LightSource {
    name: String,
    params: RwLock<ParamSet>,
    light: RwLock<Arc<dyn Light + Send + Sync>>,
}

impl LightSource {
    pub fn new(name: &str, params: ParamSet) -> Result<LightSource> {
        let light = make_light(name, &params)?;
        Ok(LightSource {
            name: name.to_string(),
            params: RwLock::new(params),
            light: RwLock::new(light),
        })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The light to use for the next filter pass.
    pub fn light(&self) -> Arc<dyn Light + Send + Sync> {
        let light = self.light.read().unwrap_or_else(|e| e.into_inner());
        (*light).clone()
    }
    /// Changes a parameter. The light is not rebuilt until
    /// **rebuild()** runs or a base value change is reported.
    pub fn set_float(&self, name: &str, value: Float) {
        let mut params = self.params.write().unwrap_or_else(|e| e.into_inner());
        params.add_float(name.to_string(), value);
    }
    pub fn set_point3f(&self, name: &str, value: Point3f) {
        let mut params = self.params.write().unwrap_or_else(|e| e.into_inner());
        params.add_point3f(name.to_string(), value);
    }
    pub fn set_color(&self, value: Spectrum) {
        let mut params = self.params.write().unwrap_or_else(|e| e.into_inner());
        params.add_rgb_spectrum(String::from("lightingColor"), value);
    }
    /// Builds a new light from the current parameters and replaces
    /// the old one. On error the old light stays in place.
    pub fn rebuild(&self) -> Result<()> {
        let new_light = {
            let params = self.params.read().unwrap_or_else(|e| e.into_inner());
            make_light(&self.name, &params)?
        };
        let mut light = self.light.write().unwrap_or_else(|e| e.into_inner());
        *light = new_light;
        Ok(())
    }
}

impl AnimationTargetListener for LightSource {
    fn base_value_changed(
        &self,
        target: &str,
        namespace: Option<&str>,
        local_name: &str,
        is_css: bool,
    ) {
        debug!(
            "base value of {:?} changed on {} (namespace {:?}, css {})",
            local_name, target, namespace, is_css
        );
        if let Err(e) = self.rebuild() {
            warn!("keeping previous {} light: {}", self.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vector3f;

    fn spot_params() -> ParamSet {
        let mut ps = ParamSet::default();
        ps.add_point3f(String::from("from"), Point3f::new(0.0, 0.0, 10.0));
        ps.add_point3f(String::from("to"), Point3f::default());
        ps.add_float(String::from("limitingConeAngle"), 60.0);
        ps
    }

    #[test]
    fn rebuilds_on_notification() {
        let source = LightSource::new("spot", spot_params()).unwrap();
        assert_eq!(source.name(), "spot");
        let before = source.light();
        // 45 degrees off the axis is inside a 60 degree cone
        assert!(before.get_light(10.0, 0.0, 0.0).length() > 0.0);
        source.set_float("limitingConeAngle", 30.0);
        // not applied until notified
        assert!(source.light().get_light(10.0, 0.0, 0.0).length() > 0.0);
        source.base_value_changed("spot1", None, "limitingConeAngle", false);
        let after = source.light();
        assert_eq!(after.get_light(10.0, 0.0, 0.0), Vector3f::default());
        // a pass holding the old light is unaffected
        assert!(before.get_light(10.0, 0.0, 0.0).length() > 0.0);
    }

    #[test]
    fn invalid_change_keeps_previous_light() {
        let source = LightSource::new("spot", spot_params()).unwrap();
        source.set_point3f("to", Point3f::new(0.0, 0.0, 10.0));
        assert!(source.rebuild().is_err());
        source.base_value_changed("spot1", None, "pointsAtZ", false);
        let l = source.light().get_light(0.0, 0.0, 0.0);
        assert!(l.z > 0.0);
    }

    #[test]
    fn color_change() {
        let source = LightSource::new("distant", ParamSet::default()).unwrap();
        source.set_color(Spectrum::rgb(0.0, 1.0, 0.0));
        source.base_value_changed(
            "light",
            Some("http://www.w3.org/2000/svg"),
            "lighting-color",
            true,
        );
        assert_eq!(source.light().get_color(), Spectrum::rgb(0.0, 1.0, 0.0));
    }
}
