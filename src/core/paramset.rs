//! Bundle up light parameters and their values in a generic way.
//!
//! Whatever reads filter markup (or command line flags) collects the
//! attributes of a light element into a **ParamSet**; the light
//! factory then looks them up by name, falling back to defaults.

// felights
use crate::core::felights::{Float, Spectrum};
use crate::core::geometry::Point3f;

#[derive(Debug, Clone)]
pub struct ParamSetItem<T> {
    pub name: String,
    pub values: Vec<T>,
    pub n_values: usize,
}

#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pub floats: Vec<ParamSetItem<Float>>,
    pub point3fs: Vec<ParamSetItem<Point3f>>,
    pub spectra: Vec<ParamSetItem<Spectrum>>,
}

impl ParamSet {
    /// Later additions replace earlier ones with the same name.
    pub fn add_float(&mut self, name: String, value: Float) {
        erase(&mut self.floats, &name);
        self.floats.push(ParamSetItem::<Float> {
            name,
            values: vec![value],
            n_values: 1_usize,
        });
    }
    pub fn add_point3f(&mut self, name: String, value: Point3f) {
        erase(&mut self.point3fs, &name);
        self.point3fs.push(ParamSetItem::<Point3f> {
            name,
            values: vec![value],
            n_values: 1_usize,
        });
    }
    pub fn add_rgb_spectrum(&mut self, name: String, value: Spectrum) {
        erase(&mut self.spectra, &name);
        self.spectra.push(ParamSetItem::<Spectrum> {
            name,
            values: vec![value],
            n_values: 1_usize,
        });
    }
    pub fn find_one_float(&self, name: &str, d: Float) -> Float {
        lookup_one(&self.floats, name, d)
    }
    pub fn find_one_point3f(&self, name: &str, d: Point3f) -> Point3f {
        lookup_one(&self.point3fs, name, d)
    }
    pub fn find_one_spectrum(&self, name: &str, d: Spectrum) -> Spectrum {
        lookup_one(&self.spectra, name, d)
    }
    pub fn has_point3f(&self, name: &str) -> bool {
        self.point3fs.iter().any(|v| v.name == name)
    }
}

/// Only single values count; lists fall back to the default.
fn lookup_one<T>(vec: &[ParamSetItem<T>], name: &str, d: T) -> T
where
    T: Clone,
{
    for v in vec {
        if v.name == name && v.n_values == 1_usize {
            return v.values[0].clone();
        }
    }
    d
}

fn erase<T>(vec: &mut Vec<ParamSetItem<T>>, name: &str) {
    vec.retain(|v| v.name != name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::RGBSpectrum;

    #[test]
    fn defaults_when_missing() {
        let ps = ParamSet::default();
        assert_eq!(ps.find_one_float("azimuth", 3.0), 3.0);
        assert_eq!(ps.find_one_point3f("from", Point3f::default()), Point3f::default());
        assert_eq!(
            ps.find_one_spectrum("lightingColor", RGBSpectrum::white()),
            RGBSpectrum::white()
        );
        assert!(!ps.has_point3f("from"));
    }

    #[test]
    fn later_value_wins() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("limitingConeAngle"), 30.0);
        ps.add_float(String::from("limitingConeAngle"), 45.0);
        assert_eq!(ps.floats.len(), 1);
        assert_eq!(ps.find_one_float("limitingConeAngle", 90.0), 45.0);
        ps.add_point3f(String::from("from"), Point3f::new(1.0, 2.0, 3.0));
        ps.add_point3f(String::from("from"), Point3f::new(4.0, 5.0, 6.0));
        assert!(ps.has_point3f("from"));
        assert_eq!(
            ps.find_one_point3f("from", Point3f::default()),
            Point3f::new(4.0, 5.0, 6.0)
        );
    }

    #[test]
    fn lists_fall_back_to_default() {
        let mut ps = ParamSet::default();
        ps.floats.push(ParamSetItem {
            name: String::from("elevation"),
            values: vec![1.0, 2.0],
            n_values: 2,
        });
        assert_eq!(ps.find_one_float("elevation", 0.0), 0.0);
    }

    #[test]
    fn names_are_per_type() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("from"), 1.0);
        assert!(!ps.has_point3f("from"));
        ps.add_rgb_spectrum(String::from("lightingColor"), RGBSpectrum::rgb(1.0, 0.0, 0.0));
        assert_eq!(ps.find_one_float("lightingColor", 2.0), 2.0);
    }
}
