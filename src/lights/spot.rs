// others
use tracing::{debug, warn};
// felights
use crate::core::error::{LightError, Result};
use crate::core::felights::{radians, Float, Spectrum};
use crate::core::geometry::{vec3_dot_vec3f, vec3_normalize, Point3f, Vector3f};
use crate::core::light::Light;
use crate::lights::{check_finite, check_point};

/// A light emitted from a single point and focused into a cone
/// around the direction from `p_light` toward `p_at`.
#[derive(Debug, Copy, Clone)]
pub struct SpotLight {
    p_light: Point3f,
    p_at: Point3f,
    specular_exponent: Float,
    limiting_cone_angle: Float,
    color: Spectrum,
    // unit vector from p_light toward p_at
    s: Vector3f,
    limiting_cos: Float,
}

impl SpotLight {
    /// Builds the light without looking at the inputs. If `p_light`
    /// and `p_at` coincide the direction is not finite and every
    /// evaluation returns the zero vector. See **try_new()** for a
    /// validating constructor.
    pub fn new(
        p_light: &Point3f,
        p_at: &Point3f,
        specular_exponent: Float,
        limiting_cone_angle: Float,
        color: &Spectrum,
    ) -> Self {
        SpotLight {
            p_light: *p_light,
            p_at: *p_at,
            specular_exponent,
            limiting_cone_angle,
            color: *color,
            s: vec3_normalize(&(p_at - p_light)),
            limiting_cos: radians(limiting_cone_angle).cos(),
        }
    }
    /// Like **new()**, but rejects NaN/infinite parameters and a light
    /// pointing at its own position. Unusual shaping parameters
    /// (exponent <= 0, cone angle outside [0, 180]) are accepted
    /// with a warning.
    pub fn try_new(
        p_light: &Point3f,
        p_at: &Point3f,
        specular_exponent: Float,
        limiting_cone_angle: Float,
        color: &Spectrum,
    ) -> Result<Self> {
        check_point("from", p_light)?;
        check_point("to", p_at)?;
        check_finite("specularExponent", specular_exponent)?;
        check_finite("limitingConeAngle", limiting_cone_angle)?;
        if (p_at - p_light).length_squared() == 0.0 as Float {
            return Err(LightError::DegenerateDirection {
                x: p_light.x,
                y: p_light.y,
                z: p_light.z,
            });
        }
        if specular_exponent <= 0.0 as Float {
            warn!(
                specular_exponent = specular_exponent,
                "spot light with non-positive specular exponent"
            );
        }
        if !(0.0..=180.0).contains(&limiting_cone_angle) {
            warn!(
                limiting_cone_angle = limiting_cone_angle,
                "spot light cone angle outside [0, 180] degrees"
            );
        }
        let light = SpotLight::new(p_light, p_at, specular_exponent, limiting_cone_angle, color);
        debug!(
            "spot light at {:?} toward {:?} (exponent {}, cone {} deg)",
            light.p_light, light.p_at, specular_exponent, limiting_cone_angle
        );
        Ok(light)
    }
    pub fn light_x(&self) -> Float {
        self.p_light.x
    }
    pub fn light_y(&self) -> Float {
        self.p_light.y
    }
    pub fn light_z(&self) -> Float {
        self.p_light.z
    }
    pub fn point_at_x(&self) -> Float {
        self.p_at.x
    }
    pub fn point_at_y(&self) -> Float {
        self.p_at.y
    }
    pub fn point_at_z(&self) -> Float {
        self.p_at.z
    }
    pub fn light_position(&self) -> Point3f {
        self.p_light
    }
    pub fn point_at(&self) -> Point3f {
        self.p_at
    }
    /// Light focus.
    pub fn specular_exponent(&self) -> Float {
        self.specular_exponent
    }
    /// Half angle of the cone in degrees.
    pub fn limiting_cone_angle(&self) -> Float {
        self.limiting_cone_angle
    }
    pub fn limiting_cos(&self) -> Float {
        self.limiting_cos
    }
    /// Unit vector the spot is aimed along.
    pub fn direction(&self) -> Vector3f {
        self.s
    }
    pub fn set_light_position(&mut self, p_light: &Point3f) {
        self.p_light = *p_light;
        self.s = vec3_normalize(&(self.p_at - self.p_light));
    }
    pub fn set_point_at(&mut self, p_at: &Point3f) {
        self.p_at = *p_at;
        self.s = vec3_normalize(&(self.p_at - self.p_light));
    }
    pub fn set_specular_exponent(&mut self, specular_exponent: Float) {
        self.specular_exponent = specular_exponent;
    }
    pub fn set_limiting_cone_angle(&mut self, limiting_cone_angle: Float) {
        self.limiting_cone_angle = limiting_cone_angle;
        self.limiting_cos = radians(limiting_cone_angle).cos();
    }
    /// Smooth rolloff toward the cone border for a point whose cosine
    /// to the spot axis is `ls` (`ls > limiting_cos`): close to one
    /// deep inside the cone, zero at the border.
    pub fn edge_falloff(&self, ls: Float) -> Float {
        let mut i_att: Float = self.limiting_cos / ls;
        // (limiting_cos / ls)^64
        i_att *= i_att;
        i_att *= i_att;
        i_att *= i_att;
        i_att *= i_att;
        i_att *= i_att;
        i_att *= i_att;
        1.0 as Float - i_att
    }
}

impl Light for SpotLight {
    fn is_constant(&self) -> bool {
        false
    }
    fn get_light(&self, x: Float, y: Float, z: Float) -> Vector3f {
        let mut l: Vector3f = vec3_normalize(&(self.p_light - Point3f { x, y, z }));
        // cosine between the spot axis and the light-to-surface direction
        let ls: Float = -vec3_dot_vec3f(&l, &self.s);
        // NaN fails the test too and ends up outside the cone
        if ls > self.limiting_cos {
            l *= self.edge_falloff(ls) * ls.powf(self.specular_exponent);
            l
        } else {
            Vector3f::default()
        }
    }
    fn get_color(&self) -> Spectrum {
        self.color
    }
}
