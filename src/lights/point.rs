// others
use tracing::debug;
// felights
use crate::core::felights::{Float, Spectrum};
use crate::core::geometry::{vec3_normalize, Point3f, Vector3f};
use crate::core::light::Light;

/// Isotropic light source at a single position. The light vector
/// has unit length everywhere; there is no distance falloff.
#[derive(Debug, Copy, Clone)]
pub struct PointLight {
    p_light: Point3f,
    color: Spectrum,
}

impl PointLight {
    pub fn new(p_light: &Point3f, color: &Spectrum) -> Self {
        debug!("point light at {:?}", p_light);
        PointLight {
            p_light: *p_light,
            color: *color,
        }
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
    pub fn light_position(&self) -> Point3f {
        self.p_light
    }
}

impl Light for PointLight {
    fn is_constant(&self) -> bool {
        false
    }
    fn get_light(&self, x: Float, y: Float, z: Float) -> Vector3f {
        vec3_normalize(&(self.p_light - Point3f { x, y, z }))
    }
    fn get_color(&self) -> Spectrum {
        self.color
    }
}
