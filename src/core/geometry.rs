//! Points and vectors in the user space of a filtered image.
//!
//! A **point** is a location on (or above) the filtered surface. The
//! *x* and *y* axes follow the image, *z* is the surface height. A
//! **vector** is a direction with a magnitude; light vectors returned
//! by the lights are vectors pointing from the surface toward the
//! light.
//!
//! ```rust
//! use rs_felights::core::geometry::{Point3f, Vector3f};
//!
//!     let origin = Point3f::default();
//!     let light = Point3f {
//!         x: 0.0,
//!         y: 0.0,
//!         z: 10.0,
//!     };
//!     let l: Vector3f = light - origin;
//!
//!     println!("l = {:?}", l);
//! ```

// std
use std::ops;
// felights
use crate::core::felights::Float;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
}

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

// no zero check, a zero divisor propagates as inf/NaN
impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x / b,
        y: a.y / b,
        z: a.z / b,
    }
});

impl_op!(*= |a: &mut Vector3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value of one means they are
/// codirectional.
pub fn vec3_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Compute a new vector pointing in the same direction but with unit
/// length. A zero vector yields non-finite components.
pub fn vec3_normalize(v: &Vector3f) -> Vector3f {
    *v / v.length()
}
