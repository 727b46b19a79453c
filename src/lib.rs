//! # felights
//!
//! Light sources for the lighting primitives of an image filter
//! pipeline (diffuse and specular lighting). For every surface point
//! `(x, y, z)` of a filtered image a light computes a **light
//! vector**: its direction points toward the light, its length is
//! the intensity arriving there.
//!
//! The lights live in [lights]; they all implement the
//! [Light][light] trait. Lights are immutable and `Send + Sync`, so a
//! filter may evaluate one light from many threads; see
//! [LightMap][lightmap] for a tiled, multi-threaded evaluation over a
//! height field.
//!
//! ```rust
//! use rs_felights::core::light::Light;
//! use rs_felights::core::paramset::ParamSet;
//! use rs_felights::core::geometry::Point3f;
//! use rs_felights::lights::make_light;
//!
//! let mut params = ParamSet::default();
//! params.add_point3f(String::from("from"), Point3f::new(0.0, 0.0, 10.0));
//! params.add_float(String::from("limitingConeAngle"), 30.0);
//! let spot = make_light("spot", &params).unwrap();
//! let l = spot.get_light(0.0, 0.0, 0.0);
//! assert!(l.z > 0.99);
//! ```
//!
//! [lights]: lights/index.html
//! [light]: core/light/trait.Light.html
//! [lightmap]: core/lightmap/struct.LightMap.html

#[macro_use]
extern crate impl_ops;

pub mod blockqueue;
pub mod core;
pub mod lights;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
