// std
use std::path::{Path, PathBuf};
// others
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
// felights
use rs_felights::core::error::LightError;
use rs_felights::core::felights::{clamp_t, gamma_correct, Float, Spectrum};
use rs_felights::core::geometry::Point3f;
use rs_felights::core::lightmap::{LightMap, LightMapGrid};
use rs_felights::core::logging::init_logging;
use rs_felights::core::paramset::ParamSet;
use rs_felights::lights::make_light;
use rs_felights::VERSION;

/// Evaluate a filter light source at surface points, or over a flat
/// surface as a light map.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// light type: distant, point or spot
    #[arg(short = 'l', long = "light", default_value = "spot")]
    light: String,
    /// light position x,y,z (point and spot)
    #[arg(long = "from", value_parser = parse_triple, allow_hyphen_values = true)]
    from: Option<[Float; 3]>,
    /// point the spot light aims at, x,y,z
    #[arg(long = "to", value_parser = parse_triple, allow_hyphen_values = true)]
    to: Option<[Float; 3]>,
    /// focus of the spot light
    #[arg(long = "specular-exponent")]
    specular_exponent: Option<Float>,
    /// half angle of the spot light cone in degrees
    #[arg(long = "cone-angle")]
    cone_angle: Option<Float>,
    /// direction of a distant light in the xy-plane, degrees
    #[arg(long = "azimuth", allow_hyphen_values = true)]
    azimuth: Option<Float>,
    /// elevation of a distant light above the xy-plane, degrees
    #[arg(long = "elevation", allow_hyphen_values = true)]
    elevation: Option<Float>,
    /// light colour, r,g,b in [0, 1] or #rrggbb
    #[arg(long = "color", value_parser = parse_color)]
    color: Option<Spectrum>,
    /// surface point x,y,z to evaluate the light at (repeatable)
    #[arg(long = "at", value_parser = parse_triple, allow_hyphen_values = true)]
    at: Vec<[Float; 3]>,
    /// evaluate a WIDTHxHEIGHT light map with one sample per unit
    #[arg(long = "map", value_parser = parse_size)]
    map: Option<(usize, usize)>,
    /// height of the flat surface used for the light map
    #[arg(long = "surface-z", default_value = "0", allow_hyphen_values = true)]
    surface_z: Float,
    /// use specified number of threads for the light map
    #[arg(short = 't', long = "nthreads", default_value = "0")]
    nthreads: u8,
    /// write the light map intensity as grayscale PNG
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn parse_triple(s: &str) -> std::result::Result<[Float; 3], String> {
    let values: Vec<Float> = s
        .split(',')
        .map(|v| v.trim().parse::<Float>())
        .collect::<std::result::Result<Vec<Float>, _>>()
        .map_err(|e| format!("{:?}: {}", s, e))?;
    if values.len() != 3 {
        return Err(format!("expected three comma separated values, got {:?}", s));
    }
    Ok([values[0], values[1], values[2]])
}

fn parse_color(s: &str) -> std::result::Result<Spectrum, String> {
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb, got {:?}", s));
        }
        let mut rgb: [u8; 3] = [0; 3];
        for (i, c) in rgb.iter_mut().enumerate() {
            *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| format!("{:?}: {}", s, e))?;
        }
        return Ok(Spectrum::from_srgb8(&rgb));
    }
    let c: [Float; 3] = parse_triple(s)?;
    Ok(Spectrum::rgb(c[0], c[1], c[2]))
}

fn parse_size(s: &str) -> std::result::Result<(usize, usize), String> {
    let mut parts = s.split('x');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) => {
            let width: usize = w.parse().map_err(|e| format!("{:?}: {}", s, e))?;
            let height: usize = h.parse().map_err(|e| format!("{:?}: {}", s, e))?;
            Ok((width, height))
        }
        _ => Err(format!("expected WIDTHxHEIGHT, got {:?}", s)),
    }
}

fn to_point(v: &[Float; 3]) -> Point3f {
    Point3f {
        x: v[0],
        y: v[1],
        z: v[2],
    }
}

fn param_set(args: &Cli) -> ParamSet {
    let mut ps = ParamSet::default();
    if let Some(ref from) = args.from {
        ps.add_point3f(String::from("from"), to_point(from));
    }
    if let Some(ref to) = args.to {
        ps.add_point3f(String::from("to"), to_point(to));
    }
    if let Some(specular_exponent) = args.specular_exponent {
        ps.add_float(String::from("specularExponent"), specular_exponent);
    }
    if let Some(cone_angle) = args.cone_angle {
        ps.add_float(String::from("limitingConeAngle"), cone_angle);
    }
    if let Some(azimuth) = args.azimuth {
        ps.add_float(String::from("azimuth"), azimuth);
    }
    if let Some(elevation) = args.elevation {
        ps.add_float(String::from("elevation"), elevation);
    }
    if let Some(color) = args.color {
        ps.add_rgb_spectrum(String::from("lightingColor"), color);
    }
    ps
}

fn write_intensity_png(map: &LightMap, path: &Path) -> std::result::Result<(), LightError> {
    let buffer: Vec<u8> = map
        .vectors()
        .iter()
        .map(|l| {
            clamp_t(
                255.0 as Float * gamma_correct(clamp_t(l.length(), 0.0, 1.0)) + 0.5,
                0.0 as Float,
                255.0 as Float,
            ) as u8
        })
        .collect();
    image::save_buffer(
        path,
        &buffer,
        map.width() as u32,
        map.height() as u32,
        image::ColorType::L8,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse();
    info!(
        "felights version {} [Detected {} cores]",
        VERSION,
        num_cpus::get()
    );
    let light = make_light(&args.light, &param_set(&args))
        .with_context(|| format!("cannot create {} light", args.light))?;
    let color: Spectrum = light.get_color();
    let linear: Spectrum = light.color(true);
    println!(
        "{} light, constant: {}, color: ({}, {}, {}), linear: ({:.6}, {:.6}, {:.6})",
        args.light,
        light.is_constant(),
        color[0],
        color[1],
        color[2],
        linear[0],
        linear[1],
        linear[2]
    );
    for p in &args.at {
        let l = light.get_light(p[0], p[1], p[2]);
        println!(
            "L({}, {}, {}) = ({:.6}, {:.6}, {:.6}) |L| = {:.6}",
            p[0],
            p[1],
            p[2],
            l.x,
            l.y,
            l.z,
            l.length()
        );
    }
    if let Some((width, height)) = args.map {
        let grid = LightMapGrid {
            x: 0.0,
            y: 0.0,
            dx: 1.0,
            dy: 1.0,
            width,
            height,
        };
        let heights: Vec<Float> = vec![args.surface_z; grid.n_samples()];
        let map = LightMap::compute(&*light, &grid, &heights, args.nthreads)?;
        let max_intensity: Float = map
            .vectors()
            .iter()
            .map(|l| l.length())
            .fold(0.0 as Float, Float::max);
        println!(
            "light map {}x{}, max |L| = {:.6}",
            map.width(),
            map.height(),
            max_intensity
        );
        if let Some(ref path) = args.output {
            write_intensity_png(&map, path)
                .with_context(|| format!("cannot write {:?}", path))?;
            info!("wrote {:?}", path);
        }
    } else if args.output.is_some() {
        bail!("--output needs --map");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples() {
        assert_eq!(parse_triple("1,-2.5, 3").unwrap(), [1.0, -2.5, 3.0]);
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("a,b,c").is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(
            parse_color("#ff0033").unwrap(),
            Spectrum::from_srgb8(&[255, 0, 51])
        );
        assert_eq!(parse_color("1,0.5,0").unwrap(), Spectrum::rgb(1.0, 0.5, 0.0));
        assert!(parse_color("#ff00").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#ffé00").is_err());
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("64x32").unwrap(), (64, 32));
        assert!(parse_size("64").is_err());
        assert!(parse_size("64x32x2").is_err());
    }

    #[test]
    fn flags_become_parameters() {
        let args = Cli::parse_from([
            "rs_felights",
            "--light",
            "spot",
            "--from",
            "0,0,10",
            "--cone-angle",
            "30",
            "--at",
            "0,0,0",
            "--at",
            "-10,0,0",
            "--color",
            "#00ff00",
        ]);
        assert_eq!(args.at.len(), 2);
        let ps = param_set(&args);
        assert_eq!(ps.find_one_float("limitingConeAngle", 90.0), 30.0);
        let light = make_light(&args.light, &ps).unwrap();
        assert!(light.get_light(0.0, 0.0, 0.0).z > 0.99);
        assert_eq!(light.get_color(), Spectrum::rgb(0.0, 1.0, 0.0));
    }
}
