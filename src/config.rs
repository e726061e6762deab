//! Render settings, loadable from a RON file.
//!
//! Every field has a default, so a config file only needs the values it changes.
//! With no file at all the defaults describe the stock 360-frame rotation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::casters::{Projection, RaySettings, MAX_RAY_DISTANCE, RAY_STEP};
use crate::color::{pack_color, Color};
use crate::encoder::OutputFormat;
use crate::error::Result;
use crate::maze::{load_map, Map, DEFAULT_MAP};
use crate::palette::Palette;

/// Frames in one full turn of the camera.
pub const FRAME_COUNT: usize = 360;
pub const SCREEN_WIDTH: usize = 1024;
pub const SCREEN_HEIGHT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x: 3.456,
            y: 2.345,
            angle: 1.523,
            fov: std::f64::consts::FRAC_PI_3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaletteConfig {
    /// `count` seeded random colors.
    Random { count: usize, seed: u64 },
    /// Explicit RGB triples, index = wall digit.
    Fixed(Vec<(u8, u8, u8)>),
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig::Random { count: 10, seed: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub ray_step: f64,
    pub max_distance: f64,
    pub projection: Projection,
    pub camera: CameraConfig,
    pub background: (u8, u8, u8),
    pub cone_color: (u8, u8, u8),
    pub palette: PaletteConfig,
    pub map: Vec<String>,
    /// Text map; replaces `map` when set.
    pub map_file: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            frames: FRAME_COUNT,
            ray_step: RAY_STEP,
            max_distance: MAX_RAY_DISTANCE,
            projection: Projection::Fisheye,
            camera: CameraConfig::default(),
            background: (255, 255, 255),
            cone_color: (160, 160, 160),
            palette: PaletteConfig::default(),
            map: DEFAULT_MAP.iter().map(|r| r.to_string()).collect(),
            map_file: None,
            output_dir: PathBuf::from("."),
            format: OutputFormat::Ppm,
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    pack_color(r as u32, g as u32, b as u32)
}

impl RenderConfig {
    pub fn load_map(&self) -> Result<Map> {
        match &self.map_file {
            Some(path) => load_map(path),
            None => Map::from_rows(&self.map),
        }
    }

    pub fn build_palette(&self) -> Palette {
        match &self.palette {
            PaletteConfig::Random { count, seed } => Palette::random(*count, *seed),
            PaletteConfig::Fixed(colors) => Palette::new(colors.iter().copied().map(rgb).collect()),
        }
    }

    pub fn build_camera(&self) -> Camera {
        let c = self.camera;
        Camera::new(c.x, c.y, c.angle).with_fov(c.fov)
    }

    pub fn ray_settings(&self) -> RaySettings {
        RaySettings {
            step: self.ray_step,
            max_distance: self.max_distance,
            projection: self.projection,
            cone_color: rgb(self.cone_color),
        }
    }

    pub fn background_color(&self) -> Color {
        rgb(self.background)
    }
}

/// Load a render config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

pub fn load_config_from_str(s: &str) -> Result<RenderConfig> {
    Ok(ron::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn test_defaults_match_stock_run() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height, config.frames), (1024, 512, 360));
        assert_eq!(config.ray_step, 0.01);
        assert_eq!(config.max_distance, 10.0);
        assert_eq!(config.background_color(), crate::color::WHITE);
        let map = config.load_map().unwrap();
        assert_eq!((map.width(), map.height()), (16, 16));
        assert!(config.build_palette().check_map(&map).is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config_from_str(
            "(width: 64, height: 32, frames: 2, projection: Corrected, camera: (x: 1.5), format: Png)",
        )
        .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.frames, 2);
        assert_eq!(config.projection, Projection::Corrected);
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.camera.x, 1.5);
        assert_eq!(config.camera.y, 2.345);
        assert_eq!(config.map.len(), 16);
    }

    #[test]
    fn test_fixed_palette_and_map() {
        let config = load_config_from_str(
            r#"(palette: Fixed([(255, 0, 0), (0, 0, 255)]), map: ["1 ", " 0"])"#,
        )
        .unwrap();
        let palette = config.build_palette();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.resolve(1).unwrap(), pack_color(0, 0, 255));
        let map = config.load_map().unwrap();
        assert_eq!((map.width(), map.height()), (2, 2));
    }

    #[test]
    fn test_unbounded_ray_limits_are_rejected() {
        for extra in ["max_distance: inf", "ray_step: NaN", "ray_step: 0.0"] {
            let config = load_config_from_str(&format!(
                r#"(width: 32, height: 16, map: ["  ", "  "], {})"#,
                extra
            ))
            .unwrap();
            match crate::animation::Animation::new(&config) {
                Err(RenderError::RaySettings { .. }) => {}
                Err(other) => panic!("{}: unexpected error {:?}", extra, other),
                Ok(_) => panic!("{}: accepted", extra),
            }
        }
    }

    #[test]
    fn test_bad_config_is_parse_error() {
        match load_config_from_str("(width: \"wide\")") {
            Err(RenderError::Config(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }
}
