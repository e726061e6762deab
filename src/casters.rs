use log::trace;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::color::{pack_color, Color};
use crate::error::{RenderError, Result};
use crate::framebuffer::{Framebuffer, ScreenScale};
use crate::maze::{Cell, Map};
use crate::palette::Palette;

/// Marching increment in map cells. Hit distances are only known to this precision.
pub const RAY_STEP: f64 = 0.01;
/// Rays that travel this far without touching a wall draw no column.
pub const MAX_RAY_DISTANCE: f64 = 10.0;
/// Upper bound on samples per ray accepted from configuration.
pub const MAX_RAY_SAMPLES: f64 = 1.0e7;

/// How a hit distance becomes a column height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Projection {
    /// `height / distance`; columns bulge toward the screen edges.
    #[default]
    Fisheye,
    /// Distance measured along the heading, `height / (distance * cos(angle - heading))`.
    Corrected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySettings {
    pub step: f64,
    pub max_distance: f64,
    pub projection: Projection,
    pub cone_color: Color,
}

impl Default for RaySettings {
    fn default() -> Self {
        Self {
            step: RAY_STEP,
            max_distance: MAX_RAY_DISTANCE,
            projection: Projection::Fisheye,
            cone_color: pack_color(160, 160, 160),
        }
    }
}

impl RaySettings {
    /// Rejects a step or range for which marching would never end.
    pub fn validate(&self) -> Result<()> {
        let step_ok = self.step.is_finite() && self.step > 0.0;
        let range_ok = self.max_distance.is_finite();
        if step_ok && range_ok && self.max_distance / self.step <= MAX_RAY_SAMPLES {
            return Ok(());
        }
        Err(RenderError::RaySettings {
            step: self.step,
            max_distance: self.max_distance,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersect {
    pub distance: f64,
    /// Palette index of the wall that was hit.
    pub impact: u8,
    pub cell: (usize, usize),
}

/// Marches from the camera along `a`, returning the first wall cell reached.
/// With `draw` set, every visited sample (the hit one included) is painted
/// on the minimap in the cone color.
pub fn cast_ray(
    framebuffer: &mut Framebuffer,
    map: &Map,
    camera: &Camera,
    a: f64,
    scale: ScreenScale,
    settings: &RaySettings,
    draw: bool,
) -> Option<Intersect> {
    if !(settings.step > 0.0) || !settings.max_distance.is_finite() {
        return None;
    }
    let (sin, cos) = a.sin_cos();

    let mut n: u64 = 0;
    loop {
        // Multiplying instead of accumulating keeps `d` free of drift.
        let d = n as f64 * settings.step;
        if d >= settings.max_distance {
            return None;
        }

        let x = camera.pos.x + d * cos;
        let y = camera.pos.y + d * sin;

        if draw {
            let (px, py) = scale.to_pixel(x, y);
            framebuffer.set_pixel_color(px, py, settings.cone_color);
        }

        let i = x.floor() as i64;
        let j = y.floor() as i64;
        if let Some(Cell::Wall(impact)) = map.cell(i, j) {
            return Some(Intersect {
                distance: d,
                impact,
                cell: (i as usize, j as usize),
            });
        }

        n += 1;
    }
}

/// Projected wall height in pixels. A zero distance saturates to `usize::MAX`.
pub fn column_height(
    screen_height: usize,
    distance: f64,
    angle: f64,
    heading: f64,
    projection: Projection,
) -> usize {
    let depth = match projection {
        Projection::Fisheye => distance,
        Projection::Corrected => distance * (angle - heading).cos(),
    };
    (screen_height as f64 / depth) as usize
}

/// Casts one ray per column of the right half of the frame, painting the
/// cone on the minimap and a vertically centered wall column per hit.
pub fn render_3d(
    framebuffer: &mut Framebuffer,
    map: &Map,
    palette: &Palette,
    camera: &Camera,
    settings: &RaySettings,
) -> Result<()> {
    let scale = ScreenScale::new(framebuffer.width, framebuffer.height, map.width(), map.height());
    let num_rays = framebuffer.width / 2;
    let hh = (framebuffer.height / 2) as i64;

    for i in 0..num_rays {
        let ray_angle = camera.ray_angle(i, num_rays);

        let Some(intersect) = cast_ray(framebuffer, map, camera, ray_angle, scale, settings, true)
        else {
            continue;
        };

        let color = palette.resolve(intersect.impact)?;
        let stake_height = column_height(
            framebuffer.height,
            intersect.distance,
            ray_angle,
            camera.a,
            settings.projection,
        );
        let half_stake = i64::try_from(stake_height / 2).unwrap_or(i64::MAX);
        trace!(
            "column {}: hit {:?} at {:.2}, height {}",
            i, intersect.cell, intersect.distance, stake_height
        );

        framebuffer.fill_rect((num_rays + i) as i64, hh - half_stake, 1, stake_height, color);
    }

    Ok(())
}
