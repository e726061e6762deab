use std::f64::consts::TAU;
use std::path::PathBuf;

use indicatif::ProgressBar;
use log::{debug, info};

use crate::camera::Camera;
use crate::casters::{render_3d, RaySettings};
use crate::config::{RenderConfig, FRAME_COUNT};
use crate::encoder::{write_frame, OutputFormat};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::maze::Map;
use crate::minimap::render_maze;
use crate::palette::Palette;

/// Heading change between frames: one degree, so 360 frames make a full turn.
pub const HEADING_STEP: f64 = TAU / FRAME_COUNT as f64;

/// `00007.ppm` style name for a frame index.
pub fn frame_filename(frame: usize, format: OutputFormat) -> String {
    format!("{:05}.{}", frame, format.extension())
}

/// Everything a frame is drawn from.
#[derive(Debug, Clone)]
pub struct Scene {
    pub map: Map,
    pub palette: Palette,
    pub camera: Camera,
    pub rays: RaySettings,
}

impl Scene {
    /// Checks every wall digit against the palette and the ray limits up front.
    pub fn new(map: Map, palette: Palette, camera: Camera, rays: RaySettings) -> Result<Self> {
        rays.validate()?;
        palette.check_map(&map)?;
        Ok(Self { map, palette, camera, rays })
    }

    /// Clears the frame and draws minimap, visibility cone and 3D view.
    pub fn render(&self, framebuffer: &mut Framebuffer) -> Result<()> {
        framebuffer.clear();
        render_maze(framebuffer, &self.map, &self.palette)?;
        render_3d(framebuffer, &self.map, &self.palette, &self.camera, &self.rays)
    }
}

/// Turns the camera one step per frame and writes each frame to disk.
pub struct Animation {
    pub scene: Scene,
    pub framebuffer: Framebuffer,
    pub frame: usize,
    pub frames: usize,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl Animation {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let scene = Scene::new(
            config.load_map()?,
            config.build_palette(),
            config.build_camera(),
            config.ray_settings(),
        )?;
        let mut framebuffer = Framebuffer::new(config.width, config.height);
        framebuffer.set_background_color(config.background_color());

        Ok(Self {
            scene,
            framebuffer,
            frame: 0,
            frames: config.frames,
            output_dir: config.output_dir.clone(),
            format: config.format,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Renders and writes the next frame, returning its path.
    pub fn step(&mut self) -> Result<PathBuf> {
        self.scene.camera.rotate(HEADING_STEP);
        self.scene.render(&mut self.framebuffer)?;

        let path = self.output_dir.join(frame_filename(self.frame, self.format));
        write_frame(
            &path,
            self.framebuffer.as_slice(),
            self.framebuffer.width,
            self.framebuffer.height,
            self.format,
        )?;
        debug!("frame {} written to {}", self.frame, path.display());

        self.frame += 1;
        Ok(path)
    }

    /// Runs until the last frame, stopping at the first failure.
    pub fn run(&mut self, progress: &ProgressBar) -> Result<Vec<PathBuf>> {
        info!(
            "rendering {} frames at {}x{} into {}",
            self.frames,
            self.framebuffer.width,
            self.framebuffer.height,
            self.output_dir.display()
        );

        let mut written = Vec::with_capacity(self.frames.saturating_sub(self.frame));
        while !self.is_finished() {
            written.push(self.step()?);
            progress.inc(1);
        }

        info!("finished after {} frames", written.len());
        Ok(written)
    }
}
