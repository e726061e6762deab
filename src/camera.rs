#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewer in map-cell units. Only the heading changes between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub a: f64,   // heading (radians)
    pub fov: f64, // field of view
}

impl Camera {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            a: angle,
            fov: std::f64::consts::FRAC_PI_3, // 60°
        }
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    #[inline]
    pub fn rotate(&mut self, delta: f64) {
        self.a += delta;
    }

    /// Angle of screen column `column` out of `columns`, fanned linearly
    /// across the field of view with column 0 at the left edge.
    #[inline]
    pub fn ray_angle(&self, column: usize, columns: usize) -> f64 {
        let t = column as f64 / columns.max(1) as f64;
        self.a + self.fov * (t - 0.5)
    }
}
