use crate::color::{Color, WHITE};

/// Fills `[x, x+w) × [y, y+h)` of a row-major buffer with `color`.
/// Cells outside `[0, buf_w) × [0, buf_h)` are skipped, never clamped to the edge.
#[allow(clippy::too_many_arguments)]
pub fn draw_rect(
    buffer: &mut [Color],
    buf_w: usize,
    buf_h: usize,
    x: i64,
    y: i64,
    w: usize,
    h: usize,
    color: Color,
) {
    assert_eq!(buffer.len(), buf_w * buf_h, "frame buffer size mismatch");

    let w = i64::try_from(w).unwrap_or(i64::MAX);
    let h = i64::try_from(h).unwrap_or(i64::MAX);
    let buf_w_i = i64::try_from(buf_w).unwrap_or(i64::MAX);
    let buf_h_i = i64::try_from(buf_h).unwrap_or(i64::MAX);

    // Only the visible part is walked; equivalent to testing every cell.
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(w).min(buf_w_i);
    let y1 = y.saturating_add(h).min(buf_h_i);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for py in y0 as usize..y1 as usize {
        let row = py * buf_w;
        buffer[row + x0 as usize..row + x1 as usize].fill(color);
    }
}

/// Pixel size of one map cell on the minimap. The left half of the frame
/// holds the minimap, so the horizontal scale uses twice the map width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenScale {
    pub rect_w: usize,
    pub rect_h: usize,
}

impl ScreenScale {
    pub fn new(buf_w: usize, buf_h: usize, map_w: usize, map_h: usize) -> Self {
        Self {
            rect_w: buf_w / (map_w * 2).max(1),
            rect_h: buf_h / map_h.max(1),
        }
    }

    /// Continuous map coordinates to a pixel position.
    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * self.rect_w as f64).floor() as i64,
            (y * self.rect_h as f64).floor() as i64,
        )
    }
}

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: usize,
    pub height: usize,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let bg = WHITE;
        Self {
            color_buffer: vec![bg; width * height],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_background_color(&mut self, c: Color) {
        self.background_color = c;
    }

    /// Out-of-range coordinates are dropped.
    #[inline]
    pub fn set_pixel_color(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.color_buffer[x as usize + y as usize * self.width] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[x + y * self.width];
        }
        self.background_color
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: usize, h: usize, color: Color) {
        draw_rect(&mut self.color_buffer, self.width, self.height, x, y, w, h, color);
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.color_buffer
    }
}
