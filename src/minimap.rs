use crate::error::Result;
use crate::framebuffer::{Framebuffer, ScreenScale};
use crate::maze::Map;
use crate::palette::Palette;

/// Screen rectangle `(x, y, w, h)` covered by map cell `(i, j)`.
#[inline]
pub fn cell_rect(i: usize, j: usize, scale: ScreenScale) -> (i64, i64, usize, usize) {
    (
        (i * scale.rect_w) as i64,
        (j * scale.rect_h) as i64,
        scale.rect_w,
        scale.rect_h,
    )
}

/// Draws every wall cell of the map into the left half of the frame.
pub fn render_maze(framebuffer: &mut Framebuffer, map: &Map, palette: &Palette) -> Result<()> {
    let scale = ScreenScale::new(framebuffer.width, framebuffer.height, map.width(), map.height());

    for (col_index, row_index, digit) in map.walls() {
        let color = palette.resolve(digit)?;
        let (xo, yo, w, h) = cell_rect(col_index, row_index, scale);
        framebuffer.fill_rect(xo, yo, w, h, color);
    }

    Ok(())
}
