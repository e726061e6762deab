/// Packed RGBA color: byte 0 = red, 1 = green, 2 = blue, 3 = alpha.
pub type Color = u32;

pub const WHITE: Color = 0xFFFF_FFFF;
pub const BLACK: Color = 0xFF00_0000;

/// Opaque color. Channels are narrowed to 8 bits (256 becomes 0).
#[inline]
pub fn pack_color(r: u32, g: u32, b: u32) -> Color {
    pack_color_rgba(r, g, b, 255)
}

#[inline]
pub fn pack_color_rgba(r: u32, g: u32, b: u32, a: u32) -> Color {
    let (r, g, b, a) = (r as u8, g as u8, b as u8, a as u8);
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Splits a packed color back into `(r, g, b, a)`.
#[inline]
pub fn unpack_color(color: Color) -> (u8, u8, u8, u8) {
    (
        (color & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        ((color >> 24) & 0xFF) as u8,
    )
}

/// RGB bytes of a packed color, alpha dropped.
#[inline]
pub fn to_rgb(color: Color) -> [u8; 3] {
    let (r, g, b, _) = unpack_color(color);
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack_color_rgba(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
        assert_eq!(pack_color(255, 255, 255), WHITE);
        assert_eq!(pack_color(0, 0, 0), BLACK);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        for v in 0..=255u8 {
            for &(r, g, b, a) in &[(v, 0, 0, 0), (0, v, 0, 0), (0, 0, v, 0), (0, 0, 0, v), (v, 255 - v, v / 2, 255)] {
                let packed = pack_color_rgba(r as u32, g as u32, b as u32, a as u32);
                assert_eq!(unpack_color(packed), (r, g, b, a));
            }
        }
    }

    #[test]
    fn test_pack_inverts_unpack() {
        let mut c: u32 = 0;
        loop {
            let (r, g, b, a) = unpack_color(c);
            assert_eq!(pack_color_rgba(r as u32, g as u32, b as u32, a as u32), c);
            match c.checked_add(65_521) {
                Some(next) => c = next,
                None => break,
            }
        }
        assert_eq!(unpack_color(u32::MAX), (255, 255, 255, 255));
    }

    #[test]
    fn test_out_of_range_channels_wrap() {
        assert_eq!(pack_color(256, 0, 0), pack_color(0, 0, 0));
        assert_eq!(unpack_color(pack_color_rgba(300, 257, 511, 256)), (44, 1, 255, 0));
    }

    #[test]
    fn test_to_rgb_drops_alpha() {
        assert_eq!(to_rgb(pack_color_rgba(9, 8, 7, 6)), [9, 8, 7]);
    }
}
