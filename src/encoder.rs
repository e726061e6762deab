use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{to_rgb, Color};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Binary portable pixmap (P6).
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

/// Packed RGB bytes of the whole frame, row-major, alpha dropped.
fn rgb_bytes(image: &[Color]) -> Vec<u8> {
    image.iter().flat_map(|&c| to_rgb(c)).collect()
}

/// P6 file contents: text header then one RGB triplet per pixel.
pub fn encode_ppm(image: &[Color], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(image.len(), width * height, "frame buffer size mismatch");

    let header = format!("P6\n{} {}\n255\n", width, height);
    let mut bytes = Vec::with_capacity(header.len() + image.len() * 3);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend(image.iter().flat_map(|&c| to_rgb(c)));
    bytes
}

/// Writes the frame as a binary PPM, replacing any existing file. The frame
/// is assembled in memory and handed to the OS in a single write.
pub fn write_image<P: AsRef<Path>>(path: P, image: &[Color], width: usize, height: usize) -> Result<()> {
    let bytes = encode_ppm(image, width, height);
    fs::write(path, bytes)?;
    Ok(())
}

pub fn write_png<P: AsRef<Path>>(path: P, image: &[Color], width: usize, height: usize) -> Result<()> {
    assert_eq!(image.len(), width * height, "frame buffer size mismatch");

    image::save_buffer_with_format(
        path,
        &rgb_bytes(image),
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

pub fn write_frame<P: AsRef<Path>>(
    path: P,
    image: &[Color],
    width: usize,
    height: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Ppm => write_image(path, image, width, height),
        OutputFormat::Png => write_png(path, image, width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack_color;
    use crate::error::RenderError;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("raymarch_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_ppm_exact_bytes() {
        let red = pack_color(255, 0, 0);
        let path = temp_path("red.ppm");
        write_image(&path, &[red; 4], 2, 2).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).ok();

        let mut expected = b"P6\n2 2\n255\n".to_vec();
        for _ in 0..4 {
            expected.extend_from_slice(&[255, 0, 0]);
        }
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_ppm_row_major_drops_alpha() {
        let image = [
            crate::color::pack_color_rgba(1, 2, 3, 0),
            pack_color(4, 5, 6),
            pack_color(7, 8, 9),
        ];
        let bytes = encode_ppm(&image, 3, 1);
        assert_eq!(&bytes[..11], b"P6\n3 1\n255\n");
        assert_eq!(&bytes[bytes.len() - 9..], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_write_overwrites() {
        let path = temp_path("overwrite.ppm");
        fs::write(&path, vec![0u8; 1000]).unwrap();
        write_image(&path, &[pack_color(1, 1, 1)], 1, 1).unwrap();
        let len = fs::metadata(&path).unwrap().len();
        fs::remove_file(&path).ok();
        assert_eq!(len, b"P6\n1 1\n255\n".len() as u64 + 3);
    }

    #[test]
    #[should_panic(expected = "frame buffer size mismatch")]
    fn test_size_mismatch_panics() {
        encode_ppm(&[0; 3], 2, 2);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let path = temp_path("missing_dir").join("nested").join("frame.ppm");
        match write_image(&path, &[0; 1], 1, 1) {
            Err(RenderError::Io(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_png_signature() {
        let path = temp_path("frame.png");
        write_frame(&path, &[pack_color(0, 0, 255); 6], 3, 2, OutputFormat::Png).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
