use image::GenericImageView;

use crate::error::ViewerError;

/// The pixel layout of decoded texture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
  Rgb8,
  Rgba8,
}

impl PixelFormat {
  /// Bytes per pixel.
  /// return: The pixel size in bytes.
  pub fn bytes_per_pixel(&self) -> usize {
    match self {
      PixelFormat::Rgb8 => 3,
      PixelFormat::Rgba8 => 4,
    }
  }
}

/// Decoded texture data, ready for the upload step.
#[derive(Debug)]
pub struct ImageData {
  pub format: PixelFormat,
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<u8>,
}

impl ImageData {

  /// Decode a texture from encoded file bytes.
  /// RGB and RGBA images pass through untouched; every other color type
  /// is expanded to RGBA.
  /// param bytes: The encoded image file contents.
  /// return: The decoded image.
  pub fn new_with_bytes(bytes: &[u8]) -> Result<Self, ViewerError> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();

    let (format, pixels) = match img.color() {
      image::ColorType::Rgb8 => (PixelFormat::Rgb8, img.into_bytes()),
      image::ColorType::Rgba8 => (PixelFormat::Rgba8, img.into_bytes()),
      _ => (PixelFormat::Rgba8, img.into_rgba8().into_raw()),
    };

    log::debug!("Decoded a {}x{} {:?} texture.", width, height, format);
    Ok(Self {
      format,
      width,
      height,
      pixels,
    })
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_a_binary_ppm_as_rgb() {
    let ppm = b"P6\n2 1\n255\n\xff\x00\x00\x00\xff\x00";
    let img = ImageData::new_with_bytes(ppm).unwrap();
    assert_eq!(img.width, 2);
    assert_eq!(img.height, 1);
    assert_eq!(img.format, PixelFormat::Rgb8);
    assert_eq!(img.pixels, vec![0xff, 0x00, 0x00, 0x00, 0xff, 0x00]);
  }

  #[test]
  fn garbage_bytes_are_a_decode_error() {
    match ImageData::new_with_bytes(b"not an image") {
      Err(ViewerError::Image(_)) => {},
      other => panic!("expected Image error, got {:?}", other.map(|_| ())),
    }
  }
}
