//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate, for the post-hook "save the
//! chart" use case.

use crate::error::Result;
use crate::surface::Surface;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for surface output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a surface to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(surface: &Surface, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(surface.pixels())?;

        Ok(())
    }

    /// Encode a surface to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(surface: &Surface) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, surface.width(), surface.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(surface.pixels())?;
        }

        Ok(buffer)
    }
}
