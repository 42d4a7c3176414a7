//! Decoded page images and PNG conversion.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::{Error, Result};

/// Pixel payload of an embedded image.
#[derive(Debug, Clone)]
enum ImageData {
    /// Raw 8-bit samples, `width * height * channels` bytes.
    Raw(Vec<u8>),
    /// A complete JPEG stream, decoded on demand.
    Jpeg(Vec<u8>),
}

/// One embedded raster image from a page, with enough channel metadata
/// to decide whether it can be written as a PNG.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Color components per pixel (Gray 1, RGB 3, CMYK 4)
    pub channels: u8,

    /// Alpha components per pixel. Always 0 for PDF image XObjects;
    /// soft masks are stored in a separate SMask stream.
    pub alpha: u8,

    data: ImageData,
}

impl PageImage {
    /// Build an image from raw 8-bit samples.
    pub fn from_raw(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            alpha: 0,
            data: ImageData::Raw(samples),
        }
    }

    /// Build an image from an embedded JPEG stream.
    pub fn from_jpeg(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            alpha: 0,
            data: ImageData::Jpeg(data),
        }
    }

    /// Whether this image is representable as grayscale or RGB PNG.
    ///
    /// Exotic color spaces such as CMYK (4 color channels) fail this
    /// test and are skipped during extraction.
    pub fn is_png_encodable(&self) -> bool {
        self.channels.saturating_sub(self.alpha) < 4
    }

    /// Encode the image as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let decoded = match &self.data {
            ImageData::Jpeg(bytes) => {
                image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
                    .map_err(|e| Error::ImageExtract(format!("JPEG decode failed: {}", e)))?
            }
            ImageData::Raw(samples) => match self.channels {
                1 => GrayImage::from_raw(self.width, self.height, samples.clone())
                    .map(DynamicImage::ImageLuma8)
                    .ok_or_else(|| Error::ImageExtract(self.size_mismatch()))?,
                3 => RgbImage::from_raw(self.width, self.height, samples.clone())
                    .map(DynamicImage::ImageRgb8)
                    .ok_or_else(|| Error::ImageExtract(self.size_mismatch()))?,
                n => {
                    return Err(Error::ImageExtract(format!(
                        "cannot encode {}-channel image as PNG",
                        n
                    )))
                }
            },
        };

        let mut out = Cursor::new(Vec::new());
        decoded
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| Error::ImageExtract(format!("PNG encode failed: {}", e)))?;
        Ok(out.into_inner())
    }

    fn size_mismatch(&self) -> String {
        format!(
            "sample buffer does not match {}x{}x{}",
            self.width, self.height, self.channels
        )
    }
}
