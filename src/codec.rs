//! Image codec boundary
//!
//! The directory processor treats decoding, resampling, and re-encoding
//! as an opaque capability behind [`ImageCodec`], so its file-selection
//! and backup logic can be tested with a fake codec that never touches
//! real image bytes.

use std::fs::File;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

use crate::dimensions::Dimensions;
use crate::error::{ImagizerError, Result};

/// Default JPEG re-encode quality (1-100)
const JPEG_QUALITY: u8 = 90;

/// Decode / resize / encode boundary around an image library
pub trait ImageCodec {
    /// In-memory decoded image, alive for one file's processing only
    type Handle;

    /// Decode the image at `path` into memory
    fn decode(&self, path: &Path) -> Result<Self::Handle>;

    /// Intrinsic (width, height) of a decoded image
    fn dimensions(&self, image: &Self::Handle) -> (u32, u32);

    /// Resample the decoded image to exactly the target resolution
    fn resize(&self, image: Self::Handle, target: Dimensions) -> Self::Handle;

    /// Re-encode the image to `path`, in the format implied by its extension
    fn encode(&self, image: &Self::Handle, path: &Path) -> Result<()>;

    /// Read (width, height) from the file's metadata without a full decode
    fn read_dimensions(&self, path: &Path) -> Result<(u32, u32)>;
}

/// Production codec backed by the `image` crate
///
/// Resampling uses Lanczos3, a high-quality filter suited to downscaling
/// photos. JPEG output drops any alpha channel before encoding since the
/// format cannot carry one.
#[derive(Debug)]
pub struct ImageRsCodec {
    filter: FilterType,
    jpeg_quality: u8,
}

impl ImageRsCodec {
    /// Create a codec with the default filter and quality settings
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

impl Default for ImageRsCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for ImageRsCodec {
    type Handle = DynamicImage;

    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        debug!("Decoding image: {:?}", path);
        Ok(image::open(path)?)
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        (image.width(), image.height())
    }

    fn resize(&self, image: DynamicImage, target: Dimensions) -> DynamicImage {
        debug!(
            "Resizing image: {}x{} -> {}",
            image.width(),
            image.height(),
            target
        );
        image.resize_exact(target.width(), target.height(), self.filter)
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        debug!("Encoding image: {:?}", path);

        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension {
            Some("jpg") => {
                let mut output = File::create(path)?;
                let encoder = JpegEncoder::new_with_quality(&mut output, self.jpeg_quality);
                if image.color().has_alpha() {
                    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
                } else {
                    image.write_with_encoder(encoder)?;
                }
            }
            Some("png") => {
                image.save_with_format(path, image::ImageFormat::Png)?;
            }
            other => {
                return Err(ImagizerError::unsupported_format(
                    other.unwrap_or("unknown"),
                    Some(path.to_path_buf()),
                ));
            }
        }

        Ok(())
    }

    fn read_dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        Ok(image::image_dimensions(path)?)
    }
}
