//! Image handling for the tongue sample collector.
//!
//! Thin layer over the `image` crate: decode camera frames into packed
//! [`Image`]s, crop and resize them, and write JPEG samples.

pub mod convert;
pub mod error;
pub mod image;

pub use convert::{image_to_u32, yuyv_to_rgb};
pub use error::ImageError;
pub use image::{Image, PixelFormat};

use {crates_image::ImageEncoder, std::path::Path};

/// Decodes an image from raw bytes (JPEG, PNG, ...).
///
/// Grayscale inputs stay single-channel; everything else is converted to RGB8.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    let img = crates_image::load_from_memory(data)?;
    Ok(Image::from_dynamic(img))
}

/// Encodes an `Image` as JPEG bytes.
///
/// The `quality` parameter controls JPEG compression (1-100, higher = better quality).
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    let color_type = match image.format {
        PixelFormat::Luma8 => crates_image::ExtendedColorType::L8,
        PixelFormat::Rgb8 => crates_image::ExtendedColorType::Rgb8,
    };

    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            &image.data,
            image.width() as u32,
            image.height() as u32,
            color_type,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;

    Ok(buffer)
}

/// Encodes `image` as JPEG and writes it to `path`, replacing any existing file.
///
/// The parent directory must exist.
pub fn save_jpeg(image: &Image, path: &Path, quality: u8) -> Result<(), ImageError> {
    let jpeg = encode_jpeg(image, quality)?;
    std::fs::write(path, jpeg)?;
    Ok(())
}
