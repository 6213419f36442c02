use {
    crate::ImageError,
    crates_image::{DynamicImage, GrayImage, RgbImage, imageops},
    tongue_base::{Rect, Vec2},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Luma8,
    Rgb8,
}

impl PixelFormat {
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Luma8 => 1,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// Packed 8-bit image in row-major HWC layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(size: Vec2<usize>, format: PixelFormat, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.x * size.y * format.channels();
        if data.len() != expected {
            return Err(ImageError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, format, data })
    }

    /// Image filled with a single RGB color.
    pub fn filled(size: Vec2<usize>, rgb: [u8; 3]) -> Self {
        let data = rgb.repeat(size.x * size.y);
        Self {
            size,
            format: PixelFormat::Rgb8,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    pub fn bounds(&self) -> Rect<usize> {
        Rect::new(Vec2::zero(), self.size)
    }

    pub(crate) fn to_dynamic(&self) -> Result<DynamicImage, ImageError> {
        let (w, h) = (self.size.x as u32, self.size.y as u32);
        let mismatch = || ImageError::ShapeMismatch {
            expected: self.size.x * self.size.y * self.channels(),
            got: self.data.len(),
        };
        Ok(match self.format {
            PixelFormat::Luma8 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(w, h, self.data.clone()).ok_or_else(mismatch)?,
            ),
            PixelFormat::Rgb8 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(w, h, self.data.clone()).ok_or_else(mismatch)?,
            ),
        })
    }

    pub(crate) fn from_dynamic(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(buf) => {
                let (w, h) = buf.dimensions();
                Self {
                    size: Vec2::new(w as usize, h as usize),
                    format: PixelFormat::Luma8,
                    data: buf.into_raw(),
                }
            }
            other => {
                let rgb = other.to_rgb8();
                let (w, h) = rgb.dimensions();
                Self {
                    size: Vec2::new(w as usize, h as usize),
                    format: PixelFormat::Rgb8,
                    data: rgb.into_raw(),
                }
            }
        }
    }

    /// Single-channel copy, used as detector input.
    pub fn to_luma(&self) -> Result<Image, ImageError> {
        match self.format {
            PixelFormat::Luma8 => Ok(self.clone()),
            PixelFormat::Rgb8 => {
                let luma = self.to_dynamic()?.to_luma8();
                Ok(Self::from_dynamic(DynamicImage::ImageLuma8(luma)))
            }
        }
    }

    /// Copy out the pixels covered by `rect`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::OutOfBounds` if `rect` is empty or reaches outside the image.
    pub fn crop(&self, rect: Rect<usize>) -> Result<Image, ImageError> {
        if rect.size.x == 0 || rect.size.y == 0 || !self.bounds().contains_rect(rect) {
            return Err(ImageError::OutOfBounds(format!(
                "crop {:?} of {}x{} image",
                rect,
                self.width(),
                self.height()
            )));
        }
        let channels = self.channels();
        let stride = self.size.x * channels;
        let row_len = rect.size.x * channels;
        let mut data = Vec::with_capacity(row_len * rect.size.y);
        for y in rect.origin.y..rect.origin.y + rect.size.y {
            let start = y * stride + rect.origin.x * channels;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        Ok(Self {
            size: rect.size,
            format: self.format,
            data,
        })
    }

    /// Bilinear resize to exactly `size`, ignoring aspect ratio.
    pub fn resize(&self, size: Vec2<usize>) -> Result<Image, ImageError> {
        if size.x == 0 || size.y == 0 {
            return Err(ImageError::OutOfBounds(format!(
                "cannot resize to {}x{}",
                size.x, size.y
            )));
        }
        let (w, h) = (size.x as u32, size.y as u32);
        let filter = imageops::FilterType::Triangle;
        let resized = match self.to_dynamic()? {
            DynamicImage::ImageLuma8(buf) => {
                DynamicImage::ImageLuma8(imageops::resize(&buf, w, h, filter))
            }
            other => DynamicImage::ImageRgb8(imageops::resize(&other.to_rgb8(), w, h, filter)),
        };
        Ok(Self::from_dynamic(resized))
    }
}
