use {
    crate::CameraError,
    tongue_base::Vec2,
    tongue_image::{Image, ImageError, PixelFormat},
};

/// Wire format of the raw buffers a device hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Mjpeg,
    Yuyv,
}

/// Turn one raw device buffer into an RGB frame.
pub fn decode_frame(
    format: FrameFormat,
    size: Vec2<usize>,
    data: &[u8],
) -> Result<Image, CameraError> {
    match format {
        FrameFormat::Mjpeg => Ok(tongue_image::decode_image(data)?),
        FrameFormat::Yuyv => {
            let rgb = tongue_image::yuyv_to_rgb(data, size.x, size.y).ok_or_else(|| {
                CameraError::Decode(ImageError::ShapeMismatch {
                    expected: size.x * size.y * 2,
                    got: data.len(),
                })
            })?;
            Ok(Image::new(size, PixelFormat::Rgb8, rgb)?)
        }
    }
}
