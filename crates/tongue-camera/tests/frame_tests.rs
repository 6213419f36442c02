use crates_image::ImageEncoder;
use tongue_base::Vec2;
use tongue_camera::{CameraConfig, CameraError, DEFAULT_DEVICE, FrameFormat, decode_frame};
use tongue_image::PixelFormat;

#[test]
fn test_mjpeg_frame_decodes_to_rgb() {
    let mut jpeg = Vec::new();
    let img = crates_image::RgbImage::from_fn(16, 8, |x, y| {
        let val = ((x + y) % 256) as u8;
        crates_image::Rgb([val, val + 10, val + 20])
    });
    crates_image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .write_image(img.as_raw(), 16, 8, crates_image::ExtendedColorType::Rgb8)
        .unwrap();

    let frame = decode_frame(FrameFormat::Mjpeg, Vec2::new(16, 8), &jpeg).unwrap();
    assert_eq!(frame.size, Vec2::new(16, 8));
    assert_eq!(frame.format, PixelFormat::Rgb8);
}

#[test]
fn test_mjpeg_garbage_is_decode_error() {
    let result = decode_frame(FrameFormat::Mjpeg, Vec2::new(4, 4), &[0u8; 16]);
    assert!(matches!(result, Err(CameraError::Decode(_))));
}

#[test]
fn test_yuyv_frame() {
    let data = vec![128u8; 4 * 2 * 2];
    let frame = decode_frame(FrameFormat::Yuyv, Vec2::new(4, 2), &data).unwrap();
    assert_eq!(frame.size, Vec2::new(4, 2));
    assert_eq!(frame.data.len(), 4 * 2 * 3);
}

#[test]
fn test_yuyv_truncated_frame() {
    let result = decode_frame(FrameFormat::Yuyv, Vec2::new(4, 2), &[0u8; 8]);
    assert!(matches!(result, Err(CameraError::Decode(_))));
}

#[test]
fn test_config_defaults() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), DEFAULT_DEVICE);
    assert_eq!(config.size(), Vec2::new(640, 480));
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
}

#[test]
fn test_config_device_override() {
    let config = CameraConfig::default().with_device("/dev/video2");
    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.size(), CameraConfig::default().size());
}
