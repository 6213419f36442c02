use tongue_base::Vec2;
use tongue_image::{Image, PixelFormat, image_to_u32, yuyv_to_rgb};

#[test]
fn test_yuyv_neutral_gray() {
    // U = V = 128 leaves chroma at zero, so RGB equals Y
    let data = [100, 128, 200, 128];
    let rgb = yuyv_to_rgb(&data, 2, 1).unwrap();
    assert_eq!(rgb, vec![100, 100, 100, 200, 200, 200]);
}

#[test]
fn test_yuyv_short_buffer() {
    assert!(yuyv_to_rgb(&[0u8; 6], 2, 2).is_none());
}

#[test]
fn test_image_to_u32_rgb() {
    let image = Image::new(
        Vec2::new(2, 1),
        PixelFormat::Rgb8,
        vec![255, 0, 0, 0, 0, 255],
    )
    .unwrap();
    assert_eq!(image_to_u32(&image), vec![0x00FF0000, 0x000000FF]);
}

#[test]
fn test_image_to_u32_luma() {
    let image = Image::new(Vec2::new(1, 1), PixelFormat::Luma8, vec![0x12]).unwrap();
    assert_eq!(image_to_u32(&image), vec![0x00121212]);
}
