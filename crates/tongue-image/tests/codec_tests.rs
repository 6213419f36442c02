use crates_image::ImageEncoder;
use tongue_base::Vec2;
use tongue_image::{Image, PixelFormat, decode_image, encode_jpeg, save_jpeg};

#[test]
fn test_decode_png_rgba_becomes_rgb() {
    let mut buffer = Vec::new();
    let img = crates_image::RgbaImage::from_fn(2, 2, |x, y| {
        let val = (x + y) as u8 * 64;
        crates_image::Rgba([val, val + 16, val + 32, 255])
    });
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, crates_image::ExtendedColorType::Rgba8)
        .unwrap();

    let decoded = decode_image(&buffer).unwrap();
    assert_eq!(decoded.format, PixelFormat::Rgb8);
    assert_eq!(decoded.size, Vec2::new(2, 2));
    assert_eq!(&decoded.data[0..3], &[0, 16, 32]);
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(decode_image(&[0u8; 10]).is_err());
}

#[test]
fn test_encode_jpeg_soi_marker() {
    let image = Image::filled(Vec2::new(4, 4), [10, 20, 30]);
    let jpeg = encode_jpeg(&image, 90).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_save_jpeg_decodes_back_with_same_size() {
    let dir = std::env::temp_dir().join(format!("tongue-image-test-{}-save", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join("sample.jpg");
    let image = Image::filled(Vec2::new(227, 227), [200, 100, 50]);
    save_jpeg(&image, &path, 95).unwrap();

    let decoded = decode_image(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(decoded.size, Vec2::new(227, 227));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_jpeg_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join(format!("tongue-image-test-{}-missing", std::process::id()))
        .join("nope")
        .join("sample.jpg");
    let image = Image::filled(Vec2::new(2, 2), [0, 0, 0]);
    assert!(save_jpeg(&image, &path, 95).is_err());
}
