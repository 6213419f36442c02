use crate::{Image, PixelFormat};

/// Converts YUYV (YUV 4:2:2) pixel data to RGB.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`; each pair of pixels shares U and V.
/// Converts to RGB using BT.601 coefficients:
/// - R = Y + 1.402 * (V - 128)
/// - G = Y - 0.344 * (U - 128) - 0.714 * (V - 128)
/// - B = Y + 1.772 * (U - 128)
///
/// Returns `None` if the input data length is less than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let pixel_count = width * height;
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);

    for chunk in data[..expected_len].chunks_exact(4) {
        let y0 = chunk[0] as f32;
        let u = chunk[1] as f32 - 128.0;
        let y1 = chunk[2] as f32;
        let v = chunk[3] as f32 - 128.0;

        for y in [y0, y1] {
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    Some(rgb)
}

/// Packs an image into `0x00RRGGBB` words, the layout minifb expects.
pub fn image_to_u32(image: &Image) -> Vec<u32> {
    match image.format {
        PixelFormat::Rgb8 => image
            .data
            .chunks_exact(3)
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect(),
        PixelFormat::Luma8 => image
            .data
            .iter()
            .map(|&l| {
                let l = l as u32;
                (l << 16) | (l << 8) | l
            })
            .collect(),
    }
}
