use {
    crate::DatasetError,
    tongue_base::{Rect, Vec2},
    tongue_image::Image,
};

/// Square of side `max(w, h)` centred on `region`, clipped to the frame.
///
/// Returns `None` when nothing of the square lies inside the frame.
pub fn square_crop(region: Rect<i32>, frame: Vec2<usize>) -> Option<Rect<usize>> {
    let side = region.size.x.max(region.size.y);
    if side <= 0 {
        return None;
    }
    let half = side as f64 / 2.0;
    let center_x = region.origin.x as f64 + region.size.x as f64 / 2.0;
    let center_y = region.origin.y as f64 + region.size.y as f64 / 2.0;

    // float-to-int casts truncate toward zero
    let square = Rect::new(
        Vec2::new((center_x - half) as i64, (center_y - half) as i64),
        Vec2::new((half * 2.0) as i64, (half * 2.0) as i64),
    );
    let bounds = Rect::new(Vec2::new(0, 0), Vec2::new(frame.x as i64, frame.y as i64));
    let clipped = square.intersection(bounds)?;

    Some(Rect::new(
        Vec2::new(clipped.origin.x as usize, clipped.origin.y as usize),
        Vec2::new(clipped.size.x as usize, clipped.size.y as usize),
    ))
}

/// Crop the square around `region` out of `frame` and stretch it to `size`.
///
/// `Ok(None)` if the square misses the frame entirely.
pub fn prepare_sample(
    frame: &Image,
    region: Rect<i32>,
    size: Vec2<usize>,
) -> Result<Option<Image>, DatasetError> {
    let Some(square) = square_crop(region, frame.size) else {
        return Ok(None);
    };
    let cropped = frame.crop(square)?;
    Ok(Some(cropped.resize(size)?))
}
