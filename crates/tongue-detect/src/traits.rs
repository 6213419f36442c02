use crate::DetectError;
use tongue_base::Rect;
use tongue_image::Image;

/// Finds candidate regions in a frame.
pub trait Detector {
    /// Returns zero or more regions in pixel coordinates, in the order the
    /// backend produced them.
    fn detect(&mut self, frame: &Image) -> Result<Vec<Rect<i32>>, DetectError>;
}

impl<D: Detector + ?Sized> Detector for Box<D> {
    fn detect(&mut self, frame: &Image) -> Result<Vec<Rect<i32>>, DetectError> {
        (**self).detect(frame)
    }
}
