use crate::CameraError;
use tongue_image::Image;

/// Async camera trait for frame capture.
///
/// Implementations provide a `recv` method that asynchronously returns
/// decoded RGB frames.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame from the camera.
    ///
    /// A `CameraError::Channel` means the camera is gone for good; any other
    /// error only affects the current frame.
    async fn recv(&mut self) -> Result<Image, CameraError>;
}
