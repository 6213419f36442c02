use tongue_base::Vec2;

/// First video device on a typical Linux box.
pub const DEFAULT_DEVICE: &str = "/dev/video0";

/// Capture settings for one webcam.
///
/// The size is a request; the driver may negotiate something else, see
/// `V4l2Camera::size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    device: String,
    size: Vec2<u32>,
    fps: u32,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            size: Vec2::new(640, 480),
            fps: 30,
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    /// Capture from `device` instead of the first camera.
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn size(&self) -> Vec2<u32> {
        self.size
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Depth of both the mmap ring and the frame channel.
    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
