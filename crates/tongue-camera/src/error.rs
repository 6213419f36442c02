use std::fmt;
use tongue_image::ImageError;

#[derive(Debug)]
pub enum CameraError {
    Device(String),
    Stream(String),
    Decode(ImageError),
    Channel(String),
}

impl CameraError {
    /// `true` when no further frames will arrive after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CameraError::Channel(_) | CameraError::Device(_))
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<ImageError> for CameraError {
    fn from(err: ImageError) -> Self {
        CameraError::Decode(err)
    }
}
