use std::fmt;
use tongue_image::ImageError;

#[derive(Debug)]
pub enum DetectError {
    Load(String),
    Backend(String),
    Image(ImageError),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::Load(msg) => write!(f, "classifier load error: {msg}"),
            DetectError::Backend(msg) => write!(f, "detector error: {msg}"),
            DetectError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for DetectError {}

impl From<ImageError> for DetectError {
    fn from(err: ImageError) -> Self {
        DetectError::Image(err)
    }
}

#[cfg(feature = "opencv")]
impl From<opencv::Error> for DetectError {
    fn from(err: opencv::Error) -> Self {
        DetectError::Backend(err.to_string())
    }
}
