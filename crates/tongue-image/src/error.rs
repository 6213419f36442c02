use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Encode(String),
    ShapeMismatch { expected: usize, got: usize },
    OutOfBounds(String),
    Io(std::io::Error),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} bytes, got {got}")
            }
            ImageError::OutOfBounds(msg) => write!(f, "out of bounds: {msg}"),
            ImageError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}
