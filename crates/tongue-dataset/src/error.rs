use std::{fmt, io, path::PathBuf};
use tongue_image::ImageError;

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Pattern(String),
    Image(ImageError),
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DatasetError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            DatasetError::Json(err) => write!(f, "manifest error: {err}"),
            DatasetError::Pattern(msg) => write!(f, "bad sample pattern: {msg}"),
            DatasetError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Json(err) => Some(err),
            DatasetError::Pattern(_) => None,
            DatasetError::Image(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Json(err)
    }
}

impl From<glob::PatternError> for DatasetError {
    fn from(err: glob::PatternError) -> Self {
        DatasetError::Pattern(err.to_string())
    }
}

impl From<ImageError> for DatasetError {
    fn from(err: ImageError) -> Self {
        DatasetError::Image(err)
    }
}
