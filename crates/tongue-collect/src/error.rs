use std::fmt;
use tongue_camera::CameraError;
use tongue_dataset::DatasetError;
use tongue_detect::DetectError;
use tongue_image::ImageError;

#[derive(Debug)]
pub enum CollectError {
    Camera(CameraError),
    Detect(DetectError),
    Dataset(DatasetError),
    Image(ImageError),
    Preview(String),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::Camera(err) => write!(f, "camera: {err}"),
            CollectError::Detect(err) => write!(f, "detector: {err}"),
            CollectError::Dataset(err) => write!(f, "dataset: {err}"),
            CollectError::Image(err) => write!(f, "image: {err}"),
            CollectError::Preview(msg) => write!(f, "preview: {msg}"),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<CameraError> for CollectError {
    fn from(err: CameraError) -> Self {
        CollectError::Camera(err)
    }
}

impl From<DetectError> for CollectError {
    fn from(err: DetectError) -> Self {
        CollectError::Detect(err)
    }
}

impl From<DatasetError> for CollectError {
    fn from(err: DatasetError) -> Self {
        CollectError::Dataset(err)
    }
}

impl From<ImageError> for CollectError {
    fn from(err: ImageError) -> Self {
        CollectError::Image(err)
    }
}
