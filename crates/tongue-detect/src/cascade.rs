use {
    crate::{DetectError, DetectParams, Detector},
    opencv::{
        core::{CV_8UC1, Mat, Rect as CvRect, Scalar, Size, Vector},
        objdetect::CascadeClassifier,
        prelude::*,
    },
    std::path::{Path, PathBuf},
    tongue_base::{Rect, Vec2},
    tongue_image::Image,
};

/// Haar/LBP cascade classifier loaded from an OpenCV XML definition.
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    params: DetectParams,
    path: PathBuf,
}

impl std::fmt::Debug for CascadeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadeDetector")
            .field("path", &self.path)
            .field("params", &self.params)
            .finish()
    }
}

impl CascadeDetector {
    /// Load the classifier definition at `path`.
    ///
    /// # Errors
    ///
    /// Returns `DetectError::Load` if the file is missing or OpenCV loads it
    /// as an empty classifier.
    pub fn new(path: impl AsRef<Path>, params: DetectParams) -> Result<Self, DetectError> {
        let path = path.as_ref().to_path_buf();
        let path_str = path
            .to_str()
            .ok_or_else(|| DetectError::Load(format!("non-UTF-8 path {:?}", path)))?;

        if !path.is_file() {
            return Err(DetectError::Load(format!("{} not found", path.display())));
        }

        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(DetectError::Load(format!(
                "{} is not a usable cascade",
                path.display()
            )));
        }

        log::info!("loaded cascade classifier from {}", path.display());
        Ok(Self {
            classifier,
            params,
            path,
        })
    }

    pub fn params(&self) -> &DetectParams {
        &self.params
    }

    fn to_gray_mat(frame: &Image) -> Result<Mat, DetectError> {
        let luma = frame.to_luma()?;
        let mut mat = Mat::new_rows_cols_with_default(
            luma.height() as i32,
            luma.width() as i32,
            CV_8UC1,
            Scalar::all(0.0),
        )?;
        mat.data_bytes_mut()?.copy_from_slice(&luma.data);
        Ok(mat)
    }
}

fn cv_size(size: Vec2<i32>) -> Size {
    Size::new(size.x, size.y)
}

impl Detector for CascadeDetector {
    fn detect(&mut self, frame: &Image) -> Result<Vec<Rect<i32>>, DetectError> {
        let gray = Self::to_gray_mat(frame)?;
        let mut objects = Vector::<CvRect>::new();
        let max_size = self.params.max_size().map(cv_size).unwrap_or_default();

        self.classifier.detect_multi_scale(
            &gray,
            &mut objects,
            self.params.scale_factor(),
            self.params.min_neighbors(),
            0,
            cv_size(self.params.min_size()),
            max_size,
        )?;

        Ok(objects
            .iter()
            .map(|r| Rect::new(Vec2::new(r.x, r.y), Vec2::new(r.width, r.height)))
            .collect())
    }
}
