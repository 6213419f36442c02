use {
    crate::CollectError,
    chrono::NaiveDateTime,
    std::path::PathBuf,
    tongue_base::Vec2,
    tongue_dataset::{Dataset, Label, prepare_sample},
    tongue_detect::Detector,
    tongue_image::Image,
};

/// Result of a single capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// No frame was available; nothing was attempted.
    NoFrame,
    /// The detector found nothing.
    NoDetection,
    /// The first region's square lies outside the frame.
    EmptyCrop,
    Saved(PathBuf),
}

/// Turns a frame plus a label into a stored sample.
#[derive(Debug, Clone)]
pub struct Sampler {
    dataset: Dataset,
    size: Vec2<usize>,
    quality: u8,
}

impl Sampler {
    pub fn new(dataset: Dataset, sample_size: usize, quality: u8) -> Self {
        Self {
            dataset,
            size: Vec2::new(sample_size, sample_size),
            quality,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Detect in `frame`, crop the first region and save it under `label`.
    ///
    /// Missing frames, empty detections and crops that miss the frame are
    /// logged and reported as outcomes, not errors. Detector and file system
    /// failures are errors.
    pub fn capture<D: Detector + ?Sized>(
        &self,
        frame: Option<&Image>,
        label: Label,
        detector: &mut D,
        stamp: NaiveDateTime,
    ) -> Result<CaptureOutcome, CollectError> {
        let Some(frame) = frame else {
            log::info!("can't read frame");
            return Ok(CaptureOutcome::NoFrame);
        };

        let regions = detector.detect(frame)?;
        let Some(&first) = regions.first() else {
            log::info!("failed to detect face");
            return Ok(CaptureOutcome::NoDetection);
        };
        log::info!("detected faces: {}", regions.len());

        let Some(sample) = prepare_sample(frame, first, self.size)? else {
            log::info!("region {:?} lies outside the frame", first);
            return Ok(CaptureOutcome::EmptyCrop);
        };

        let path = self.dataset.sample_path(label, stamp);
        if path.exists() {
            log::warn!("overwriting {} (same second)", path.display());
        }
        tongue_image::save_jpeg(&sample, &path, self.quality)?;
        log::info!("saved {}", path.display());

        Ok(CaptureOutcome::Saved(path))
    }
}
