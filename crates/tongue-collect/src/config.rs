use {
    std::path::{Path, PathBuf},
    tongue_camera::CameraConfig,
    tongue_dataset::{MANIFEST_FILE, SAMPLE_QUALITY, SAMPLE_SIZE},
    tongue_detect::{DEFAULT_CASCADE_PATH, DetectParams},
};

/// Everything a collection session needs to know up front.
#[derive(Clone, Debug)]
pub struct CollectConfig {
    root: PathBuf,
    cascade: PathBuf,
    manifest_name: String,
    sample_size: usize,
    quality: u8,
    detect: DetectParams,
    camera: CameraConfig,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            cascade: PathBuf::from(DEFAULT_CASCADE_PATH),
            manifest_name: MANIFEST_FILE.to_string(),
            sample_size: SAMPLE_SIZE,
            quality: SAMPLE_QUALITY,
            detect: DetectParams::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl CollectConfig {
    /// Set the dataset root holding the label directories.
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// Set the classifier definition; relative paths resolve against the root.
    pub fn with_cascade(mut self, cascade: PathBuf) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn with_manifest_name(mut self, name: String) -> Self {
        self.manifest_name = name;
        self
    }

    /// Set the capture device and format.
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cascade_path(&self) -> PathBuf {
        self.root.join(&self.cascade)
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn detect(&self) -> &DetectParams {
        &self.detect
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }
}
