//! Region detection for the tongue sample collector.
//!
//! The `Detector` trait hides the classifier backend. The OpenCV cascade
//! backend lives behind the `opencv` feature.

pub mod error;
pub mod params;
pub mod traits;

#[cfg(feature = "opencv")]
pub mod cascade;

pub use error::DetectError;
pub use params::DetectParams;
pub use traits::Detector;

#[cfg(feature = "opencv")]
pub use cascade::CascadeDetector;

/// Default location of the classifier definition, relative to the working directory.
pub const DEFAULT_CASCADE_PATH: &str = "haarcascades/mouth.xml";
