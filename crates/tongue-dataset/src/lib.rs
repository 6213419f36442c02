//! On-disk layout of a labeled sample set.
//!
//! Samples live in one directory per [`Label`] under a dataset root. The
//! [`Manifest`] lists them per label and is written as `data.json`.

pub mod crop;
pub mod error;
pub mod label;
pub mod layout;
pub mod manifest;
pub mod naming;

pub use crop::{prepare_sample, square_crop};
pub use error::DatasetError;
pub use label::Label;
pub use layout::Dataset;
pub use manifest::{Manifest, manifest_entry};
pub use naming::{STAMP_FORMAT, sample_file_name};

/// Edge length of a stored sample in pixels.
pub const SAMPLE_SIZE: usize = 227;

/// JPEG quality used for stored samples.
pub const SAMPLE_QUALITY: u8 = 95;

/// Default manifest file name, relative to the dataset root.
pub const MANIFEST_FILE: &str = "data.json";
