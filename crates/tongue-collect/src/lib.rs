//! Interactive capture-and-label session.
//!
//! Frames flow from a [`tongue_camera::Camera`] into a [`Preview`]; label
//! keys crop the first detected region into the dataset, `q` writes the
//! manifest and ends the session.

pub mod command;
pub mod config;
pub mod error;
pub mod preview;
pub mod sampler;
pub mod session;

pub use command::Command;
pub use config::CollectConfig;
pub use error::CollectError;
pub use preview::Preview;
pub use sampler::{CaptureOutcome, Sampler};
pub use session::{Session, SessionSummary};

#[cfg(feature = "window")]
pub use preview::MinifbPreview;
