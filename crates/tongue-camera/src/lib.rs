//! Camera capture abstraction for the tongue sample collector.
//!
//! This crate provides a `Camera` trait for async frame capture,
//! with backend implementations for various camera APIs.

pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::{CameraConfig, DEFAULT_DEVICE};
pub use error::CameraError;
pub use frame::{FrameFormat, decode_frame};
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
