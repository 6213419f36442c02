use crate::{Camera, CameraConfig, CameraError, FrameFormat, decode_frame};
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use tongue_base::Vec2;
use tongue_image::Image;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Image, CameraError>;

/// V4L2 camera implementation.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    format: FrameFormat,
    size: Vec2<usize>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("device", &"<v4l::Device>")
            .field("format", &self.format)
            .field("size", &self.size)
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Image, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("Receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("Channel closed".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Drop the receiver to signal the thread to stop
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()`.
    ///
    /// MJPEG is requested first; devices that refuse it are switched to YUYV
    /// and converted on the capture thread.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, offers
    /// neither MJPEG nor YUYV, or rejects the frame rate.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let requested = config.size();
        let mut format = Format::new(requested.x, requested.y, FourCC::new(b"MJPG"));
        format = Capture::set_format(&device, &format)?;

        if format.fourcc != FourCC::new(b"MJPG") {
            log::info!("MJPEG not supported by {}, trying YUYV", config.device());
            let yuyv = Format::new(requested.x, requested.y, FourCC::new(b"YUYV"));
            format = Capture::set_format(&device, &yuyv)?;
        }

        let frame_format = match &format.fourcc.repr {
            b"MJPG" => FrameFormat::Mjpeg,
            b"YUYV" => FrameFormat::Yuyv,
            _ => {
                return Err(CameraError::Device(format!(
                    "unsupported pixel format: {}",
                    format.fourcc
                )));
            }
        };

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        let size = Vec2::new(format.width as usize, format.height as usize);
        log::info!(
            "opened {} at {}x{} ({:?})",
            config.device(),
            size.x,
            size.y,
            frame_format
        );

        Ok(Self {
            config,
            device: Some(device),
            format: frame_format,
            size,
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    ///
    /// This is called automatically on the first `recv()` call.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("Device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let (tx, rx) = mpsc::channel(buffer_count);
        let format = self.format;
        let size = self.size;

        let handle = thread::Builder::new()
            .name("v4l2-capture".to_string())
            .spawn(move || {
                if let Err(e) = Self::capture_loop(device, tx, buffer_count, format, size) {
                    log::error!("capture thread error: {}", e);
                }
            })?;

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop.
    ///
    /// Undecodable frames are forwarded as errors and capture continues; a
    /// failing stream is forwarded once and ends the thread.
    fn capture_loop(
        device: Device,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
        format: FrameFormat,
        size: Vec2<usize>,
    ) -> Result<(), CameraError> {
        let mut stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            let frame = match CaptureStream::next(&mut stream) {
                Ok((frame_data, _metadata)) => decode_frame(format, size, frame_data),
                Err(error) => {
                    let _ = tx.blocking_send(Err(CameraError::Stream(error.to_string())));
                    return Err(CameraError::Stream(error.to_string()));
                }
            };

            if tx.blocking_send(frame).is_err() {
                // Receiver dropped - exit thread
                break;
            }
        }

        Ok(())
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Negotiated frame size.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }
}
