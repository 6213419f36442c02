use {
    tongue_base::{init_stdout_logger, log, log_fatal},
    tongue_camera::{CameraConfig, DEFAULT_DEVICE, V4l2Camera},
    tongue_collect::{CollectConfig, MinifbPreview, Session},
    tongue_detect::CascadeDetector,
};

const TITLE: &str = "tongue collect - r: right, l: left, n: none, q: quit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    // get parameters
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        log_fatal!("Usage: {} [dataset-root] [video-device]", args[0]);
    }
    let root = args.get(1).map(String::as_str).unwrap_or(".");
    let device = args.get(2).map(String::as_str).unwrap_or(DEFAULT_DEVICE);
    let config = CollectConfig::default()
        .with_root(root.into())
        .with_camera(CameraConfig::default().with_device(device));

    // load classifier
    let cascade = config.cascade_path();
    let detector = match CascadeDetector::new(&cascade, config.detect().clone()) {
        Ok(detector) => detector,
        Err(error) => {
            log_fatal!("cannot load {}: {}", cascade.display(), error);
        }
    };

    // open camera and preview
    let camera = V4l2Camera::new(config.camera().clone())?;
    let preview = MinifbPreview::new(TITLE, camera.size())?;

    log::info!("keys: r = right, l = left, n = none, q = write manifest and quit");
    let summary = Session::new(camera, detector, preview, &config)?.run().await?;

    log::info!(
        "{} frames, {} samples saved, manifest lists {}",
        summary.frames,
        summary.saved.len(),
        summary.manifest.len()
    );

    Ok(())
}
