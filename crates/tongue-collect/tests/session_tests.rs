use chrono::{NaiveDate, NaiveDateTime};
use std::{collections::VecDeque, fs, path::PathBuf};
use tongue_base::{Rect, Vec2};
use tongue_camera::{Camera, CameraError};
use tongue_collect::{CollectConfig, CollectError, Preview, Session};
use tongue_dataset::{Label, Manifest};
use tongue_detect::{DetectError, Detector};
use tongue_image::Image;

// Replays a fixed sequence of results, then reports the channel closed
struct ScriptedCamera {
    frames: VecDeque<Result<Image, CameraError>>,
}

impl ScriptedCamera {
    fn frames(count: usize) -> Self {
        Self {
            frames: (0..count)
                .map(|_| Ok(Image::filled(Vec2::new(320, 240), [200, 120, 80])))
                .collect(),
        }
    }
}

impl Camera for ScriptedCamera {
    async fn recv(&mut self) -> Result<Image, CameraError> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| Err(CameraError::Channel("Channel closed".to_string())))
    }
}

struct FixedDetector {
    regions: Vec<Rect<i32>>,
}

impl FixedDetector {
    fn centred() -> Self {
        Self {
            regions: vec![Rect::new(Vec2::new(110, 70), Vec2::new(100, 80))],
        }
    }
}

impl Detector for FixedDetector {
    fn detect(&mut self, _frame: &Image) -> Result<Vec<Rect<i32>>, DetectError> {
        Ok(self.regions.clone())
    }
}

// Hands out one batch of keys per shown frame; closes when `close_after` frames were shown
struct ScriptedPreview {
    keys: VecDeque<Vec<char>>,
    shown: usize,
    close_after: Option<usize>,
}

impl ScriptedPreview {
    fn keys(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|k| k.chars().collect()).collect(),
            shown: 0,
            close_after: None,
        }
    }
}

impl Preview for ScriptedPreview {
    fn show(&mut self, _frame: Option<&Image>) -> Result<(), CollectError> {
        self.shown += 1;
        Ok(())
    }

    fn keys(&mut self) -> Vec<char> {
        self.keys.pop_front().unwrap_or_default()
    }

    fn is_open(&self) -> bool {
        self.close_after.is_none_or(|n| self.shown < n)
    }
}

fn scratch_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("tongue_session_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&root);
    root
}

fn ticking_clock() -> impl FnMut() -> NaiveDateTime + 'static {
    let mut second = 0;
    move || {
        second += 1;
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(9, 0, second)
            .unwrap()
    }
}

fn frozen_clock() -> impl FnMut() -> NaiveDateTime + 'static {
    || NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(9, 0, 0).unwrap()
}

#[tokio::test]
async fn test_session_saves_and_writes_manifest() {
    let root = scratch_root("saves");
    let config = CollectConfig::default().with_root(root.clone());
    let preview = ScriptedPreview::keys(&["r", "", "ln", "x", "q"]);

    let camera = ScriptedCamera::frames(10);
    let summary = Session::new(camera, FixedDetector::centred(), preview, &config)
        .unwrap()
        .with_clock(ticking_clock())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.frames, 5);
    assert_eq!(summary.saved.right, vec!["right/right_2024-03-09-09_00_01.jpg".to_string()]);
    assert_eq!(summary.saved.left, vec!["left/left_2024-03-09-09_00_02.jpg".to_string()]);
    assert_eq!(summary.saved.none, vec!["none/none_2024-03-09-09_00_03.jpg".to_string()]);
    assert_eq!(summary.manifest, summary.saved);

    let written = Manifest::load(&root.join("data.json")).unwrap();
    assert_eq!(written, summary.manifest);

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_session_creates_label_dirs() {
    let root = scratch_root("dirs");
    let config = CollectConfig::default().with_root(root.clone());

    let summary = Session::new(
        ScriptedCamera::frames(1),
        FixedDetector::centred(),
        ScriptedPreview::keys(&["q"]),
        &config,
    )
    .unwrap()
    .run()
    .await
    .unwrap();

    for label in Label::ALL {
        assert!(root.join(label.as_str()).is_dir());
    }
    assert!(summary.manifest.is_empty());
    assert_eq!(
        fs::read_to_string(root.join("data.json")).unwrap(),
        r#"{"right":[],"left":[],"none":[]}"#
    );

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_manifest_includes_earlier_samples() {
    let root = scratch_root("earlier");
    fs::create_dir_all(root.join("left")).unwrap();
    fs::write(root.join("left").join("left_2023-01-01-00_00_00.jpg"), b"jpeg").unwrap();
    let config = CollectConfig::default().with_root(root.clone());

    let summary = Session::new(
        ScriptedCamera::frames(3),
        FixedDetector::centred(),
        ScriptedPreview::keys(&["l", "q"]),
        &config,
    )
    .unwrap()
    .with_clock(ticking_clock())
    .run()
    .await
    .unwrap();

    assert_eq!(summary.saved.len(), 1);
    assert_eq!(
        summary.manifest.left,
        vec![
            "left/left_2023-01-01-00_00_00.jpg".to_string(),
            "left/left_2024-03-09-09_00_01.jpg".to_string(),
        ]
    );

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_same_second_saves_are_recorded_once() {
    let root = scratch_root("same_second");
    let config = CollectConfig::default().with_root(root.clone());

    let summary = Session::new(
        ScriptedCamera::frames(3),
        FixedDetector::centred(),
        ScriptedPreview::keys(&["r", "r", "q"]),
        &config,
    )
    .unwrap()
    .with_clock(frozen_clock())
    .run()
    .await
    .unwrap();

    assert_eq!(summary.saved.right.len(), 1);
    assert_eq!(summary.manifest.right, summary.saved.right);

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_no_detection_saves_nothing() {
    let root = scratch_root("no_detection");
    let config = CollectConfig::default().with_root(root.clone());

    let summary = Session::new(
        ScriptedCamera::frames(3),
        FixedDetector { regions: vec![] },
        ScriptedPreview::keys(&["r", "n", "q"]),
        &config,
    )
    .unwrap()
    .run()
    .await
    .unwrap();

    assert!(summary.saved.is_empty());
    assert!(summary.manifest.is_empty());
    assert_eq!(fs::read_dir(root.join("right")).unwrap().count(), 0);

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_dropped_frame_is_skipped() {
    let root = scratch_root("dropped");
    let config = CollectConfig::default().with_root(root.clone());
    let mut camera = ScriptedCamera::frames(2);
    camera.frames.push_front(Err(CameraError::Stream("glitch".to_string())));

    // the `r` lands on the dropped frame, the `l` on a real one
    let preview = ScriptedPreview::keys(&["r", "l", "q"]);
    let summary = Session::new(camera, FixedDetector::centred(), preview, &config)
        .unwrap()
        .with_clock(ticking_clock())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.frames, 2);
    assert!(summary.saved.right.is_empty());
    assert_eq!(summary.saved.left.len(), 1);

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_closing_preview_ends_session() {
    let root = scratch_root("closed");
    let config = CollectConfig::default().with_root(root.clone());
    let mut preview = ScriptedPreview::keys(&["r"]);
    preview.close_after = Some(2);

    let camera = ScriptedCamera::frames(10);
    let summary = Session::new(camera, FixedDetector::centred(), preview, &config)
        .unwrap()
        .with_clock(ticking_clock())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.frames, 2);
    assert_eq!(summary.saved.right.len(), 1);
    assert!(root.join("data.json").is_file());

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_camera_loss_is_fatal() {
    let root = scratch_root("camera_loss");
    let config = CollectConfig::default().with_root(root.clone());

    let result = Session::new(
        ScriptedCamera::frames(2),
        FixedDetector::centred(),
        ScriptedPreview::keys(&["r"]),
        &config,
    )
    .unwrap()
    .run()
    .await;

    assert!(matches!(result, Err(CollectError::Camera(CameraError::Channel(_)))));
    assert!(!root.join("data.json").exists());

    fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn test_custom_manifest_name() {
    let root = scratch_root("manifest_name");
    let config = CollectConfig::default()
        .with_root(root.clone())
        .with_manifest_name("samples.json".to_string());

    Session::new(
        ScriptedCamera::frames(1),
        FixedDetector::centred(),
        ScriptedPreview::keys(&["q"]),
        &config,
    )
    .unwrap()
    .run()
    .await
    .unwrap();

    assert!(root.join("samples.json").is_file());
    assert!(!root.join("data.json").exists());

    fs::remove_dir_all(root).unwrap();
}
