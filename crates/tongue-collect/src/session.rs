use {
    crate::{CaptureOutcome, CollectConfig, CollectError, Command, Preview, Sampler},
    chrono::NaiveDateTime,
    tongue_camera::Camera,
    tongue_dataset::{Dataset, Label, Manifest, manifest_entry},
    tongue_detect::Detector,
    tongue_image::Image,
};

type Clock = Box<dyn FnMut() -> NaiveDateTime>;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Samples saved during this session.
    pub saved: Manifest,
    /// Manifest written at the end, rebuilt from disk.
    pub manifest: Manifest,
    /// Frames received from the camera.
    pub frames: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The capture-and-label loop.
pub struct Session<C, D, P> {
    camera: C,
    detector: D,
    preview: P,
    sampler: Sampler,
    clock: Clock,
    saved: Manifest,
    frames: usize,
}

impl<C: Camera, D: Detector, P: Preview> Session<C, D, P> {
    /// Prepare a session, creating missing label directories under the root.
    pub fn new(
        camera: C,
        detector: D,
        preview: P,
        config: &CollectConfig,
    ) -> Result<Self, CollectError> {
        let dataset =
            Dataset::new(config.root()).with_manifest_name(config.manifest_name().to_string());
        dataset.ensure_dirs()?;
        let sampler = Sampler::new(dataset, config.sample_size(), config.quality());

        Ok(Self {
            camera,
            detector,
            preview,
            sampler,
            clock: Box::new(local_now),
            saved: Manifest::default(),
            frames: 0,
        })
    }

    /// Replace the wall clock used to stamp sample names.
    pub fn with_clock(mut self, clock: impl FnMut() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run until `q`, the preview closing, or a fatal camera error.
    ///
    /// On a normal exit the manifest is rebuilt from disk and written.
    pub async fn run(mut self) -> Result<SessionSummary, CollectError> {
        loop {
            let frame = self.next_frame().await?;
            if self.step(frame.as_ref())? == Flow::Quit {
                break;
            }
        }

        self.finish()
    }

    fn step(&mut self, frame: Option<&Image>) -> Result<Flow, CollectError> {
        self.preview.show(frame)?;
        if !self.preview.is_open() {
            log::info!("preview closed");
            return Ok(Flow::Quit);
        }
        self.handle_keys(frame)
    }

    async fn next_frame(&mut self) -> Result<Option<Image>, CollectError> {
        match self.camera.recv().await {
            Ok(frame) => {
                self.frames += 1;
                Ok(Some(frame))
            }
            Err(error) if error.is_fatal() => Err(error.into()),
            Err(error) => {
                log::debug!("frame dropped: {}", error);
                Ok(None)
            }
        }
    }

    fn handle_keys(&mut self, frame: Option<&Image>) -> Result<Flow, CollectError> {
        for key in self.preview.keys() {
            match Command::from_key(key) {
                Some(Command::Save(label)) => self.save(frame, label)?,
                Some(Command::Quit) => return Ok(Flow::Quit),
                None => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self, frame: Option<&Image>, label: Label) -> Result<(), CollectError> {
        let stamp = (self.clock)();
        let outcome = self.sampler.capture(frame, label, &mut self.detector, stamp)?;
        if let CaptureOutcome::Saved(path) = outcome {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let entry = manifest_entry(label, &file_name);
            // a same-second save replaced the earlier file
            if !self.saved.get(label).contains(&entry) {
                self.saved.push(label, entry);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<SessionSummary, CollectError> {
        let manifest = self.sampler.dataset().write_manifest()?;
        for (label, count) in self.saved.counts() {
            log::info!(
                "{}: {} saved this session, {} in total",
                label,
                count,
                manifest.get(label).len()
            );
        }

        Ok(SessionSummary {
            saved: self.saved,
            manifest,
            frames: self.frames,
        })
    }
}
