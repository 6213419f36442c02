use {
    crate::{DatasetError, Label, MANIFEST_FILE, Manifest, manifest_entry, sample_file_name},
    chrono::NaiveDateTime,
    glob::{MatchOptions, Pattern, glob_with},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

const SAMPLE_PATTERN: &str = "*.jpg";

/// A dataset root holding one directory per label.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
    manifest_name: String,
}

impl Dataset {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_name: MANIFEST_FILE.to_string(),
        }
    }

    /// Set the manifest file name (relative to the root).
    pub fn with_manifest_name(mut self, name: String) -> Self {
        self.manifest_name = name;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_name)
    }

    pub fn label_dir(&self, label: Label) -> PathBuf {
        self.root.join(label.as_str())
    }

    pub fn sample_path(&self, label: Label, stamp: NaiveDateTime) -> PathBuf {
        self.label_dir(label).join(sample_file_name(label, stamp))
    }

    /// Create any missing label directories.
    pub fn ensure_dirs(&self) -> Result<(), DatasetError> {
        for label in Label::ALL {
            let dir = self.label_dir(label);
            fs::create_dir_all(&dir).map_err(|e| DatasetError::io(&dir, e))?;
        }
        Ok(())
    }

    /// List `<label>/*.jpg` for every label.
    ///
    /// Shell glob semantics: non-recursive, case-sensitive, hidden names
    /// skipped. A missing label directory lists as empty. Entries are sorted
    /// so repeated scans of an unchanged tree are identical.
    pub fn scan(&self) -> Result<Manifest, DatasetError> {
        let mut manifest = Manifest::default();
        for label in Label::ALL {
            for name in self.list_samples(label)? {
                manifest.push(label, manifest_entry(label, &name));
            }
        }
        manifest.sort();
        Ok(manifest)
    }

    fn sample_pattern(&self, label: Label) -> Result<String, DatasetError> {
        let dir = self.label_dir(label);
        let literal = dir
            .to_str()
            .ok_or_else(|| DatasetError::Pattern(format!("non-UTF-8 path {:?}", dir)))?;
        let pattern = Path::new(&Pattern::escape(literal)).join(SAMPLE_PATTERN);
        Ok(pattern.to_string_lossy().into_owned())
    }

    fn list_samples(&self, label: Label) -> Result<Vec<String>, DatasetError> {
        let pattern = self.sample_pattern(label)?;
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut names = Vec::new();
        for entry in glob_with(&pattern, options)? {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                DatasetError::io(path, e.into_error())
            })?;
            match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => log::warn!("skipping non-UTF-8 file name {}", path.display()),
            }
        }
        log::debug!("{}: {} samples", pattern, names.len());
        Ok(names)
    }

    /// Scan the tree and write the manifest to [`Dataset::manifest_path`].
    pub fn write_manifest(&self) -> Result<Manifest, DatasetError> {
        let manifest = self.scan()?;
        let path = self.manifest_path();
        manifest.write(&path)?;
        log::info!("wrote {} entries to {}", manifest.len(), path.display());
        Ok(manifest)
    }
}
