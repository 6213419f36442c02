use {
    crate::{DatasetError, Label},
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// Manifest entry for a sample file: `<label>/<file_name>`.
pub fn manifest_entry(label: Label, file_name: &str) -> String {
    format!("{}/{}", label, file_name)
}

/// Sample paths per label, relative to the dataset root.
///
/// Serializes as `{"right": [...], "left": [...], "none": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub right: Vec<String>,
    pub left: Vec<String>,
    pub none: Vec<String>,
}

impl Manifest {
    pub fn get(&self, label: Label) -> &[String] {
        match label {
            Label::Right => &self.right,
            Label::Left => &self.left,
            Label::None => &self.none,
        }
    }

    fn get_mut(&mut self, label: Label) -> &mut Vec<String> {
        match label {
            Label::Right => &mut self.right,
            Label::Left => &mut self.left,
            Label::None => &mut self.none,
        }
    }

    pub fn push(&mut self, label: Label, path: String) {
        self.get_mut(label).push(path);
    }

    pub fn sort(&mut self) {
        for label in Label::ALL {
            self.get_mut(label).sort();
        }
    }

    pub fn counts(&self) -> [(Label, usize); 3] {
        Label::ALL.map(|label| (label, self.get(label).len()))
    }

    pub fn len(&self) -> usize {
        self.right.len() + self.left.len() + self.none.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the manifest to `path`, replacing any previous one.
    pub fn write(&self, path: &Path) -> Result<(), DatasetError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| DatasetError::io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
