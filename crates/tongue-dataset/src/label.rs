use std::{fmt, str::FromStr};

/// Category an operator assigns to a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Right,
    Left,
    None,
}

impl Label {
    /// All labels, in manifest order.
    pub const ALL: [Label; 3] = [Label::Right, Label::Left, Label::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Right => "right",
            Label::Left => "left",
            Label::None => "none",
        }
    }

    /// Key that files a sample under this label.
    pub fn key(&self) -> char {
        match self {
            Label::Right => 'r',
            Label::Left => 'l',
            Label::None => 'n',
        }
    }

    pub fn from_key(key: char) -> Option<Label> {
        Label::ALL.into_iter().find(|label| label.key() == key)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown label: {s}"))
    }
}
