use tongue_dataset::Label;

/// What an operator key asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save(Label),
    Quit,
}

impl Command {
    pub const QUIT_KEY: char = 'q';

    pub fn from_key(key: char) -> Option<Command> {
        if key == Self::QUIT_KEY {
            return Some(Command::Quit);
        }
        Label::from_key(key).map(Command::Save)
    }
}
