use std::fmt;
use std::path::PathBuf;

pub mod command;
pub mod decode;
pub mod encode;

/// Which representation a command expects its input file to hold.
#[derive(Debug, Clone, Copy)]
pub enum InputKind {
    Utf8,
    Utf256,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Utf8 => write!(f, "UTF-8"),
            InputKind::Utf256 => write!(f, "UTF-256"),
        }
    }
}

/// Failure of an encode or decode command.
///
/// A missing input file carries its own message so `main` can report it
/// verbatim; every other failure travels through the unexpected path
/// with its cause chain intact.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("{} input file '{}' does not exist", .kind, .path.display())]
    MissingInput { kind: InputKind, path: PathBuf },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
