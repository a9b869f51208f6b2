use std::io;
use std::path::PathBuf;

use crate::record::ScanError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be opened, read, created or written.
    #[error("cannot access `{}`: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A register list line has no `<name>,<address>` pair.
    #[error("line {line}: {source} in {text:?}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ScanError,
    },

    /// A listing line is not `<hex address> <name>`.
    #[error("line {line}: expected `<hex address> <name>`, got {text:?}")]
    Listing { line: usize, text: String },

    #[error("`{0}` is not a hex address")]
    BadAddress(String),

    #[error("no register at {0:04X}")]
    NoRegister(u64),

    #[error("failed to write to standard output: {0}")]
    Echo(#[source] io::Error),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }
}
