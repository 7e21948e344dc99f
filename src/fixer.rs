use crate::text::straighten_quotes;
use std::{fmt, fs, io, path::Path};

/// Replace the curly double quotes in the file at `path` with straight quotes.
///
/// The whole file is read into memory as UTF-8, transformed, and written back
/// to the same path, truncating what was there.
pub fn fix_file<P: AsRef<Path>>(path: P) -> Result<(), FixFileError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => FixFileError::NotUtf8(e),
        _ => FixFileError::CouldntRead(e),
    })?;

    let fixed = straighten_quotes(&content);
    fs::write(path, fixed.as_ref()).map_err(FixFileError::CouldntWrite)?;

    Ok(())
}

#[derive(Debug)]
pub enum FixFileError {
    /// The file couldn't be opened or read.
    CouldntRead(io::Error),

    /// The file's bytes aren't valid UTF-8.
    NotUtf8(io::Error),

    /// The fixed content couldn't be written back.
    CouldntWrite(io::Error),
}

impl fmt::Display for FixFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FixFileError::CouldntRead(e) => write!(f, "couldn't read file: {}", e),
            FixFileError::NotUtf8(e) => write!(f, "file isn't valid UTF-8: {}", e),
            FixFileError::CouldntWrite(e) => write!(f, "couldn't write file: {}", e),
        }
    }
}

impl std::error::Error for FixFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixFileError::CouldntRead(e) => Some(e),
            FixFileError::NotUtf8(e) => Some(e),
            FixFileError::CouldntWrite(e) => Some(e),
        }
    }
}
