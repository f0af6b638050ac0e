//! Source file loading.

use std::io;

use cpm_lexer::SourceBuffer;

/// Failure to read a source file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &str, error: io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io {
                path,
                source: error,
            },
        }
    }
}

/// Read a file's bytes into a scanner-ready buffer.
///
/// The content is taken as raw bytes; it does not need to be valid UTF-8.
pub fn read_source(path: &str) -> Result<SourceBuffer, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    tracing::debug!(path, len = bytes.len(), "loaded source");
    Ok(SourceBuffer::from_bytes(&bytes))
}
