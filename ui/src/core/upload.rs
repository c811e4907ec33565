//! File input handling shared by both pages.

use dioxus::prelude::*;
use thiserror::Error;

/// A file picked through an `<input type="file">`, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Contents as text; invalid UTF-8 sequences are replaced rather than rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("no se pudo leer el archivo {name}")]
    Unreadable { name: String },
}

/// Read the first selected file of a change event. `Ok(None)` means the selection was cleared.
pub async fn first_file(evt: &FormEvent) -> Result<Option<UploadedFile>, UploadError> {
    let Some(engine) = evt.files() else {
        return Ok(None);
    };
    let Some(name) = engine.files().into_iter().next() else {
        return Ok(None);
    };

    match engine.read_file(&name).await {
        Some(bytes) => {
            tracing::debug!(file = %name, size = bytes.len(), "file selected");
            Ok(Some(UploadedFile::new(name, bytes)))
        }
        None => Err(UploadError::Unreadable { name }),
    }
}
