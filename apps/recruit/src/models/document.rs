use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::WorkflowError;

/// File extensions the upload slots accept.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Response body of `POST /upload`. The id is an opaque backend handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub id: String,
}

/// A named binary blob ready to be sent as the multipart `file` field.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl UploadFile {
    /// Builds an upload from in-memory content. Rejects unsupported extensions.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Result<Self, WorkflowError> {
        let file_name = file_name.into();
        let content_type = require_accepted(&file_name)?;

        Ok(Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        })
    }

    /// Reads a document from disk. The extension is checked before the file is opened.
    pub async fn from_path(path: &Path) -> Result<Self, WorkflowError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| WorkflowError::Validation(format!("'{}' is not a file", path.display())))?
            .to_string();

        let content_type = require_accepted(&file_name)?;
        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        })
    }
}

fn require_accepted(file_name: &str) -> Result<&'static str, WorkflowError> {
    content_type_for(file_name).ok_or_else(|| {
        WorkflowError::Validation(format!(
            "'{file_name}' is not a supported document. Accepted: {}",
            accepted_types_label()
        ))
    })
}

/// MIME type for an accepted document, keyed on the lowercase extension.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// "PDF, DOC, DOCX, TXT"
pub fn accepted_types_label() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|e| e.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}
