use super::document_id::DocumentId;

/// Metadata for one uploaded file. The bytes travel alongside as `&[u8]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    /// Content type sent with the upload, if any. Informational only: every
    /// upload is parsed as PDF.
    pub declared_mime: Option<String>,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, declared_mime: Option<String>, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            declared_mime: declared_mime.filter(|mime| !mime.trim().is_empty()),
            size_bytes,
        }
    }
}
