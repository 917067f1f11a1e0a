// file: src/models/document.rs
// description: document payload sent to the rag tool insert endpoint
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub filename: String,
    pub filepath: String,
    pub file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagDocument {
    pub document_id: String,
    pub content: String,
    pub mime_type: String,
    pub metadata: DocumentMetadata,
}

impl RagDocument {
    /// Builds a document from a file on disk; the id is the file stem.
    pub fn from_file(path: &Path, content: String, mime_type: &str, file_size: u64) -> Self {
        let document_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            document_id,
            content,
            mime_type: mime_type.to_string(),
            metadata: DocumentMetadata {
                filename,
                filepath: path.display().to_string(),
                file_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_file() {
        let doc = RagDocument::from_file(
            Path::new("./docs/guide.md"),
            "# Guide".to_string(),
            "text/markdown",
            7,
        );

        assert_eq!(doc.document_id, "guide");
        assert_eq!(doc.metadata.filename, "guide.md");
        assert_eq!(doc.metadata.filepath, "./docs/guide.md");
        assert_eq!(doc.metadata.file_size, 7);
    }

    #[test]
    fn test_wire_shape() {
        let doc = RagDocument::from_file(
            Path::new("notes.txt"),
            "hello".to_string(),
            "text/plain",
            5,
        );

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "document_id": "notes",
                "content": "hello",
                "mime_type": "text/plain",
                "metadata": {
                    "filename": "notes.txt",
                    "filepath": "notes.txt",
                    "file_size": 5
                }
            })
        );
    }
}
