// file: src/loader/scanner.rs
// description: reads the top level of the docs folder into rag documents
// reference: https://docs.rs/walkdir

use crate::error::Result;
use crate::loader::mime::mime_type_for;
use crate::models::RagDocument;
use crate::pipeline::progress::create_load_bar;
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

pub struct DocumentLoader {
    extensions: Vec<String>,
    show_progress: bool,
}

impl DocumentLoader {
    /// `extensions` are lower-case with a leading dot, e.g. `.md`.
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn load(&self, folder: &Path) -> Result<Vec<RagDocument>> {
        if !folder.exists() {
            warn!("Folder {} does not exist", folder.display());
            return Ok(Vec::new());
        }
        Validator::validate_directory(folder)?;

        info!("Loading documents from: {}", folder.display());

        let candidates = self.candidates(folder);
        let bar = create_load_bar(candidates.len() as u64, self.show_progress);
        let mut documents = Vec::with_capacity(candidates.len());

        for path in candidates {
            bar.set_message(display_name(&path));
            match Self::read_document(&path) {
                Ok(doc) => {
                    info!("Loaded: {}", doc.metadata.filename);
                    documents.push(doc);
                }
                Err(e) => {
                    error!("Error reading {}: {}", path.display(), e);
                }
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        info!("Successfully loaded {} documents", documents.len());
        Ok(documents)
    }

    fn candidates(&self, folder: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.accepts(path) {
                paths.push(path.to_path_buf());
            } else {
                debug!("Skipping file with unsupported extension: {}", path.display());
            }
        }

        paths
    }

    fn accepts(&self, path: &Path) -> bool {
        match dotted_extension(path) {
            Some(ext) => self.extensions.iter().any(|e| *e == ext),
            None => false,
        }
    }

    fn read_document(path: &Path) -> std::io::Result<RagDocument> {
        let content = fs::read_to_string(path)?;
        let file_size = fs::metadata(path)
            .map(|m| m.len())
            .unwrap_or(content.len() as u64);
        let mime_type = dotted_extension(path)
            .map(|ext| mime_type_for(&ext))
            .unwrap_or(super::mime::DEFAULT_MIME_TYPE);

        Ok(RagDocument::from_file(path, content, mime_type, file_size))
    }
}

fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn loader() -> DocumentLoader {
        DocumentLoader::new(vec![".txt".to_string(), ".md".to_string()])
    }

    #[test]
    fn test_missing_folder_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let docs = loader().load(&temp.path().join("absent")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_file_instead_of_folder_is_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("docs");
        fs::write(&file, "not a folder").unwrap();

        assert!(loader().load(&file).is_err());
    }

    #[test]
    fn test_loads_matching_top_level_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b_notes.txt"), "plain notes").unwrap();
        fs::write(temp.path().join("a_guide.MD"), "# Guide").unwrap();
        fs::write(temp.path().join("data.json"), "{}").unwrap();
        fs::write(temp.path().join("README"), "no extension").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/deep.md"), "# Deep").unwrap();

        let docs = loader().load(temp.path()).unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.document_id.as_str()).collect();
        assert_eq!(ids, vec!["a_guide", "b_notes"]);

        assert_eq!(docs[0].mime_type, "text/markdown");
        assert_eq!(docs[0].content, "# Guide");
        assert_eq!(docs[0].metadata.filename, "a_guide.MD");
        assert_eq!(docs[0].metadata.file_size, 7);
        assert_eq!(docs[1].mime_type, "text/plain");
        assert!(docs[1].metadata.filepath.ends_with("b_notes.txt"));
    }

    #[test]
    fn test_custom_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("table.csv"), "a,b\n1,2").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip me").unwrap();

        let docs = DocumentLoader::new(vec![".csv".to_string()])
            .load(temp.path())
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].mime_type, "text/csv");
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("good.txt"), "fine").unwrap();
        fs::write(temp.path().join("binary.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let docs = loader().load(temp.path()).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].document_id, "good");
    }
}
