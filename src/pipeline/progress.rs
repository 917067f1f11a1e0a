// file: src/pipeline/progress.rs
// description: progress bar for document loading and run statistics
// reference: uses indicatif for progress bars and tracks ingestion metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub vector_db_id: String,
    pub documents_loaded: usize,
    pub documents_inserted: usize,
    pub total_bytes: u64,
    pub chunk_size_in_tokens: u32,
    pub elapsed: Duration,
}

impl IngestStats {
    pub fn new(vector_db_id: impl Into<String>, chunk_size_in_tokens: u32) -> Self {
        Self {
            vector_db_id: vector_db_id.into(),
            chunk_size_in_tokens,
            ..Self::default()
        }
    }

    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total_bytes as f64 / secs
    }

    pub fn summary(&self) -> String {
        format!(
            "Documents inserted into the vector database {} with chunk size in tokens {}",
            self.vector_db_id, self.chunk_size_in_tokens
        )
    }
}

/// Bar over the files being read; hidden when `visible` is false.
pub fn create_load_bar(total: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}
