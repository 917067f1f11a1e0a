// file: src/pipeline/orchestrator.rs
// description: runs the ingestion steps in order against a llama stack server
// reference: orchestrates the sequential ingestion workflow

use crate::client::LlamaStackClient;
use crate::config::Config;
use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::models::RagDocument;
use crate::pipeline::progress::IngestStats;
use crate::registry;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct IngestPipeline {
    config: Config,
    client: LlamaStackClient,
    show_progress: bool,
}

impl IngestPipeline {
    pub fn new(config: Config) -> Result<Self> {
        let client = LlamaStackClient::new(
            &config.server.host,
            config.server.port,
            config.server.secure,
            Duration::from_secs(config.server.timeout_secs),
        )?;
        info!(
            "Connected to LlamaStack at {}:{}",
            config.server.host, config.server.port
        );

        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: LlamaStackClient) -> Self {
        Self {
            config,
            client,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn client(&self) -> &LlamaStackClient {
        &self.client
    }

    pub async fn run(&self) -> Result<IngestStats> {
        let start = Instant::now();
        let embedding = &self.config.embedding;
        let ingest = &self.config.ingest;

        let model = registry::find_embedding_model(
            &self.client,
            &embedding.model_id,
            &embedding.provider_id,
        )
        .await?;
        info!(
            "Using embedding model: {} (dimension: {})",
            model.identifier(),
            model.dimension()
        );

        if model.dimension() != embedding.dimension {
            warn!(
                "EMBEDDING_DIMENSION is {} but the server reports {} for {}; using the server value",
                embedding.dimension,
                model.dimension(),
                model.identifier()
            );
        }

        let vector_db_id = registry::register_vector_db(
            &self.client,
            &model,
            &ingest.vector_db_id,
            &ingest.vector_db_provider,
        )
        .await?;

        let folder = ingest.docs_folder.clone();
        let loader = DocumentLoader::new(ingest.extensions.clone()).with_progress(self.show_progress);
        let documents = tokio::task::spawn_blocking(move || loader.load(&folder))
            .await
            .map_err(|e| std::io::Error::other(format!("document loading task failed: {}", e)))??;

        let mut stats = IngestStats::new(&vector_db_id, ingest.chunk_size_in_tokens);
        stats.documents_loaded = documents.len();
        stats.total_bytes = documents.iter().map(|d| d.metadata.file_size).sum();
        stats.documents_inserted = self.insert(&documents, &vector_db_id).await?;
        stats.elapsed = start.elapsed();

        info!("{}", stats.summary());
        Ok(stats)
    }

    async fn insert(&self, documents: &[RagDocument], vector_db_id: &str) -> Result<usize> {
        if documents.is_empty() {
            info!("No documents to insert");
            return Ok(0);
        }

        self.client
            .insert_documents(documents, vector_db_id, self.config.ingest.chunk_size_in_tokens)
            .await?;
        info!("Inserted {} documents into vector DB", documents.len());

        Ok(documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawSettings;

    fn config(host: &str, port: &str) -> Config {
        Config::from_settings(RawSettings {
            embedding_model: Some("all-MiniLM-L6-v2".to_string()),
            embedding_dimension: Some("384".to_string()),
            embedding_model_provider: Some("sentence-transformers".to_string()),
            llama_stack_host: Some(host.to_string()),
            llama_stack_port: Some(port.to_string()),
            ..RawSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_pipeline_creation() {
        let pipeline = IngestPipeline::new(config("localhost", "8321")).unwrap();
        assert_eq!(pipeline.client().base_url(), "http://localhost:8321");
        assert!(!pipeline.show_progress);
    }

    #[tokio::test]
    async fn test_unreachable_server_fails() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let pipeline = IngestPipeline::new(config("127.0.0.1", &port.to_string())).unwrap();
        let err = pipeline.run().await.unwrap_err();
        assert!(matches!(err, crate::error::IngestError::Http(_)));
    }
}
