// file: src/config.rs
// description: environment driven configuration with optional toml overrides
// reference: https://docs.rs/config

use crate::error::{IngestError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CHUNK_SIZE_IN_TOKENS: u32 = 512;
pub const DEFAULT_DOCS_FOLDER: &str = "./docs";
pub const DEFAULT_VECTOR_DB_ID: &str = "milvus_db";
pub const DEFAULT_VECTOR_DB_PROVIDER: &str = "milvus";
pub const DEFAULT_EXTENSIONS: &[&str] = &[".txt", ".md"];
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub server: ServerConfig,
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    pub model_id: String,
    pub provider_id: String,
    pub dimension: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    pub docs_folder: PathBuf,
    pub chunk_size_in_tokens: u32,
    pub extensions: Vec<String>,
    pub vector_db_id: String,
    pub vector_db_provider: String,
}

/// Untyped settings as they arrive from the environment or a config file.
///
/// Keys are the lower-cased environment variable names, so a toml file uses
/// `llama_stack_port = 8321` where the environment uses `LLAMA_STACK_PORT`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSettings {
    pub embedding_model: Option<String>,
    pub embedding_dimension: Option<String>,
    pub embedding_model_provider: Option<String>,
    pub chunk_size_in_tokens: Option<String>,
    pub llama_stack_host: Option<String>,
    pub llama_stack_port: Option<String>,
    pub llama_stack_secure: Option<String>,
    pub docs_folder: Option<String>,
    pub vector_db_id: Option<String>,
    pub vector_db_provider: Option<String>,
    pub doc_extensions: Option<String>,
    pub request_timeout_secs: Option<String>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(config::Environment::default().try_parsing(false));

        let settings = builder.build()?;
        let raw: RawSettings = settings.try_deserialize()?;

        Self::from_settings(raw)
    }

    pub fn from_settings(raw: RawSettings) -> Result<Self> {
        let model_id = raw
            .embedding_model
            .ok_or(IngestError::MissingEnv("EMBEDDING_MODEL"))?;
        let dimension = raw
            .embedding_dimension
            .ok_or(IngestError::MissingEnv("EMBEDDING_DIMENSION"))?;
        let provider_id = raw
            .embedding_model_provider
            .ok_or(IngestError::MissingEnv("EMBEDDING_MODEL_PROVIDER"))?;

        let dimension = parse_positive("EMBEDDING_DIMENSION", &dimension)?;

        let chunk_size_in_tokens = match raw.chunk_size_in_tokens {
            Some(value) => parse_positive("CHUNK_SIZE_IN_TOKENS", &value)?,
            None => DEFAULT_CHUNK_SIZE_IN_TOKENS,
        };

        let host = raw
            .llama_stack_host
            .filter(|h| !h.trim().is_empty())
            .ok_or(IngestError::MissingEnv("LLAMA_STACK_HOST"))?;
        let port = raw
            .llama_stack_port
            .filter(|p| !p.trim().is_empty())
            .ok_or(IngestError::MissingEnv("LLAMA_STACK_PORT"))?;
        let port = Validator::parse_port(&port)?;

        let secure = raw
            .llama_stack_secure
            .as_deref()
            .map(parse_flag)
            .unwrap_or(false);

        let timeout_secs = match raw.request_timeout_secs {
            Some(value) => u64::from(parse_positive("REQUEST_TIMEOUT_SECS", &value)?),
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let docs_folder = raw
            .docs_folder
            .unwrap_or_else(|| DEFAULT_DOCS_FOLDER.to_string());
        if docs_folder.trim().is_empty() {
            return Err(IngestError::MissingEnv("DOCS_FOLDER"));
        }

        let extensions = match raw.doc_extensions {
            Some(list) => parse_extensions(&list)?,
            None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        };

        let vector_db_id = raw
            .vector_db_id
            .unwrap_or_else(|| DEFAULT_VECTOR_DB_ID.to_string());
        let vector_db_provider = raw
            .vector_db_provider
            .unwrap_or_else(|| DEFAULT_VECTOR_DB_PROVIDER.to_string());

        let config = Self {
            embedding: EmbeddingConfig {
                model_id,
                provider_id,
                dimension,
            },
            server: ServerConfig {
                host: host.trim().to_string(),
                port,
                secure,
                timeout_secs,
            },
            ingest: IngestConfig {
                docs_folder: PathBuf::from(docs_folder),
                chunk_size_in_tokens,
                extensions,
                vector_db_id,
                vector_db_provider,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn base_url(&self) -> String {
        let protocol = if self.server.secure { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.server.host, self.server.port)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_host(&self.server.host)?;
        Validator::validate_port(self.server.port)?;

        if self.ingest.vector_db_id.trim().is_empty() {
            return Err(IngestError::Config(
                "vector_db_id must not be empty".to_string(),
            ));
        }

        if self.ingest.vector_db_provider.trim().is_empty() {
            return Err(IngestError::Config(
                "vector_db_provider must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_positive(name: &str, value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(IngestError::Config(format!(
            "{} must be a positive integer, got '{}'",
            name, value
        ))),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn parse_extensions(list: &str) -> Result<Vec<String>> {
    let extensions: Vec<String> = list
        .split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
        .collect();

    if extensions.is_empty() {
        return Err(IngestError::Config(
            "DOC_EXTENSIONS must list at least one extension".to_string(),
        ));
    }

    Ok(extensions)
}
