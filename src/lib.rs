// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod utils;

pub use client::{LlamaStackClient, RegisterVectorDbRequest, RegisteredVectorDb};
pub use config::{Config, EmbeddingConfig, IngestConfig, RawSettings, ServerConfig};
pub use error::{IngestError, Result};
pub use loader::{DocumentLoader, mime_type_for};
pub use models::{DocumentMetadata, EmbeddingModel, Model, ModelType, RagDocument};
pub use pipeline::{IngestPipeline, IngestStats};
pub use registry::{find_embedding_model, register_vector_db};
pub use utils::{EnvReport, FailureDelay, Validator};
