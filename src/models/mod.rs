// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod embedding_model;

pub use document::{DocumentMetadata, RagDocument};
pub use embedding_model::{EmbeddingModel, Model, ModelType};
