// file: src/models/embedding_model.rs
// description: model descriptors returned by the models api and the validated embedding view
// reference: llama stack /v1/models response shape

use crate::error::{IngestError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelType {
    #[default]
    Llm,
    Embedding,
    Other(String),
}

impl From<String> for ModelType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "llm" => ModelType::Llm,
            "embedding" => ModelType::Embedding,
            _ => ModelType::Other(value),
        }
    }
}

impl From<ModelType> for String {
    fn from(value: ModelType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::Llm => write!(f, "llm"),
            ModelType::Embedding => write!(f, "embedding"),
            ModelType::Other(other) => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub identifier: String,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_resource_id: Option<String>,
    #[serde(default, alias = "api_model_type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub metadata: Value,
}

impl Model {
    pub fn is_embedding(&self) -> bool {
        self.model_type == ModelType::Embedding
    }

    pub fn matches(&self, model_id: &str, provider_id: &str) -> bool {
        self.identifier == model_id && self.provider_id == provider_id && self.is_embedding()
    }
}

/// A model confirmed to be usable for vector db registration.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingModel {
    model: Model,
    dimension: u32,
}

impl EmbeddingModel {
    pub fn identifier(&self) -> &str {
        &self.model.identifier
    }

    pub fn provider_id(&self) -> &str {
        &self.model.provider_id
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }
}

impl TryFrom<Model> for EmbeddingModel {
    type Error = IngestError;

    fn try_from(model: Model) -> Result<Self> {
        if model.identifier.trim().is_empty() {
            return Err(IngestError::Validation(
                "Embedding model ID is required for vector DB registration".to_string(),
            ));
        }

        if !model.is_embedding() {
            return Err(IngestError::Validation(format!(
                "Provided model {} is not an embedding model (type: {})",
                model.identifier, model.model_type
            )));
        }

        let metadata = model.metadata.as_object().ok_or_else(|| {
            IngestError::Validation("Embedding model metadata must be a dictionary".to_string())
        })?;

        let dimension = metadata
            .get("embedding_dimension")
            .map(dimension_from_value)
            .unwrap_or_else(|| Err(invalid_dimension()))?;

        Ok(Self { model, dimension })
    }
}

fn invalid_dimension() -> IngestError {
    IngestError::Validation(
        "Embedding model metadata 'embedding_dimension' must be a str, int or float".to_string(),
    )
}

fn dimension_from_value(value: &Value) -> Result<u32> {
    let dimension = match value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => Some(n),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f > 0.0)
                .map(|f| f as u64),
        },
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => return Err(invalid_dimension()),
    };

    match dimension {
        Some(d) if d > 0 && d <= u64::from(u32::MAX) => Ok(d as u32),
        _ => Err(IngestError::Validation(format!(
            "Embedding model metadata 'embedding_dimension' is not a positive integer: {}",
            value
        ))),
    }
}
