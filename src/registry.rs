// file: src/registry.rs
// description: embedding model discovery and vector database registration
// reference: llama stack models and vector-dbs apis

use crate::client::{LlamaStackClient, RegisterVectorDbRequest};
use crate::error::{IngestError, Result};
use crate::models::EmbeddingModel;
use crate::utils::Validator;
use tracing::{debug, info, warn};

/// Looks up an embedding model by identifier and provider.
///
/// The first listed model whose identifier, provider and type all match wins.
pub async fn find_embedding_model(
    client: &LlamaStackClient,
    model_id: &str,
    provider_id: &str,
) -> Result<EmbeddingModel> {
    Validator::require_non_empty(model_id, "Embedding model ID is required")?;
    Validator::require_non_empty(provider_id, "Embedding model provider is required")?;

    let models = client.list_models().await?;
    debug!("Searching {} models for {}/{}", models.len(), provider_id, model_id);

    let model = models
        .into_iter()
        .find(|m| m.matches(model_id, provider_id))
        .ok_or_else(|| IngestError::ModelNotFound {
            model_id: model_id.to_string(),
            provider_id: provider_id.to_string(),
        })?;

    EmbeddingModel::try_from(model)
}

pub async fn register_vector_db(
    client: &LlamaStackClient,
    embedding_model: &EmbeddingModel,
    vector_db_id: &str,
    provider_id: &str,
) -> Result<String> {
    Validator::require_non_empty(vector_db_id, "Vector DB ID is required for registration")?;
    Validator::require_non_empty(
        provider_id,
        "Provider ID is required for vector DB registration",
    )?;

    info!(
        "Registering vector DB: {} with embedding model {} (dimension: {})",
        vector_db_id,
        embedding_model.identifier(),
        embedding_model.dimension()
    );

    let request = RegisterVectorDbRequest {
        vector_db_id: vector_db_id.to_string(),
        embedding_model: embedding_model.identifier().to_string(),
        embedding_dimension: Some(embedding_model.dimension()),
        provider_id: Some(provider_id.to_string()),
    };

    let registered = client.register_vector_db(&request).await?;
    if registered.identifier != vector_db_id {
        warn!(
            "Server reported vector DB identifier {} for {}; keeping the requested id",
            registered.identifier, vector_db_id
        );
    }
    info!("Registered vector DB: {}", vector_db_id);

    Ok(vector_db_id.to_string())
}
