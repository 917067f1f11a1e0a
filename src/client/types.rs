// file: src/client/types.rs
// description: request and response bodies for the llama stack http api
// reference: llama stack /v1 routes

use crate::models::{Model, RagDocument};
use serde::{Deserialize, Serialize};

pub const MODELS_PATH: &str = "/v1/models";
pub const VECTOR_DBS_PATH: &str = "/v1/vector-dbs";
pub const RAG_INSERT_PATH: &str = "/v1/tool-runtime/rag-tool/insert";

/// Older servers return a bare array, newer ones wrap it in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ModelListResponse {
    Wrapped { data: Vec<Model> },
    Bare(Vec<Model>),
}

impl ModelListResponse {
    pub(crate) fn into_models(self) -> Vec<Model> {
        match self {
            ModelListResponse::Wrapped { data } => data,
            ModelListResponse::Bare(models) => models,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterVectorDbRequest {
    pub vector_db_id: String,
    pub embedding_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_dimension: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisteredVectorDb {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub embedding_model: Option<String>,
    #[serde(default)]
    pub embedding_dimension: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InsertDocumentsRequest<'a> {
    pub documents: &'a [RagDocument],
    pub vector_db_id: &'a str,
    pub chunk_size_in_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_list_shapes() {
        let wrapped: ModelListResponse = serde_json::from_value(json!({
            "data": [{"identifier": "a", "provider_id": "p", "model_type": "llm"}]
        }))
        .unwrap();
        assert_eq!(wrapped.into_models().len(), 1);

        let bare: ModelListResponse = serde_json::from_value(json!([
            {"identifier": "a", "provider_id": "p"},
            {"identifier": "b", "provider_id": "p", "model_type": "embedding"}
        ]))
        .unwrap();
        assert_eq!(bare.into_models().len(), 2);
    }

    #[test]
    fn test_register_request_omits_empty_fields() {
        let request = RegisterVectorDbRequest {
            vector_db_id: "milvus_db".to_string(),
            embedding_model: "granite-embedding-125m".to_string(),
            embedding_dimension: None,
            provider_id: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"vector_db_id": "milvus_db", "embedding_model": "granite-embedding-125m"})
        );
    }
}
