// file: src/client/llama_stack.rs
// description: thin reqwest wrapper over the llama stack models, vector db and rag tool apis
// reference: https://docs.rs/reqwest

use crate::client::types::{
    InsertDocumentsRequest, MODELS_PATH, ModelListResponse, RAG_INSERT_PATH,
    RegisterVectorDbRequest, RegisteredVectorDb, VECTOR_DBS_PATH,
};
use crate::error::{IngestError, Result};
use crate::models::{Model, RagDocument};
use crate::utils::Validator;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LlamaStackClient {
    client: Client,
    base_url: String,
}

impl LlamaStackClient {
    pub fn new(host: &str, port: u16, secure: bool, timeout: Duration) -> Result<Self> {
        Validator::validate_port(port)?;
        Validator::validate_host(host)?;

        let protocol = if secure { "https" } else { "http" };
        let base_url = format!("{}://{}:{}", protocol, host, port);

        info!("Creating LlamaStack client with base URL: {}", base_url);
        Self::with_base_url(base_url, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Url::parse(&base_url).map_err(|e| {
            IngestError::Validation(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_models(&self) -> Result<Vec<Model>> {
        debug!("Listing models from {}", self.base_url);

        let response = self.client.get(self.url(MODELS_PATH)).send().await?;
        let response = Self::check(response, MODELS_PATH).await?;

        let models = response.json::<ModelListResponse>().await?.into_models();
        debug!("Server reported {} models", models.len());
        Ok(models)
    }

    pub async fn register_vector_db(
        &self,
        request: &RegisterVectorDbRequest,
    ) -> Result<RegisteredVectorDb> {
        debug!("Registering vector DB {}", request.vector_db_id);

        let response = self
            .client
            .post(self.url(VECTOR_DBS_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check(response, VECTOR_DBS_PATH).await?;

        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(RegisteredVectorDb {
                identifier: request.vector_db_id.clone(),
                ..RegisteredVectorDb::default()
            });
        }

        let mut registered: RegisteredVectorDb = serde_json::from_str(&body)?;
        if registered.identifier.is_empty() {
            registered.identifier = request.vector_db_id.clone();
        }
        Ok(registered)
    }

    pub async fn insert_documents(
        &self,
        documents: &[RagDocument],
        vector_db_id: &str,
        chunk_size_in_tokens: u32,
    ) -> Result<()> {
        debug!(
            "Inserting {} documents into {} (chunk size {})",
            documents.len(),
            vector_db_id,
            chunk_size_in_tokens
        );

        let request = InsertDocumentsRequest {
            documents,
            vector_db_id,
            chunk_size_in_tokens,
        };

        let response = self
            .client
            .post(self.url(RAG_INSERT_PATH))
            .json(&request)
            .send()
            .await?;
        Self::check(response, RAG_INSERT_PATH).await?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response, endpoint: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(IngestError::Api {
            endpoint: endpoint.to_string(),
            status,
            body: Validator::truncate_text(&body, 500),
        })
    }
}
