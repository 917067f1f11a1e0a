// file: src/client/mod.rs
// description: llama stack api client module exports
// reference: internal module structure

pub mod llama_stack;
pub mod types;

pub use llama_stack::LlamaStackClient;
pub use types::{RegisterVectorDbRequest, RegisteredVectorDb};
