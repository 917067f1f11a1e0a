// file: src/loader/mod.rs
// description: document loading module exports
// reference: internal module structure

pub mod mime;
pub mod scanner;

pub use mime::mime_type_for;
pub use scanner::DocumentLoader;
