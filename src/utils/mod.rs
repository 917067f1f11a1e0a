// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod delay;
pub mod diagnostics;
pub mod logging;
pub mod validation;

pub use delay::FailureDelay;
pub use diagnostics::EnvReport;
pub use validation::Validator;
