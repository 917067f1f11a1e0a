// file: src/utils/validation.rs
// description: parameter validation for connection settings and api arguments
// reference: input validation patterns

use crate::error::{IngestError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Parses a raw port string, tolerating surrounding whitespace.
    pub fn parse_port(raw: &str) -> Result<u16> {
        let trimmed = raw.trim();
        let port: i64 = trimmed.parse().map_err(|_| {
            IngestError::Validation(format!(
                "LLAMA_STACK_PORT must be an integer, got {:?}",
                raw
            ))
        })?;

        if !(1..=65535).contains(&port) {
            return Err(IngestError::Validation(format!(
                "Port number {} is out of valid range (1-65535).",
                port
            )));
        }

        Ok(port as u16)
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(IngestError::Validation(
                "Port number 0 is out of valid range (1-65535).".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_host(host: &str) -> Result<()> {
        if host.trim().is_empty() {
            return Err(IngestError::Validation(
                "Host must be specified and cannot be empty.".to_string(),
            ));
        }

        if host.contains("://") || host.contains('/') {
            return Err(IngestError::Validation(format!(
                "Host must be a bare hostname without scheme or path: {}",
                host
            )));
        }

        Ok(())
    }

    pub fn require_non_empty(value: &str, message: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(IngestError::Validation(message.to_string()));
        }
        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IngestError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(IngestError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            return text.to_string();
        }

        let mut end = max_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_port() {
        assert_eq!(Validator::parse_port("8321").unwrap(), 8321);
        assert_eq!(Validator::parse_port("1").unwrap(), 1);
        assert_eq!(Validator::parse_port("65535").unwrap(), 65535);
        assert_eq!(Validator::parse_port("  443 ").unwrap(), 443);

        assert!(Validator::parse_port("0").is_err());
        assert!(Validator::parse_port("65536").is_err());
        assert!(Validator::parse_port("-80").is_err());
        assert!(Validator::parse_port("\"8080\"").is_err());
        assert!(Validator::parse_port("").is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Validator::parse_port("70000").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Port number 70000 is out of valid range (1-65535)."
        );
    }

    #[test]
    fn test_validate_port() {
        assert!(Validator::validate_port(8080).is_ok());
        assert!(Validator::validate_port(0).is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(Validator::validate_host("localhost").is_ok());
        assert!(Validator::validate_host("10.0.0.5").is_ok());
        assert!(Validator::validate_host("").is_err());
        assert!(Validator::validate_host("  ").is_err());
        assert!(Validator::validate_host("http://localhost").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(Validator::require_non_empty("milvus", "Provider ID is required").is_ok());
        let err = Validator::require_non_empty("", "Provider ID is required").unwrap_err();
        assert_eq!(err.to_string(), "Provider ID is required");
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("héllo", 2), "h...");
    }
}
