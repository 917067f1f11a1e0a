// file: src/loader/mime.rs
// description: extension to mime type mapping for uploaded documents

const MIME_TYPES: &[(&str, &str)] = &[
    (".txt", "text/plain"),
    (".md", "text/markdown"),
    (".py", "text/plain"),
    (".json", "application/json"),
    (".html", "text/html"),
    (".csv", "text/csv"),
];

pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Extension lookup is case-insensitive and expects the leading dot.
pub fn mime_type_for(extension: &str) -> &'static str {
    let extension = extension.to_lowercase();
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME_TYPE)
}
