//! MIME type detection module
//!
//! Maps file extensions to Content-Type values through an immutable table
//! built once at startup. Unknown extensions fall back to the configured
//! default so bare paths and `.html` both come back as HTML.

use std::collections::HashMap;

/// Built-in extension table; config entries are merged over these.
const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpg"),
    ("svg", "image/svg+xml"),
];

/// Immutable extension-to-content-type table
///
/// Extensions are matched case-sensitively, as given in the request path.
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
    default_type: String,
}

impl MimeTable {
    /// Build the table from the built-ins plus configured overrides.
    /// An override with a known extension replaces the built-in entry.
    pub fn new(default_type: &str, overrides: &HashMap<String, String>) -> Self {
        let mut types: HashMap<String, String> = BUILTIN_TYPES
            .iter()
            .map(|(ext, ty)| ((*ext).to_string(), (*ty).to_string()))
            .collect();

        for (ext, ty) in overrides {
            types.insert(ext.clone(), ty.clone());
        }

        Self {
            types,
            default_type: default_type.to_string(),
        }
    }

    /// Get the Content-Type for a file extension
    pub fn content_type(&self, extension: Option<&str>) -> &str {
        extension
            .and_then(|ext| self.types.get(ext))
            .map_or(&self.default_type, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MimeTable {
        MimeTable::new("text/html", &HashMap::new())
    }

    #[test]
    fn test_builtin_types() {
        let table = table();
        assert_eq!(table.content_type(Some("js")), "text/javascript");
        assert_eq!(table.content_type(Some("css")), "text/css");
        assert_eq!(table.content_type(Some("json")), "application/json");
        assert_eq!(table.content_type(Some("png")), "image/png");
        assert_eq!(table.content_type(Some("jpg")), "image/jpg");
        assert_eq!(table.content_type(Some("svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_extension_uses_default() {
        let table = table();
        assert_eq!(table.content_type(Some("html")), "text/html");
        assert_eq!(table.content_type(Some("woff2")), "text/html");
        assert_eq!(table.content_type(None), "text/html");
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let table = table();
        assert_eq!(table.content_type(Some("CSS")), "text/html");
    }

    #[test]
    fn test_config_overrides_extend_and_replace() {
        let mut overrides = HashMap::new();
        overrides.insert("wasm".to_string(), "application/wasm".to_string());
        overrides.insert("jpg".to_string(), "image/jpeg".to_string());

        let table = MimeTable::new("text/html", &overrides);
        assert_eq!(table.content_type(Some("wasm")), "application/wasm");
        assert_eq!(table.content_type(Some("jpg")), "image/jpeg");
        assert_eq!(table.content_type(Some("css")), "text/css");
    }
}
