use crate::models::DocumentMetadata;
use std::env;

/// Client configuration for the document-services API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the document-services API (default: "http://localhost:8080")
    pub base_url: String,

    /// Overall request timeout in seconds (default: 120)
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,

    /// Maximum upload size in bytes, checked before sending (default: 256 MB)
    pub max_file_size: usize,

    /// Value of the `author` request header (default: "securedoc-client")
    pub author: String,

    /// Value of the `title` request header, omitted when unset
    pub title: Option<String>,

    /// Value of the `subject` request header, omitted when unset
    pub subject: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
            max_file_size: 256 * 1024 * 1024, // 256 MB
            author: "securedoc-client".to_string(),
            title: None,
            subject: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            base_url: env::var("SECUREDOC_BASE_URL").unwrap_or(default.base_url),

            request_timeout_secs: env::var("SECUREDOC_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),

            connect_timeout_secs: env::var("SECUREDOC_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.connect_timeout_secs),

            max_file_size: env::var("SECUREDOC_MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            author: env::var("SECUREDOC_AUTHOR").unwrap_or(default.author),

            title: env::var("SECUREDOC_TITLE").ok(),

            subject: env::var("SECUREDOC_SUBJECT").ok(),
        }
    }

    /// Document metadata sent as request headers with every operation
    pub fn document_metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            author: self.author.clone(),
            title: self.title.clone(),
            subject: self.subject.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.max_file_size, 256 * 1024 * 1024);
        assert_eq!(config.author, "securedoc-client");
        assert!(config.title.is_none());
    }

    #[test]
    fn test_document_metadata() {
        let config = ClientConfig {
            title: Some("Quarterly report".to_string()),
            ..ClientConfig::default()
        };
        let metadata = config.document_metadata();
        assert_eq!(metadata.author, "securedoc-client");
        assert_eq!(metadata.title.as_deref(), Some("Quarterly report"));
        assert!(metadata.subject.is_none());
    }
}
