//! Where template fragments and the annex document come from
//!
//! The assembler only sees the [`FragmentSource`] capability, so it can be
//! driven from memory in tests, from a directory on disk, or over HTTP.

mod fs;
#[cfg(feature = "http")]
mod http;

pub use fs::FsFragmentSource;
#[cfg(feature = "http")]
pub use http::HttpFragmentSource;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::ContractError;

/// Retrieves fragments by relative path
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch a UTF-8 text fragment (an HTML template)
    async fn fetch_text(&self, path: &str) -> Result<String, ContractError>;

    /// Fetch a binary fragment (the annex document)
    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, ContractError>;
}

/// In-memory fragments keyed by path
#[derive(Debug, Clone, Default)]
pub struct StaticFragments {
    files: HashMap<String, Vec<u8>>,
}

impl StaticFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text fragment
    pub fn with_text(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into().into_bytes());
        self
    }

    /// Add a binary fragment
    pub fn with_bytes(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    fn lookup(&self, path: &str) -> Result<&[u8], ContractError> {
        self.files
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| ContractError::FragmentNotFound(path.to_string()))
    }
}

#[async_trait]
impl FragmentSource for StaticFragments {
    async fn fetch_text(&self, path: &str) -> Result<String, ContractError> {
        let bytes = self.lookup(path)?;
        // Lossy, as a browser decoding a response body would be
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, ContractError> {
        self.lookup(path).map(<[u8]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fragments() {
        let source = StaticFragments::new()
            .with_text("body.html", "<p>{{nome}}</p>")
            .with_bytes("annex.docx", vec![0x50, 0x4B]);

        assert_eq!(source.fetch_text("body.html").await.unwrap(), "<p>{{nome}}</p>");
        assert_eq!(source.fetch_bytes("annex.docx").await.unwrap(), vec![0x50, 0x4B]);
    }

    #[tokio::test]
    async fn test_static_fragment_missing() {
        let result = StaticFragments::new().fetch_text("nope.html").await;
        assert!(matches!(result, Err(ContractError::FragmentNotFound(p)) if p == "nope.html"));
    }
}
