//! Conversion of the annex document into HTML

#[cfg(feature = "docx")]
mod docx;

#[cfg(feature = "docx")]
pub use docx::{docx_to_html, DocxHtmlConverter};

use async_trait::async_trait;

use crate::errors::ContractError;

/// Turns the binary annex into an HTML fragment
#[async_trait]
pub trait AnnexConverter: Send + Sync {
    async fn convert(&self, document: Vec<u8>) -> Result<String, ContractError>;
}
