//! Contract generation settings
//!
//! TOML configuration for the fragment locations and the fixed document
//! text. Every value has a default matching the web deployment, so an empty
//! file (or no file at all) is a valid configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::record::DEFAULT_TITLE_PREFIX;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Where fragments and static assets live
    #[serde(default)]
    pub paths: PathsConfig,
    /// Fixed document text
    #[serde(default)]
    pub document: DocumentConfig,
}

impl ContractConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use contract_engine::config::ContractConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ContractConfig::from_str(r#"
    ///     [document]
    ///     title_prefix = "CONTRATO DE AMARRAÇÃO"
    /// "#)?;
    /// assert_eq!(config.document.title_prefix, "CONTRATO DE AMARRAÇÃO");
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Fragment and asset locations, relative to the deployment root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Contract body template (HTML with placeholders)
    pub body_template: String,
    /// Usage regulation template (HTML with placeholders)
    pub regulation_template: String,
    /// Tariff annex (DOCX)
    pub annex_document: String,
    /// Logo shown in the header
    pub logo: String,
    /// Licensed area plan shown as annex I
    pub annex_image: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            body_template: "./src/data/corpo_do_contrato.html".to_string(),
            regulation_template: "./src/data/Regulamento_de_Utilizacao.html".to_string(),
            annex_document: "./public/data/ANEXO_II_Regulamento_de_Tarifas.docx".to_string(),
            logo: "./public/assets/logo.png".to_string(),
            annex_image: "./public/assets/Area_Licenciada_ANEXO-1.png".to_string(),
        }
    }
}

/// Fixed text printed on every contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Title before the client name
    pub title_prefix: String,
    /// Company identification lines in the print footer
    pub footer_lines: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            footer_lines: vec![
                "My Dynamic, Soc. Unip. Lda.".to_string(),
                "Urb. Cerro das Mós, Rua António da Silva Freitas, Lt.333, E 8600-714 Lagos - NIPC: 508 882 893".to_string(),
                "www.mydynamic.pt – geral@mydynamic.pt".to_string(),
            ],
        }
    }
}
