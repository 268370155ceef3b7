//! Full contract assembly
//!
//! Retrieves the templates and the annex, fills the templates in, and
//! concatenates everything with the fixed blocks from [`crate::layout`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::annex::AnnexConverter;
use crate::config::ContractConfig;
use crate::errors::ContractError;
use crate::layout;
use crate::placeholders::{replace_placeholders, unresolved_placeholders};
use crate::record::{document_title, process_contract_data_on, ContractRecord};
use crate::sources::FragmentSource;

/// Builds contract HTML from a record
///
/// Each call works on its own copy of the data, so calls never interfere
/// with one another.
#[derive(Clone)]
pub struct DocumentAssembler {
    source: Arc<dyn FragmentSource>,
    converter: Arc<dyn AnnexConverter>,
    config: ContractConfig,
    issue_date: Option<NaiveDate>,
}

impl DocumentAssembler {
    pub fn new(
        source: Arc<dyn FragmentSource>,
        converter: Arc<dyn AnnexConverter>,
        config: ContractConfig,
    ) -> Self {
        Self {
            source,
            converter,
            config,
            issue_date: None,
        }
    }

    /// Issue every contract on a fixed date instead of today
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Generate the contract, or the fixed error fragment if anything fails
    ///
    /// The cause of a failure is logged, never returned.
    pub async fn generate_full_contract(&self, record: &ContractRecord) -> String {
        match self.try_assemble(record).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    fetch = e.is_fetch_failure(),
                    "Failed to generate contract"
                );
                layout::ERROR_HTML.to_string()
            }
        }
    }

    /// Generate the contract, propagating the first failure
    pub async fn try_assemble(&self, record: &ContractRecord) -> Result<String, ContractError> {
        let today = self.issue_date.unwrap_or_else(|| Local::now().date_naive());
        let data = process_contract_data_on(record, today);
        let title = document_title(&data, &self.config.document.title_prefix);
        let paths = &self.config.paths;

        tracing::info!(%title, "Generating contract");

        let (body_template, regulation_template, annex_document) = tokio::try_join!(
            self.source.fetch_text(&paths.body_template),
            self.source.fetch_text(&paths.regulation_template),
            self.source.fetch_bytes(&paths.annex_document),
        )?;
        tracing::debug!(
            body_len = body_template.len(),
            regulation_len = regulation_template.len(),
            annex_len = annex_document.len(),
            "Fragments retrieved"
        );

        for (path, template) in [
            (&paths.body_template, &body_template),
            (&paths.regulation_template, &regulation_template),
        ] {
            let missing = unresolved_placeholders(template, &data);
            if !missing.is_empty() {
                tracing::warn!(%path, ?missing, "Template tokens without a field");
            }
        }

        let annex_html = self.converter.convert(annex_document).await?;
        let body_html = replace_placeholders(&body_template, &data);
        let regulation_html = replace_placeholders(&regulation_template, &data);

        let mut html = String::with_capacity(
            body_html.len() + regulation_html.len() + annex_html.len() + 2048,
        );
        html.push_str(&layout::header_block(&paths.logo, &title));
        html.push_str(&body_html);
        html.push_str(&layout::regulation_block(&regulation_html));
        html.push_str(&layout::annex_image_block(&paths.annex_image));
        html.push_str(&layout::annex_document_block(&annex_html));
        html.push_str(&layout::footer_block(&self.config.document.footer_lines));

        Ok(html)
    }
}
