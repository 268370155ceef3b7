//! Command definitions and handlers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use contract_engine::fields::{is_known_field, list_fields};
use contract_engine::layout::{printable_document, ERROR_HTML, LOADING_HTML};
use contract_engine::placeholders::find_placeholders;
use contract_engine::record::document_title;
use contract_engine::sources::FragmentSource;
use contract_engine::{
    euros_in_words, ContractConfig, ContractGenerator, ContractRecord, DocumentAssembler,
    DocxHtmlConverter, FsFragmentSource,
};

#[derive(Parser, Debug)]
#[command(name = "berth-contract")]
#[command(version, about = "Berth lease contract generator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a contract from a record
    Generate {
        /// JSON object with the form fields
        #[arg(long, conflicts_with = "sample", required_unless_present = "sample")]
        record: Option<PathBuf>,

        /// Use the built-in demo record
        #[arg(long)]
        sample: bool,

        #[command(flatten)]
        source: SourceArgs,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Wrap the contract in a standalone printable page
        #[arg(long)]
        printable: bool,

        /// Issue date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        issue_date: Option<NaiveDate>,
    },

    /// Write an amount in words
    Words {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List template placeholders that no known field fills
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the demo record as JSON
    Sample,

    /// Print the known fields with their form labels as JSON
    Fields,
}

#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Deployment root holding src/data and public/data
    #[arg(long, default_value = ".")]
    pub assets: PathBuf,

    /// Fetch fragments from this base URL instead of --assets
    #[cfg(feature = "http")]
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    fn load_config(&self) -> anyhow::Result<ContractConfig> {
        match &self.config {
            Some(path) => ContractConfig::from_file(path),
            None => Ok(ContractConfig::default()),
        }
    }

    fn fragment_source(&self) -> Arc<dyn FragmentSource> {
        #[cfg(feature = "http")]
        {
            if let Some(url) = &self.base_url {
                return Arc::new(contract_engine::sources::HttpFragmentSource::new(url.clone()));
            }
        }
        Arc::new(FsFragmentSource::new(self.assets.clone()))
    }
}

/// Run a command; `Ok(false)` means it ran but did not succeed
pub async fn run(args: Args) -> anyhow::Result<bool> {
    match args.command {
        Command::Generate {
            record,
            sample,
            source,
            out,
            printable,
            issue_date,
        } => {
            let record = match record {
                Some(path) if !sample => read_record(&path)?,
                _ => ContractRecord::sample(),
            };
            let generator = build_generator(&source, issue_date)?;
            // A preview watching the output file shows progress meanwhile
            if let Some(path) = &out {
                write_output(Some(path.as_path()), LOADING_HTML)?;
            }
            match render(&generator, &record, printable).await {
                Ok((html, ok)) => {
                    write_output(out.as_deref(), &html)?;
                    Ok(ok)
                }
                Err(err) => {
                    if let Some(path) = &out {
                        write_output(Some(path.as_path()), ERROR_HTML)?;
                    }
                    Err(err)
                }
            }
        }
        Command::Words { value } => {
            let words = euros_in_words(&value);
            println!("{}", words);
            Ok(!words.is_empty())
        }
        Command::Check { source } => {
            let unknown = check_templates(&source).await?;
            for (path, key) in &unknown {
                println!("{}: {{{{{}}}}}", path, key);
            }
            Ok(unknown.is_empty())
        }
        Command::Sample => {
            println!("{}", serde_json::to_string_pretty(&ContractRecord::sample())?);
            Ok(true)
        }
        Command::Fields => {
            println!("{}", fields_json()?);
            Ok(true)
        }
    }
}

fn read_record(path: &Path) -> anyhow::Result<ContractRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Record must be a JSON object of strings: {}", path.display()))
}

fn build_generator(
    source: &SourceArgs,
    issue_date: Option<NaiveDate>,
) -> anyhow::Result<ContractGenerator> {
    let config = source.load_config()?;
    let mut assembler = DocumentAssembler::new(
        source.fragment_source(),
        Arc::new(DocxHtmlConverter::new()),
        config,
    );
    if let Some(date) = issue_date {
        assembler = assembler.with_issue_date(date);
    }

    Ok(ContractGenerator::new(assembler))
}

async fn render(
    generator: &ContractGenerator,
    record: &ContractRecord,
    printable: bool,
) -> anyhow::Result<(String, bool)> {
    let contract = generator.generate(record).await?;
    let ok = contract != ERROR_HTML;

    if !printable {
        return Ok((contract, ok));
    }
    let title = document_title(record, &generator.assembler().config().document.title_prefix);
    Ok((printable_document(&title, &contract), ok))
}

async fn check_templates(source: &SourceArgs) -> anyhow::Result<Vec<(String, String)>> {
    let config = source.load_config()?;
    let fragments = source.fragment_source();
    let mut unknown = Vec::new();

    for path in [&config.paths.body_template, &config.paths.regulation_template] {
        let template = fragments
            .fetch_text(path)
            .await
            .with_context(|| format!("Failed to load template {}", path))?;
        unknown.extend(
            find_placeholders(&template)
                .into_iter()
                .filter(|key| !is_known_field(key))
                .map(|key| (path.clone(), key)),
        );
    }

    Ok(unknown)
}

fn fields_json() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&list_fields())?)
}

fn write_output(out: Option<&Path>, html: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = html.len(), "Output written");
        }
        None => print!("{}", html),
    }
    Ok(())
}
