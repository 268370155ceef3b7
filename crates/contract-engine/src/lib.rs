//! Berth lease contract generation
//!
//! This crate turns a contract form snapshot into the printable HTML of a
//! berth lease contract:
//! - Derived display fields (pt-PT dates, the monthly fee in words)
//! - `{{placeholder}}` substitution into the body and regulation templates
//! - Assembly with the fixed header, annexes and footer
//!
//! # Feature Flags
//!
//! - `docx` (default): DOCX to HTML conversion of the tariff annex
//! - `http`: fetch fragments from the web deployment with `reqwest`

pub mod annex;
pub mod assembler;
pub mod config;
pub mod dates;
pub mod errors;
pub mod fields;
pub mod generator;
pub mod layout;
pub mod placeholders;
pub mod record;
pub mod sources;
pub mod words;

pub use annex::AnnexConverter;
#[cfg(feature = "docx")]
pub use annex::DocxHtmlConverter;
pub use assembler::DocumentAssembler;
pub use config::ContractConfig;
pub use errors::ContractError;
pub use generator::ContractGenerator;
pub use placeholders::replace_placeholders;
pub use record::{process_contract_data, ContractRecord};
pub use sources::{FragmentSource, FsFragmentSource, StaticFragments};
pub use words::euros_in_words;
