//! Translate scraped GATK argument documentation into CWL workflow
//! descriptors.
//!
//! Pipeline per argument record:
//! classify → (input: normalize → lower type → cast default → attach
//! secondary files) | (output: glob the same-named input).
pub mod record;
pub mod type_expr;
pub mod ir;
pub mod lower;
pub mod default_value;
pub mod descriptor;
pub mod secondary;
pub mod dispatch;
pub mod document;
pub mod settings;
pub mod error;
pub mod path_de;
pub mod jq_exec;
pub mod cli;

#[cfg(test)]
mod properties;

pub use dispatch::{dispatch_all, dispatch_parallel, Generated};
pub use document::{generate, generate_document, ToolDocument};
pub use error::GenerateError;
pub use record::{ArgumentRecord, ToolDoc};
pub use settings::GeneratorSettings;
