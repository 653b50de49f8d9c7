//! Workflow descriptors and the builders that produce them.
//!
//! Inputs get a dash-stripped `id` and an `inputBinding.prefix`; outputs keep
//! the raw argument name as `id` and glob the path passed through the
//! same-named input.
use serde::Serialize;

use crate::default_value::{cast_default, DefaultValue};
use crate::error::GenerateError;
use crate::ir::{Scalar, TargetType};
use crate::lower::lower_token;
use crate::record::ArgumentRecord;
use crate::settings::Conventions;
use crate::type_expr::{normalize, TypeExpr};

/// Type fragments that mark an argument as producing output.
const OUTPUT_MARKERS: [&str; 3] = ["rodbinding", "printstream", "writer"];

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputDescriptor {
    pub id: String,
    pub doc: String,
    #[serde(rename = "type")]
    pub type_: TargetType,
    #[serde(rename = "inputBinding")]
    pub input_binding: InputBinding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(rename = "secondaryFiles", skip_serializing_if = "Option::is_none")]
    pub secondary_files: Option<SecondaryFiles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputBinding {
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: TargetType,
    #[serde(rename = "outputBinding")]
    pub output_binding: OutputBinding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputBinding {
    pub glob: String,
}

/// Companion files: fixed suffix patterns or a CWL expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SecondaryFiles {
    Patterns(Vec<String>),
    Expression(String),
}

// ————————————————————————————————————————————————————————————————————————————
// CLASSIFY
// ————————————————————————————————————————————————————————————————————————————

pub fn is_output(record: &ArgumentRecord) -> bool {
    let ty = record.type_.to_lowercase();
    OUTPUT_MARKERS.iter().any(|m| ty.contains(m))
}

// ————————————————————————————————————————————————————————————————————————————
// BUILD
// ————————————————————————————————————————————————————————————————————————————

/// Full input type: mapped token, array-wrapped for collections,
/// null-unioned when optional.
///
/// `record` must already be normalized.
pub fn resolve_input_type(record: &ArgumentRecord, conventions: &Conventions) -> Result<TargetType, GenerateError> {
    let mut ty = if record.name == conventions.input_file_argument {
        // the scraped docs misreport this one as a list of strings
        TargetType::scalar(Scalar::File)
    } else {
        let expr = TypeExpr::parse(&record.type_);
        let base = lower_token(record, expr.token())?;
        if expr.is_collection() { TargetType::array(base) } else { base }
    };
    if record.is_optional() {
        ty = TargetType::nullable(ty);
    }
    Ok(ty)
}

/// Build the input descriptor for `record`, without secondary files.
pub fn build_input(record: &ArgumentRecord, conventions: &Conventions) -> Result<InputDescriptor, GenerateError> {
    let normalized = normalize(record);
    let type_ = resolve_input_type(&normalized, conventions)?;
    let default = normalized
        .default_literal()
        .map(|raw| cast_default(raw, &type_).map_err(|e| e.for_argument(&normalized.name)))
        .transpose()?;

    Ok(InputDescriptor {
        id: normalized.bare_name().to_string(),
        doc: normalized.summary.clone(),
        type_,
        input_binding: InputBinding { prefix: normalized.binding_prefix().to_string() },
        default,
        secondary_files: None,
    })
}

pub fn build_output(record: &ArgumentRecord) -> OutputDescriptor {
    OutputDescriptor {
        id: record.name.clone(),
        type_: TargetType::nullable(TargetType::scalar(Scalar::File)),
        output_binding: OutputBinding { glob: format!("$(inputs.{})", record.bare_name()) },
    }
}
