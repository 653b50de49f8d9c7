//! Lowering: normalized source type token → CWL target type.
use crate::error::GenerateError;
use crate::ir::{Scalar, TargetType};
use crate::record::ArgumentRecord;
use crate::type_expr::is_interval_binding;

/// Enums the scraped documentation does not list options for.
const VALIDATION_TYPES: [&str; 5] = ["ALL", "REF", "IDS", "ALLELES", "CHR_COUNTS"];
const CONTAMINATION_RUN_TYPES: [&str; 3] = ["META", "SAMPLE", "READGROUP"];

/// Map a lowercased, unwrapped `token` to its target type.
///
/// Listed options always win over the token, numeric tokens included.
pub fn lower_token(record: &ArgumentRecord, token: &str) -> Result<TargetType, GenerateError> {
    if !record.options.is_empty() {
        return Ok(TargetType::enumeration(record.options.iter().map(|o| o.name.clone())));
    }

    let ty = match token {
        "long" => TargetType::scalar(Scalar::Long),
        "double" => TargetType::scalar(Scalar::Double),
        "int" | "byte" | "integer" => TargetType::scalar(Scalar::Int),
        "string" | "type" => TargetType::scalar(Scalar::String),
        "float" => TargetType::scalar(Scalar::Float),
        "boolean" | "bool" => TargetType::scalar(Scalar::Boolean),
        "file" => TargetType::scalar(Scalar::File),
        // a bare `set` lists sample names
        "set" => TargetType::array(TargetType::scalar(Scalar::String)),
        "validationtype" => TargetType::enumeration(VALIDATION_TYPES),
        "contaminationruntype" => TargetType::enumeration(CONTAMINATION_RUN_TYPES),
        // really any combination of sample/readgroup/library flags
        "partitiontype" => TargetType::scalar(Scalar::String),
        t if is_interval_binding(t) => TargetType::IntervalUnion,
        _ => {
            return Err(GenerateError::UnsupportedType {
                argument: record.name.clone(),
                token: token.to_string(),
            })
        }
    };
    Ok(ty)
}
