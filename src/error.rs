//! Error taxonomy for the translation engine.
//!
//! Every failure is fatal for the tool being generated: there is no
//! fallback type and no partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The normalized type token has no mapping rule.
    #[error("argument `{argument}`: unsupported type `{token}`")]
    UnsupportedType { argument: String, token: String },

    /// The default literal cannot be coerced to the resolved type.
    #[error("argument `{argument}`: cannot cast default `{raw}` to `{ty}`")]
    CastFailure { argument: String, ty: String, raw: String },

    /// The resolved type has a wrapper the caster does not understand.
    #[error("argument `{argument}`: malformed type shape {shape}")]
    MalformedTypeShape { argument: String, shape: String },
}

impl GenerateError {
    /// Name of the argument that caused the failure.
    pub fn argument(&self) -> &str {
        match self {
            GenerateError::UnsupportedType { argument, .. }
            | GenerateError::CastFailure { argument, .. }
            | GenerateError::MalformedTypeShape { argument, .. } => argument,
        }
    }
}

/// Caster-level failure; carries no argument name until it is lifted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    #[error("cannot cast `{raw}` to `{ty}`")]
    Failure { ty: String, raw: String },
    #[error("malformed type shape {shape}")]
    MalformedShape { shape: String },
}

impl CastError {
    pub fn for_argument(self, argument: &str) -> GenerateError {
        let argument = argument.to_string();
        match self {
            CastError::Failure { ty, raw } => GenerateError::CastFailure { argument, ty, raw },
            CastError::MalformedShape { shape } => GenerateError::MalformedTypeShape { argument, shape },
        }
    }
}

/// Failure to decode an input document, with the JSON path of the bad field.
#[derive(Debug, Error)]
#[error("at JSON path {path}: {message}")]
pub struct ParseError {
    pub path: String,
    pub message: String,
}
