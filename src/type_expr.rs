//! Source type grammar.
//!
//! A scraped type string is decoded once into a structured token before
//! mapping:
//!
//! ```text
//! List[T]  -> List(t)
//! Set[T]   -> SetWrapper(t)
//! T[]      -> ArraySuffix(t)
//! T        -> Scalar(t)
//! ```
//!
//! Tokens are lowercased. Only one wrapper layer is decoded.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::ArgumentRecord;

static WRAPPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(list|set)\[(.+)\]$").unwrap());
static SUFFIXED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)\[\]$").unwrap());

const INTERVAL_BINDING: &str = "intervalbinding";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Scalar(String),
    List(String),
    SetWrapper(String),
    ArraySuffix(String),
}

impl TypeExpr {
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if let Some(caps) = WRAPPED.captures(&lowered) {
            let inner = caps[2].to_string();
            return match &caps[1] {
                "list" => TypeExpr::List(inner),
                _ => TypeExpr::SetWrapper(inner),
            };
        }
        if let Some(caps) = SUFFIXED.captures(&lowered) {
            return TypeExpr::ArraySuffix(caps[1].to_string());
        }
        TypeExpr::Scalar(lowered)
    }

    /// The token handed to the type mapper.
    pub fn token(&self) -> &str {
        match self {
            TypeExpr::Scalar(t)
            | TypeExpr::List(t)
            | TypeExpr::SetWrapper(t)
            | TypeExpr::ArraySuffix(t) => t,
        }
    }

    /// True when the source type was a list/set wrapper or `[]` suffix.
    pub fn is_collection(&self) -> bool {
        !matches!(self, TypeExpr::Scalar(_))
    }
}

/// Whether a token names the interval binding type.
pub fn is_interval_binding(token: &str) -> bool {
    token.contains(INTERVAL_BINDING)
}

/// Returns a copy of `record` whose type is ready for the builders.
///
/// Interval bindings are collapsed to their inner token so the wrapper no
/// longer triggers array wrapping; the union they map to already covers
/// the list form. Every other record is returned unchanged.
pub fn normalize(record: &ArgumentRecord) -> ArgumentRecord {
    let expr = TypeExpr::parse(&record.type_);
    let mut out = record.clone();
    if is_interval_binding(expr.token()) {
        out.type_ = expr.token().to_string();
    }
    out
}
