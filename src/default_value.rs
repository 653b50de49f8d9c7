//! Default-value coercion: raw scraped literal → typed CWL default.
use serde::ser::{Serialize, Serializer};

use crate::error::CastError;
use crate::ir::{Scalar, TargetType};

/// Literal for an empty collection default.
pub const EMPTY_LIST: &str = "[]";

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Int(i32),
    Long(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    List(Vec<DefaultValue>),
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Int(v) => serializer.serialize_i32(*v),
            DefaultValue::Long(v) => serializer.serialize_i64(*v),
            DefaultValue::Float(v) => serializer.serialize_f64(*v),
            DefaultValue::Boolean(v) => serializer.serialize_bool(*v),
            DefaultValue::String(v) => serializer.serialize_str(v),
            DefaultValue::List(xs) => serializer.collect_seq(xs),
        }
    }
}

/// What the caster sees once the optional wrapper is peeled off.
#[derive(Clone, Copy)]
enum Shape<'a> {
    Scalar(Scalar),
    Enum,
    Array(&'a TargetType),
}

fn shape_of(ty: &TargetType) -> Result<Shape<'_>, CastError> {
    let concrete = match ty {
        TargetType::Nullable(inner) => inner.as_ref(),
        other => other,
    };
    match concrete {
        TargetType::Scalar(s) => Ok(Shape::Scalar(*s)),
        TargetType::Enum { .. } => Ok(Shape::Enum),
        TargetType::Array(item) => Ok(Shape::Array(item)),
        TargetType::Nullable(_) | TargetType::IntervalUnion => {
            Err(CastError::MalformedShape { shape: ty.describe() })
        }
    }
}

/// Coerce `raw` into a value of `ty`.
pub fn cast_default(raw: &str, ty: &TargetType) -> Result<DefaultValue, CastError> {
    match shape_of(ty)? {
        Shape::Array(item) => cast_list(raw, item),
        // legacy: an empty-list literal on a non-list type stays an empty list
        _ if raw == EMPTY_LIST => Ok(DefaultValue::List(Vec::new())),
        Shape::Enum => Ok(DefaultValue::String(raw.to_string())),
        Shape::Scalar(s) => cast_scalar(raw, s),
    }
}

fn cast_list(raw: &str, item: &TargetType) -> Result<DefaultValue, CastError> {
    if raw == EMPTY_LIST {
        return Ok(DefaultValue::List(Vec::new()));
    }
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();
    if body.is_empty() {
        return Ok(DefaultValue::List(Vec::new()));
    }
    let element = match shape_of(item)? {
        Shape::Array(_) => return Err(CastError::MalformedShape { shape: item.describe() }),
        other => other,
    };
    body.split(',')
        .map(str::trim)
        .map(|el| match element {
            Shape::Scalar(s) => cast_scalar(el, s),
            _ => Ok(DefaultValue::String(el.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(DefaultValue::List)
}

fn cast_scalar(raw: &str, s: Scalar) -> Result<DefaultValue, CastError> {
    let fail = || CastError::Failure { ty: s.as_str().to_string(), raw: raw.to_string() };
    let text = raw.trim();
    match s {
        // CWL int is 32-bit, long 64-bit
        Scalar::Int => text.parse::<i32>().map(DefaultValue::Int).map_err(|_| fail()),
        Scalar::Long => text.parse::<i64>().map(DefaultValue::Long).map_err(|_| fail()),
        Scalar::Double | Scalar::Float => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(DefaultValue::Float(v)),
            _ => Err(fail()),
        },
        Scalar::Boolean => parse_bool(text).map(DefaultValue::Boolean).ok_or_else(fail),
        Scalar::String => Ok(DefaultValue::String(raw.to_string())),
        Scalar::File => Err(fail()),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
