// Target type IR. Serializes straight into CWL type syntax.
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Long,
    Double,
    Int,
    String,
    Float,
    Boolean,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    Scalar(Scalar),
    Enum { symbols: Vec<String> },
    Array(Box<TargetType>),
    /// `null | T`, null always first.
    Nullable(Box<TargetType>),
    /// Interval binding: `null | string | string[] | File`.
    IntervalUnion,
}

impl Scalar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scalar::Long => "long",
            Scalar::Double => "double",
            Scalar::Int => "int",
            Scalar::String => "string",
            Scalar::Float => "float",
            Scalar::Boolean => "boolean",
            Scalar::File => "File",
        }
    }
}

impl TargetType {
    pub fn scalar(s: Scalar) -> Self { TargetType::Scalar(s) }

    pub fn enumeration<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetType::Enum { symbols: symbols.into_iter().map(Into::into).collect() }
    }

    pub fn array(item: TargetType) -> Self { TargetType::Array(Box::new(item)) }

    pub fn nullable(inner: TargetType) -> Self { TargetType::Nullable(Box::new(inner)) }

    /// Compact CWL-ish rendering used in error messages.
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Scalar(s) => f.write_str(s.as_str()),
            TargetType::Enum { .. } => f.write_str("enum"),
            TargetType::Array(item) => write!(f, "{item}[]"),
            TargetType::Nullable(inner) => write!(f, "{inner}?"),
            TargetType::IntervalUnion => f.write_str("intervalbinding"),
        }
    }
}

// ------------------------------ CWL syntax -------------------------------- //

struct ArrayOf<'a>(&'a TargetType);

impl Serialize for ArrayOf<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "array")?;
        map.serialize_entry("items", self.0)?;
        map.end()
    }
}

impl Serialize for TargetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TargetType::Scalar(s) => serializer.serialize_str(s.as_str()),
            TargetType::Enum { symbols } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("symbols", symbols)?;
                map.end()
            }
            TargetType::Array(item) => ArrayOf(item.as_ref()).serialize(serializer),
            TargetType::Nullable(inner) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("null")?;
                seq.serialize_element(inner.as_ref())?;
                seq.end()
            }
            TargetType::IntervalUnion => {
                let string = TargetType::Scalar(Scalar::String);
                let mut seq = serializer.serialize_seq(Some(4))?;
                seq.serialize_element("null")?;
                seq.serialize_element(&string)?;
                seq.serialize_element(&ArrayOf(&string))?;
                seq.serialize_element(&TargetType::Scalar(Scalar::File))?;
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_cwl_type_syntax() {
        let ty = TargetType::nullable(TargetType::array(TargetType::scalar(Scalar::String)));
        assert_eq!(serde_json::to_value(&ty).unwrap(), json!(["null", {"type": "array", "items": "string"}]));

        let ty = TargetType::enumeration(["LENIENT", "STRICT"]);
        assert_eq!(serde_json::to_value(&ty).unwrap(), json!({"type": "enum", "symbols": ["LENIENT", "STRICT"]}));

        assert_eq!(serde_json::to_value(TargetType::scalar(Scalar::File)).unwrap(), json!("File"));
    }

    #[test]
    fn interval_union_lists_all_variants() {
        assert_eq!(
            serde_json::to_value(TargetType::IntervalUnion).unwrap(),
            json!(["null", "string", {"type": "array", "items": "string"}, "File"])
        );
    }

    #[test]
    fn display_is_compact() {
        let ty = TargetType::nullable(TargetType::array(TargetType::scalar(Scalar::Int)));
        assert_eq!(ty.to_string(), "int[]?");
    }
}
