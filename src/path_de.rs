use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

fn with_path<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> ParseError {
    ParseError { path: err.path().to_string(), message: err.into_inner().to_string() }
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, ParseError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(with_path)
}

pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(with_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ToolDoc;
    use serde_json::json;

    #[test]
    fn reports_path_of_bad_field() {
        let err = from_value_with_path::<ToolDoc>(json!({
            "name": "HaplotypeCaller",
            "arguments": [
                {"name": "-nt", "type": "int", "required": "no"},
                {"name": "-L", "type": "IntervalBinding", "required": "sometimes"}
            ]
        })).unwrap_err();
        assert_eq!(err.path, "arguments[1].required");
    }

    #[test]
    fn parses_text() {
        let tool: ToolDoc = from_str_with_path(r#"{"name": "CountReads", "arguments": []}"#).unwrap();
        assert_eq!(tool.name, "CountReads");
        assert!(from_str_with_path::<ToolDoc>("{").is_err());
    }
}
