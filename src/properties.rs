// Property checks over the mapping and casting rules.
use proptest::prelude::*;

use crate::default_value::cast_default;
use crate::descriptor::resolve_input_type;
use crate::ir::TargetType;
use crate::lower::lower_token;
use crate::record::{ArgumentRecord, OptionRecord, Required};
use crate::settings::Conventions;

const BASE_TOKENS: [&str; 15] = [
    "long", "double", "int", "string", "float", "boolean", "bool", "file", "byte", "integer",
    "set", "validationtype", "contaminationruntype", "type", "partitiontype",
];

fn record(type_: &str, required: Required, options: Vec<String>) -> ArgumentRecord {
    ArgumentRecord {
        name: "--arg".into(),
        type_: type_.into(),
        required,
        default_value: "NA".into(),
        options: options.into_iter().map(|name| OptionRecord { name, summary: String::new() }).collect(),
        summary: String::new(),
        fulltext: String::new(),
    }
}

fn base_token() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(BASE_TOKENS.to_vec())
}

/// Random casing of a token, as the scraped docs spell types in CamelCase.
fn cased(token: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), token.len()).prop_map(move |upper| {
        token
            .chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// (token, literal) pairs where the literal is a valid default for the token.
fn scalar_with_literal() -> impl Strategy<Value = (&'static str, String)> {
    prop_oneof![
        any::<i32>().prop_map(|v| ("int", v.to_string())),
        any::<i64>().prop_map(|v| ("long", v.to_string())),
        any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map(|v| ("double", v.to_string())),
        any::<f32>().prop_filter("finite", |v| v.is_finite()).prop_map(|v| ("float", v.to_string())),
        any::<bool>().prop_map(|v| ("boolean", v.to_string())),
        "[a-zA-Z0-9_.]{0,12}".prop_map(|v| ("string", v)),
    ]
}

proptest! {
    #[test]
    fn mapping_is_pure(token in base_token(), options in proptest::collection::vec("[A-Z_]{1,8}", 0..4)) {
        let r = record(token, Required::Yes, options);
        prop_assert_eq!(lower_token(&r, token), lower_token(&r, token));
    }

    #[test]
    fn list_wrappers_map_to_arrays(token in base_token().prop_flat_map(cased), form in 0..3usize) {
        let type_ = match form {
            0 => format!("List[{token}]"),
            1 => format!("Set[{token}]"),
            _ => format!("{token}[]"),
        };
        let conventions = Conventions::default();
        let wrapped = resolve_input_type(&record(&type_, Required::Yes, vec![]), &conventions).unwrap();
        let base = lower_token(&record(&token, Required::Yes, vec![]), &token.to_lowercase()).unwrap();
        prop_assert_eq!(wrapped, TargetType::array(base));
    }

    #[test]
    fn optional_is_null_first_pair(token in base_token()) {
        let ty = resolve_input_type(&record(token, Required::No, vec![]), &Conventions::default()).unwrap();
        let value = serde_json::to_value(&ty).unwrap();
        let arms = value.as_array().unwrap();
        prop_assert_eq!(arms.len(), 2);
        prop_assert_eq!(&arms[0], "null");
    }

    #[test]
    fn options_always_give_enum(token in "[a-z]{1,12}", options in proptest::collection::vec("[A-Z_]{1,8}", 1..6)) {
        let ty = lower_token(&record(&token, Required::Yes, options.clone()), &token).unwrap();
        prop_assert_eq!(ty, TargetType::Enum { symbols: options });
    }

    #[test]
    fn map_then_cast_succeeds((token, literal) in scalar_with_literal(), optional in any::<bool>()) {
        let required = if optional { Required::No } else { Required::Yes };
        let ty = resolve_input_type(&record(token, required, vec![]), &Conventions::default()).unwrap();
        prop_assert!(cast_default(&literal, &ty).is_ok(), "{} as {}", literal, ty);
    }
}
