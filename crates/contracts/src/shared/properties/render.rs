use serde_json::Value;

use super::value_type::ValueType;

/// Human-readable form of one extracted property value.
///
/// Int-backed enums store their values with a one-character ordinal prefix
/// that is stripped for display. Boolean-Tested intentionally collapses its
/// tested state into the same ja/nein display as Boolean. Everything else
/// passes through unchanged.
pub fn display_value(value_type: ValueType, value: &Value) -> String {
    match value_type {
        ValueType::EnumOrderedInt | ValueType::EnumUnorderedInt => {
            strip_ordinal_prefix(&raw_text(value))
        }
        ValueType::Boolean | ValueType::BooleanTested => {
            if is_truthy(value) {
                "ja".to_string()
            } else {
                "nein".to_string()
            }
        }
        _ => raw_text(value),
    }
}

/// Truthiness the way form values behave in a browser: null, false, zero,
/// and the empty string are falsy, everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a raw value: strings unquoted, everything else in its JSON
/// notation
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn strip_ordinal_prefix(value: &str) -> String {
    let mut chars = value.chars();
    chars.next();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_boolean_display() {
        assert_eq!(display_value(ValueType::Boolean, &json!(true)), "ja");
        assert_eq!(display_value(ValueType::Boolean, &json!(false)), "nein");
    }

    #[test]
    fn test_boolean_tested_collapses_to_binary_display() {
        assert_eq!(display_value(ValueType::BooleanTested, &json!("tested")), "ja");
        assert_eq!(display_value(ValueType::BooleanTested, &json!("")), "nein");
        assert_eq!(display_value(ValueType::BooleanTested, &json!(false)), "nein");
    }

    #[test]
    fn test_int_enum_strips_ordinal_prefix() {
        assert_eq!(display_value(ValueType::EnumOrderedInt, &json!("3Gold")), "Gold");
        assert_eq!(display_value(ValueType::EnumUnorderedInt, &json!("1Braun")), "Braun");
        assert_eq!(display_value(ValueType::EnumOrderedInt, &json!("1")), "");
        assert_eq!(display_value(ValueType::EnumOrderedInt, &json!("")), "");
    }

    #[test]
    fn test_other_kinds_pass_through() {
        assert_eq!(display_value(ValueType::String, &json!("Rex")), "Rex");
        assert_eq!(display_value(ValueType::Long, &json!(42)), "42");
        assert_eq!(display_value(ValueType::Date, &json!("2019-05-01")), "2019-05-01");
        assert_eq!(display_value(ValueType::Unknown, &json!("raw")), "raw");
        assert_eq!(display_value(ValueType::EnumOrderedString, &json!("Gold")), "Gold");
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
