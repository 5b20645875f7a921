use serde::{Deserialize, Serialize};

/// Value type tag of a property, with the exact wire names used by the
/// `properties` query. Tags this build does not know about deserialize as
/// `Unknown` instead of failing the whole bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Long,
    Date,
    Boolean,
    #[serde(rename = "Boolean-Tested")]
    BooleanTested,
    #[serde(rename = "Enum-Ordered-Int")]
    EnumOrderedInt,
    #[serde(rename = "Enum-Unordered-Int")]
    EnumUnorderedInt,
    #[serde(rename = "Enum-Ordered-String")]
    EnumOrderedString,
    #[serde(rename = "Enum-Unordered-String")]
    EnumUnorderedString,
    #[serde(other)]
    Unknown,
}

impl ValueType {
    /// Get canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Long => "Long",
            ValueType::Date => "Date",
            ValueType::Boolean => "Boolean",
            ValueType::BooleanTested => "Boolean-Tested",
            ValueType::EnumOrderedInt => "Enum-Ordered-Int",
            ValueType::EnumUnorderedInt => "Enum-Unordered-Int",
            ValueType::EnumOrderedString => "Enum-Ordered-String",
            ValueType::EnumUnorderedString => "Enum-Unordered-String",
            ValueType::Unknown => "Unknown",
        }
    }

    /// Enum kinds carry an `options` list with their allowed values
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            ValueType::EnumOrderedInt
                | ValueType::EnumUnorderedInt
                | ValueType::EnumOrderedString
                | ValueType::EnumUnorderedString
        )
    }

    /// Int-backed enum kinds store values with a one-character ordinal prefix
    pub fn is_int_enum(&self) -> bool {
        matches!(self, ValueType::EnumOrderedInt | ValueType::EnumUnorderedInt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let vt: ValueType = serde_json::from_str("\"Boolean-Tested\"").unwrap();
        assert_eq!(vt, ValueType::BooleanTested);
        let vt: ValueType = serde_json::from_str("\"Enum-Ordered-Int\"").unwrap();
        assert_eq!(vt, ValueType::EnumOrderedInt);
        let vt: ValueType = serde_json::from_str("\"String\"").unwrap();
        assert_eq!(vt, ValueType::String);
    }

    #[test]
    fn test_unrecognized_tag_becomes_unknown() {
        let vt: ValueType = serde_json::from_str("\"Geo-Point\"").unwrap();
        assert_eq!(vt, ValueType::Unknown);
    }

    #[test]
    fn test_enum_kind_predicates() {
        assert!(ValueType::EnumUnorderedString.has_options());
        assert!(ValueType::EnumOrderedInt.is_int_enum());
        assert!(!ValueType::EnumOrderedString.is_int_enum());
        assert!(!ValueType::Long.has_options());
    }
}
