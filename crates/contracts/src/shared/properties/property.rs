use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_type::ValueType;

/// Display and typing metadata of one property, in the shape delivered by
/// the `properties` query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub name: String,
    pub value_type: ValueType,
    pub short_display_name: String,
    pub display_name: String,
    pub description: String,
    /// Grouping key for UI layout, not an ordering key
    pub section: String,
    /// Allowed values, present for the Enum-* kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl PropertyInfo {
    pub fn new(
        name: impl Into<String>,
        value_type: ValueType,
        short_display_name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            short_display_name: short_display_name.into(),
            display_name: display_name.into(),
            description: description.into(),
            section: section.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    /// Enum options, empty for non-enum kinds
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// Where a property's value lives inside a raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertySource {
    /// Top-level key of the record, equal to the property name
    Direct,
    /// Field of a nested related object, e.g. `litter.initials`
    Nested { object: String, field: String },
}

/// A resolvable property: metadata plus the location of its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub info: PropertyInfo,
    pub source: PropertySource,
}

impl Property {
    /// Property read from the record itself
    pub fn direct(info: PropertyInfo) -> Self {
        Self {
            info,
            source: PropertySource::Direct,
        }
    }

    /// Property read from a nested related object
    pub fn nested(info: PropertyInfo, object: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            info,
            source: PropertySource::Nested {
                object: object.into(),
                field: field.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn value_type(&self) -> ValueType {
        self.info.value_type
    }

    /// Look up this property's value inside a raw record.
    ///
    /// Total over any input: a non-object record, a missing key, or a missing
    /// nested object all yield `None`, never an error.
    pub fn extract<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        match &self.source {
            PropertySource::Direct => record.get(self.info.name.as_str()),
            PropertySource::Nested { object, field } => record
                .get(object.as_str())
                .and_then(|nested| nested.get(field.as_str())),
        }
    }
}
