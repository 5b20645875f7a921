use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::property::{Property, PropertyInfo};
use super::value_type::ValueType;

/// Payload of the bootstrap `properties` query
#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesData {
    pub properties: Vec<PropertyInfo>,
}

/// Immutable catalog of all known properties, built once at startup.
///
/// The basic set holds the top-level fields the server reported plus the
/// built-in base fields; it drives the dynamic part of the dog query. The
/// combined set adds the derived properties reading from nested litter and
/// kennel objects; it drives extraction, rendering, and the search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRegistry {
    basic: BTreeMap<String, PropertyInfo>,
    all: BTreeMap<String, Property>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the session's registry from the rows of the `properties` query:
    /// server rows first (the last row wins on a duplicate name), then the
    /// built-in base fields, then the fixed derived litter/kennel set.
    pub fn bootstrap(rows: Vec<PropertyInfo>) -> Self {
        let mut registry = Self::new();
        for row in rows {
            registry.register_basic(row);
        }
        for info in builtin_base_fields() {
            registry.register_basic(info);
        }
        for (object, field, info) in derived_fields() {
            registry.register_derived(info, object, field);
        }
        registry
    }

    /// Register a top-level property. Replaces an earlier entry with the
    /// same name.
    pub fn register_basic(&mut self, info: PropertyInfo) {
        self.all
            .insert(info.name.clone(), Property::direct(info.clone()));
        self.basic.insert(info.name.clone(), info);
    }

    /// Register a derived property reading `object.field` from a nested
    /// record. Shadows a basic property with the same name in the combined
    /// set; the basic set is untouched.
    pub fn register_derived(&mut self, info: PropertyInfo, object: &str, field: &str) {
        self.all
            .insert(info.name.clone(), Property::nested(info, object, field));
    }

    /// Definition behind a property name, if any
    pub fn definition(&self, name: &str) -> Option<&Property> {
        self.all.get(name)
    }

    /// Names of the top-level fields to request from the server, in stable
    /// name order
    pub fn basic_names(&self) -> impl Iterator<Item = &str> {
        self.basic.keys().map(String::as_str)
    }

    /// Every resolvable property, in stable name order
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.all.values()
    }

    /// Names of every resolvable property, in stable name order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.all.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Extract every property of a raw record, dropping entries that yielded
    /// no value. Null counts as no value.
    pub fn process_record(&self, record: &Value) -> BTreeMap<String, Value> {
        self.all
            .values()
            .filter_map(|property| {
                property
                    .extract(record)
                    .filter(|value| !value.is_null())
                    .map(|value| (property.name().to_string(), value.clone()))
            })
            .collect()
    }

    /// Properties grouped for form layout: sections in lexicographic order,
    /// properties inside a section sorted by display name
    pub fn grouped_by_section(&self) -> Vec<(String, Vec<Property>)> {
        let mut sections: BTreeMap<String, Vec<Property>> = BTreeMap::new();
        for property in self.all.values() {
            sections
                .entry(property.info.section.clone())
                .or_default()
                .push(property.clone());
        }
        let mut grouped: Vec<_> = sections.into_iter().collect();
        for (_, properties) in &mut grouped {
            properties.sort_by(|a, b| a.info.display_name.cmp(&b.info.display_name));
        }
        grouped
    }
}

/// Base fields every dog record carries even when the server's property
/// list omits them
fn builtin_base_fields() -> Vec<PropertyInfo> {
    vec![
        PropertyInfo::new(
            "fullName",
            ValueType::String,
            "GName",
            "Ganzer Name",
            "Ganzer Name",
            "Allgemein",
        ),
        PropertyInfo::new("name", ValueType::String, "Name", "Name", "Vorname", "Allgemein"),
        PropertyInfo::new(
            "gender",
            ValueType::String,
            "Geschlecht",
            "Geschlecht",
            "Geschlecht",
            "Allgemein",
        ),
    ]
}

/// Fixed derived properties reading from the nested litter and kennel
/// objects of a dog record
fn derived_fields() -> Vec<(&'static str, &'static str, PropertyInfo)> {
    vec![
        (
            "litter",
            "fullName",
            PropertyInfo::new(
                "litterName",
                ValueType::String,
                "WNm",
                "Wurf",
                "Name des Wurfes",
                "Allgemein",
            ),
        ),
        (
            "litter",
            "initials",
            PropertyInfo::new(
                "litterInitials",
                ValueType::String,
                "WIn",
                "Wurf-Nummer",
                "Startbuchstaben des Wurfes",
                "Allgemein",
            ),
        ),
        (
            "litter",
            "date",
            PropertyInfo::new(
                "litterDate",
                ValueType::Date,
                "Geb",
                "Geboren",
                "Geburtsdatum des Hundes",
                "Allgemein",
            ),
        ),
        (
            "kennel",
            "fullName",
            PropertyInfo::new(
                "kennelFullName",
                ValueType::String,
                "ZNm",
                "Zwinger",
                "Gesamtname des Zwingers",
                "Allgemein",
            ),
        ),
        (
            "kennel",
            "name",
            PropertyInfo::new(
                "kennelName",
                ValueType::String,
                "ZGnm",
                "Zwinger-Name",
                "Name des Zwingers",
                "Allgemein",
            ),
        ),
        (
            "kennel",
            "link",
            PropertyInfo::new(
                "kennelLink",
                ValueType::String,
                "ZName",
                "Zwinger-Verbindung",
                "Verbindung des Zwingers",
                "Allgemein",
            ),
        ),
    ]
}
