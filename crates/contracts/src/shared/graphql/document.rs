use std::collections::BTreeMap;

use crate::domain::data::{KENNEL_FIELDS, LITTER_FIELDS, PERSON_FIELDS};
use crate::shared::properties::{PropertyRegistry, PropertySource};

/// Bootstrap query for the property catalog
pub const PROPERTIES_QUERY: &str = "\
query Properties {
    properties {
        name
        shortDisplayName
        displayName
        description
        valueType
        section
        options
    }
}";

/// Quick-search query, fired on every input change
pub const QUICK_SEARCH_QUERY: &str = "\
query QuickSearch($text: String!) {
    quickSearch(query: $text) {
        id
        name
        nodeType
    }
}";

/// Detail query for one dog: the fixed base selection with nested litter,
/// kennel and owner, plus every basic property the registry knows about.
/// Overlap between the base selection and the basic names is harmless in
/// GraphQL and left in place.
pub fn dog_detail_query(registry: &PropertyRegistry) -> String {
    let basic: Vec<&str> = registry.basic_names().collect();
    format!(
        "query Dog($id: String!) {{\n    dog(id: $id) {{\n        fullName\n        name\n        gender\n        litter {{\n            {litter}\n            kennel {{\n                {kennel}\n            }}\n        }}\n        owner {{\n            {person}\n        }}\n        {basic}\n    }}\n}}",
        litter = LITTER_FIELDS.join(" "),
        kennel = KENNEL_FIELDS.join(" "),
        person = PERSON_FIELDS.join(" "),
        basic = basic.join(" "),
    )
}

/// Selection fragment for the chosen search output properties: direct
/// properties contribute their name as-is, derived properties are folded
/// into one nested block per related object. Names the registry does not
/// know are skipped.
pub fn search_selection_fragment<'a, I>(registry: &PropertyRegistry, names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut direct: Vec<&str> = Vec::new();
    let mut nested: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for name in names {
        if let Some(property) = registry.definition(name) {
            match &property.source {
                PropertySource::Direct => direct.push(property.name()),
                PropertySource::Nested { object, field } => {
                    nested.entry(object.as_str()).or_default().push(field.as_str());
                }
            }
        }
    }

    let mut parts: Vec<String> = direct.iter().map(|name| name.to_string()).collect();
    for (object, fields) in nested {
        parts.push(format!("{} {{ {} }}", object, fields.join(" ")));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use crate::shared::properties::{PropertyInfo, ValueType};

    use super::*;

    fn registry() -> PropertyRegistry {
        PropertyRegistry::bootstrap(vec![PropertyInfo::new(
            "color",
            ValueType::EnumUnorderedInt,
            "Farbe",
            "Farbe",
            "Fellfarbe",
            "Aussehen",
        )])
    }

    #[test]
    fn test_fixed_documents_request_expected_fields() {
        assert!(PROPERTIES_QUERY.starts_with("query Properties"));
        for field in ["name", "valueType", "section", "options"] {
            assert!(PROPERTIES_QUERY.contains(field), "missing {field}");
        }
        assert!(QUICK_SEARCH_QUERY.contains("quickSearch(query: $text)"));
        assert!(QUICK_SEARCH_QUERY.contains("nodeType"));
    }

    #[test]
    fn test_dog_detail_query_shape() {
        let query = dog_detail_query(&registry());
        assert!(query.starts_with("query Dog($id: String!)"));
        assert!(query.contains("dog(id: $id)"));
        assert!(query.contains("litter {"));
        assert!(query.contains("kennel {"));
        assert!(query.contains("owner {"));
        // nested selections come from the fixed field lists
        assert!(query.contains("id name fullName date initials"));
        assert!(query.contains("id name fullName link"));
        assert!(query.contains("phoneNumbers emails"));
        // dynamic part covers server rows and built-ins
        assert!(query.contains("color"));
        assert!(query.contains("gender"));
        // derived names never appear as top-level fields
        assert!(!query.contains("litterName"));
    }

    #[test]
    fn test_selection_fragment_folds_derived_properties() {
        let fragment = search_selection_fragment(
            &registry(),
            ["fullName", "litterName", "litterDate", "kennelName"],
        );
        assert_eq!(
            fragment,
            "fullName kennel { name } litter { fullName date }"
        );
    }

    #[test]
    fn test_selection_fragment_skips_unknown_names() {
        let fragment = search_selection_fragment(&registry(), ["fullName", "hd", "color"]);
        assert_eq!(fragment, "fullName color");
    }

    #[test]
    fn test_selection_fragment_empty_input() {
        assert_eq!(
            search_selection_fragment(&registry(), std::iter::empty::<&str>()),
            ""
        );
    }
}
