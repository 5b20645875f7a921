use contracts::domain::dog::{DogDetailData, DogRecord};
use contracts::shared::graphql::{dog_detail_query, QueryError, QueryResult};
use contracts::shared::properties::{display_value, PropertyRegistry};
use serde_json::json;

use crate::shared::api;

/// One line of the property list: resolved label and display formatted value
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// Load one dog with every basic property the catalog knows about
pub async fn fetch_dog(registry: &PropertyRegistry, dog_id: &str) -> QueryResult<DogRecord> {
    let query = dog_detail_query(registry);
    let data: DogDetailData = api::execute(&query, json!({ "id": dog_id })).await?;
    data.dog
        .ok_or_else(|| QueryError::graphql(format!("no dog with id {}", dog_id)))
}

/// Turn a dog record into display rows, one per present property
///
/// Rows come out in stable name order. Every extracted name must resolve to
/// a catalog definition; a miss means the catalog and the query drifted
/// apart, which aborts the render path.
pub fn property_rows(registry: &PropertyRegistry, record: &DogRecord) -> Vec<PropertyRow> {
    let extracted = registry.process_record(record.as_value());
    let mut rows = Vec::with_capacity(extracted.len());
    for (name, value) in extracted {
        let property = registry
            .definition(&name)
            .expect("property definition not found");
        rows.push(PropertyRow {
            label: property.info.display_name.clone(),
            value: display_value(property.value_type(), &value),
            name,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::properties::{PropertyInfo, ValueType};

    fn registry() -> PropertyRegistry {
        PropertyRegistry::bootstrap(vec![
            PropertyInfo::new(
                "hd",
                ValueType::BooleanTested,
                "HD",
                "HD-Befund",
                "Befund der Hueftdysplasie",
                "Gesundheit",
            ),
            PropertyInfo::new(
                "color",
                ValueType::EnumOrderedInt,
                "Farbe",
                "Fellfarbe",
                "Farbe des Fells",
                "Aussehen",
            ),
        ])
    }

    #[test]
    fn test_property_rows_format_and_order() {
        let record = DogRecord(serde_json::json!({
            "fullName": "Asta vom Eichenhof",
            "gender": "H",
            "hd": true,
            "color": "2Schwarz",
            "litter": { "date": "2019-05-01" }
        }));

        let rows = property_rows(&registry(), &record);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["color", "fullName", "gender", "hd", "litterDate"]);

        let by_name = |n: &str| rows.iter().find(|r| r.name == n).unwrap();
        assert_eq!(by_name("hd").label, "HD-Befund");
        assert_eq!(by_name("hd").value, "ja");
        assert_eq!(by_name("color").value, "Schwarz");
        assert_eq!(by_name("fullName").label, "Ganzer Name");
        assert_eq!(by_name("fullName").value, "Asta vom Eichenhof");
        assert_eq!(by_name("litterDate").label, "Geboren");
        assert_eq!(by_name("litterDate").value, "2019-05-01");
    }

    #[test]
    fn test_property_rows_skip_absent_values() {
        let record = DogRecord(serde_json::json!({ "fullName": "Rex" }));

        let rows = property_rows(&registry(), &record);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "fullName");
    }
}
