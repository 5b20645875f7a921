use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw dog record of the detail query. The key set varies with the server's
/// property configuration, so the payload stays a dynamic JSON object and
/// the registry decides what to read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DogRecord(pub Value);

impl DogRecord {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Full name straight off the record, independent of the registry
    pub fn full_name(&self) -> Option<&str> {
        self.0.get("fullName").and_then(Value::as_str)
    }
}

/// Payload of the dog detail query
#[derive(Debug, Clone, Deserialize)]
pub struct DogDetailData {
    /// Null when no dog matches the requested id
    pub dog: Option<DogRecord>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_full_name_access() {
        let record = DogRecord(json!({"fullName": "Rex vom Hof", "gender": "m"}));
        assert_eq!(record.full_name(), Some("Rex vom Hof"));

        let record = DogRecord(json!({"gender": "m"}));
        assert_eq!(record.full_name(), None);
    }

    #[test]
    fn test_detail_payload_with_missing_dog() {
        let data: DogDetailData = serde_json::from_value(json!({"dog": null})).unwrap();
        assert!(data.dog.is_none());

        let data: DogDetailData =
            serde_json::from_value(json!({"dog": {"fullName": "Rex"}})).unwrap();
        assert_eq!(data.dog.unwrap().full_name(), Some("Rex"));
    }
}
