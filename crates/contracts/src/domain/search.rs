use serde::{Deserialize, Serialize};

/// Entity kind of a quick-search match. Kinds this build does not know
/// deserialize as `Unknown` and get a neutral label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Dog,
    Litter,
    Kennel,
    Person,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Get display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Dog => "Hund",
            NodeType::Litter => "Wurf",
            NodeType::Kennel => "Zwinger",
            NodeType::Person => "Person",
            NodeType::Unknown => "Unbekannt",
        }
    }
}

/// One quick-search match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub node_type: NodeType,
}

/// Payload of the quick-search query, ranked by the server
#[derive(Debug, Clone, Deserialize)]
pub struct QuickSearchData {
    #[serde(rename = "quickSearch")]
    pub quick_search: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_type_labels() {
        assert_eq!(NodeType::Dog.label(), "Hund");
        assert_eq!(NodeType::Litter.label(), "Wurf");
        assert_eq!(NodeType::Kennel.label(), "Zwinger");
        assert_eq!(NodeType::Person.label(), "Person");
        assert_eq!(NodeType::Unknown.label(), "Unbekannt");
    }

    #[test]
    fn test_payload_keeps_server_ranking() {
        let data: QuickSearchData = serde_json::from_value(json!({
            "quickSearch": [
                {"id": "7", "name": "Rex", "nodeType": "Dog"},
                {"id": "3", "name": "A-Wurf", "nodeType": "Litter"},
                {"id": "9", "name": "Haus Sonne", "nodeType": "Cattery"}
            ]
        }))
        .unwrap();

        let kinds: Vec<_> = data.quick_search.iter().map(|hit| hit.node_type).collect();
        assert_eq!(kinds, [NodeType::Dog, NodeType::Litter, NodeType::Unknown]);
        assert_eq!(data.quick_search[0].name, "Rex");
    }
}
