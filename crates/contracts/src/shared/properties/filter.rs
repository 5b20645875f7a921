use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value_type::ValueType;

/// Filter operator of the advanced search, with the wire names the search
/// endpoint expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparator {
    Equals,
    Unequal,
    LessThan,
    MoreThan,
    Between,
    Contains,
    ContainsNot,
    StartsWith,
    EndsWith,
}

/// Comparators of the ordered kinds (enums, numbers, dates)
const ORDERED_COMPARATORS: &[Comparator] = &[
    Comparator::Equals,
    Comparator::Unequal,
    Comparator::LessThan,
    Comparator::MoreThan,
    Comparator::Between,
];

/// Comparators of free-text properties
const TEXT_COMPARATORS: &[Comparator] = &[
    Comparator::Contains,
    Comparator::Equals,
    Comparator::ContainsNot,
    Comparator::StartsWith,
    Comparator::EndsWith,
];

impl Comparator {
    /// Get all comparators
    pub fn all() -> &'static [Comparator] {
        &[
            Comparator::Equals,
            Comparator::Unequal,
            Comparator::LessThan,
            Comparator::MoreThan,
            Comparator::Between,
            Comparator::Contains,
            Comparator::ContainsNot,
            Comparator::StartsWith,
            Comparator::EndsWith,
        ]
    }

    /// Get wire name, also used as the select option value
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equals => "equals",
            Comparator::Unequal => "unequal",
            Comparator::LessThan => "lessThan",
            Comparator::MoreThan => "moreThan",
            Comparator::Between => "between",
            Comparator::Contains => "contains",
            Comparator::ContainsNot => "containsNot",
            Comparator::StartsWith => "startsWith",
            Comparator::EndsWith => "endsWith",
        }
    }

    /// Parse a select option value back into a comparator
    pub fn parse(value: &str) -> Option<Comparator> {
        Comparator::all().iter().copied().find(|c| c.as_str() == value)
    }

    /// Get display label for UI. Date properties phrase the ordering
    /// comparators as before/after.
    pub fn label(&self, value_type: ValueType) -> &'static str {
        match self {
            Comparator::Equals => "gleich",
            Comparator::Unequal => "nicht",
            Comparator::LessThan => {
                if value_type == ValueType::Date {
                    "vor"
                } else {
                    "weniger als"
                }
            }
            Comparator::MoreThan => {
                if value_type == ValueType::Date {
                    "nach"
                } else {
                    "mehr als"
                }
            }
            Comparator::Between => "zwischen",
            Comparator::Contains => "beinhaltet",
            Comparator::ContainsNot => "nicht",
            Comparator::StartsWith => "beginnt mit",
            Comparator::EndsWith => "endet mit",
        }
    }

    /// Only `between` takes a second value
    pub fn requires_second_value(&self) -> bool {
        matches!(self, Comparator::Between)
    }
}

/// Input widget kind for a filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueWidget {
    /// Free text input
    Text,
    /// Numeric input
    Number,
    /// Date input
    Date,
    /// Single select over the property's options
    OptionSelect,
    /// Checkbox list over the property's options, multiple choice
    OptionChecklist,
    /// Single select over Ja/Nein
    BooleanSelect,
    /// Single select over Ja/Nein/Getestet/Nicht Getestet
    BooleanTestedSelect,
}

/// Value/label pairs of the Boolean select
pub const BOOLEAN_OPTIONS: &[(&str, &str)] = &[("true", "Ja"), ("false", "Nein")];

/// Value/label pairs of the Boolean-Tested select
pub const BOOLEAN_TESTED_OPTIONS: &[(&str, &str)] = &[
    ("true", "Ja"),
    ("false", "Nein"),
    ("tested", "Getestet"),
    ("notTested", "Nicht Getestet"),
];

/// Comparator choices and value widget for one property of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControls {
    /// Empty when the value type takes no comparator
    pub comparators: &'static [Comparator],
    pub widget: ValueWidget,
}

impl FilterControls {
    /// Get the controls appropriate for a value type
    pub fn for_value_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Boolean => Self {
                comparators: &[],
                widget: ValueWidget::BooleanSelect,
            },
            ValueType::BooleanTested => Self {
                comparators: &[],
                widget: ValueWidget::BooleanTestedSelect,
            },
            ValueType::EnumUnorderedInt | ValueType::EnumUnorderedString => Self {
                comparators: &[],
                widget: ValueWidget::OptionChecklist,
            },
            ValueType::EnumOrderedInt | ValueType::EnumOrderedString => Self {
                comparators: ORDERED_COMPARATORS,
                widget: ValueWidget::OptionSelect,
            },
            ValueType::Long => Self {
                comparators: ORDERED_COMPARATORS,
                widget: ValueWidget::Number,
            },
            ValueType::Date => Self {
                comparators: ORDERED_COMPARATORS,
                widget: ValueWidget::Date,
            },
            ValueType::String => Self {
                comparators: TEXT_COMPARATORS,
                widget: ValueWidget::Text,
            },
            ValueType::Unknown => Self {
                comparators: &[],
                widget: ValueWidget::Text,
            },
        }
    }

    pub fn has_comparators(&self) -> bool {
        !self.comparators.is_empty()
    }
}

/// Entered filter value: one raw input, or the picked options of a
/// multi-select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(value) => value.is_empty(),
            FilterValue::Multiple(values) => values.is_empty(),
        }
    }
}

/// Everything entered for one property of the search form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
    /// Upper bound of a `between` filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_value: Option<String>,
    /// How many generations of ancestors the filter reaches into
    pub generations: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            comparator: None,
            value: None,
            second_value: None,
            generations: 1,
        }
    }
}

/// Filter state of the whole search form, keyed by property name.
///
/// A property is active as soon as it has a comparator or a value. Clearing
/// the comparator clears the whole entry, value included. Empty inputs count
/// as cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFilters {
    entries: BTreeMap<String, FilterState>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or clear the comparator of a property. Clearing drops the
    /// whole entry. Selecting anything but `between` purges a stored second
    /// value, so no stale bound survives a comparator change.
    pub fn set_comparator(&mut self, name: &str, comparator: Option<Comparator>) {
        match comparator {
            Some(comparator) => {
                let entry = self.entries.entry(name.to_string()).or_default();
                entry.comparator = Some(comparator);
                if !comparator.requires_second_value() {
                    entry.second_value = None;
                }
            }
            None => {
                self.entries.remove(name);
            }
        }
    }

    /// Enter or clear the value of a property. An entry without comparator
    /// and value is dropped entirely.
    pub fn set_value(&mut self, name: &str, value: Option<FilterValue>) {
        let value = value.filter(|v| !v.is_empty());
        match value {
            Some(value) => {
                self.entries.entry(name.to_string()).or_default().value = Some(value);
            }
            None => {
                if let Some(entry) = self.entries.get_mut(name) {
                    entry.value = None;
                    if entry.comparator.is_none() {
                        self.entries.remove(name);
                    }
                }
            }
        }
    }

    /// Enter the second value of an active `between` filter
    pub fn set_second_value(&mut self, name: &str, value: Option<String>) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.second_value = value.filter(|v| !v.is_empty());
        }
    }

    /// Set the generation reach of an active filter
    pub fn set_generations(&mut self, name: &str, generations: u32) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.generations = generations;
        }
    }

    pub fn get(&self, name: &str) -> Option<&FilterState> {
        self.entries.get(name)
    }

    pub fn comparator(&self, name: &str) -> Option<Comparator> {
        self.entries.get(name).and_then(|entry| entry.comparator)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active filters in stable name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterState)> {
        self.entries.iter().map(|(name, state)| (name.as_str(), state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_wire_names() {
        assert_eq!(
            serde_json::to_string(&Comparator::LessThan).unwrap(),
            "\"lessThan\""
        );
        assert_eq!(
            serde_json::to_string(&Comparator::ContainsNot).unwrap(),
            "\"containsNot\""
        );
        assert_eq!(Comparator::parse("startsWith"), Some(Comparator::StartsWith));
        assert_eq!(Comparator::parse("übermorgen"), None);
    }

    #[test]
    fn test_labels_follow_value_type() {
        assert_eq!(Comparator::LessThan.label(ValueType::Long), "weniger als");
        assert_eq!(Comparator::LessThan.label(ValueType::Date), "vor");
        assert_eq!(Comparator::MoreThan.label(ValueType::Date), "nach");
        assert_eq!(Comparator::Contains.label(ValueType::String), "beinhaltet");
        assert_eq!(Comparator::Between.label(ValueType::EnumOrderedInt), "zwischen");
    }

    #[test]
    fn test_controls_per_value_type() {
        let boolean = FilterControls::for_value_type(ValueType::Boolean);
        assert!(!boolean.has_comparators());
        assert_eq!(boolean.widget, ValueWidget::BooleanSelect);

        let ordered = FilterControls::for_value_type(ValueType::EnumOrderedString);
        assert_eq!(ordered.comparators, ORDERED_COMPARATORS);
        assert_eq!(ordered.widget, ValueWidget::OptionSelect);

        let text = FilterControls::for_value_type(ValueType::String);
        assert_eq!(text.comparators, TEXT_COMPARATORS);
        assert_eq!(text.widget, ValueWidget::Text);

        let unordered = FilterControls::for_value_type(ValueType::EnumUnorderedInt);
        assert!(!unordered.has_comparators());
        assert_eq!(unordered.widget, ValueWidget::OptionChecklist);

        let unknown = FilterControls::for_value_type(ValueType::Unknown);
        assert!(!unknown.has_comparators());
        assert_eq!(unknown.widget, ValueWidget::Text);
    }

    #[test]
    fn test_clearing_comparator_drops_the_value_too() {
        let mut filters = SearchFilters::new();
        filters.set_comparator("hd", Some(Comparator::Equals));
        filters.set_value("hd", Some(FilterValue::Single("1A".into())));
        assert!(filters.is_active("hd"));

        filters.set_comparator("hd", None);
        assert!(!filters.is_active("hd"));
        assert!(filters.get("hd").is_none());
    }

    #[test]
    fn test_clearing_value_keeps_comparator_active() {
        let mut filters = SearchFilters::new();
        filters.set_comparator("hd", Some(Comparator::Equals));
        filters.set_value("hd", Some(FilterValue::Single("1A".into())));
        filters.set_value("hd", None);

        assert!(filters.is_active("hd"));
        assert_eq!(filters.comparator("hd"), Some(Comparator::Equals));
        assert!(filters.get("hd").unwrap().value.is_none());
    }

    #[test]
    fn test_value_only_entry_dropped_when_cleared() {
        let mut filters = SearchFilters::new();
        filters.set_value("castrated", Some(FilterValue::Single("true".into())));
        assert!(filters.is_active("castrated"));

        filters.set_value("castrated", Some(FilterValue::Single(String::new())));
        assert!(!filters.is_active("castrated"));
    }

    #[test]
    fn test_empty_multi_select_counts_as_cleared() {
        let mut filters = SearchFilters::new();
        filters.set_value("color", Some(FilterValue::Multiple(vec!["1Braun".into()])));
        assert!(filters.is_active("color"));

        filters.set_value("color", Some(FilterValue::Multiple(vec![])));
        assert!(!filters.is_active("color"));
    }

    #[test]
    fn test_second_value_purged_on_comparator_change() {
        let mut filters = SearchFilters::new();
        filters.set_comparator("weight", Some(Comparator::Between));
        filters.set_value("weight", Some(FilterValue::Single("20".into())));
        filters.set_second_value("weight", Some("30".into()));
        assert_eq!(filters.get("weight").unwrap().second_value.as_deref(), Some("30"));

        filters.set_comparator("weight", Some(Comparator::MoreThan));
        assert!(filters.get("weight").unwrap().second_value.is_none());
        // the first value survives the comparator change
        assert_eq!(
            filters.get("weight").unwrap().value,
            Some(FilterValue::Single("20".into()))
        );
    }

    #[test]
    fn test_second_value_and_generations_need_an_active_entry() {
        let mut filters = SearchFilters::new();
        filters.set_second_value("weight", Some("30".into()));
        filters.set_generations("weight", 4);
        assert!(!filters.is_active("weight"));

        filters.set_comparator("weight", Some(Comparator::Between));
        filters.set_generations("weight", 4);
        assert_eq!(filters.get("weight").unwrap().generations, 4);
    }

    #[test]
    fn test_active_count() {
        let mut filters = SearchFilters::new();
        assert_eq!(filters.active_count(), 0);
        filters.set_comparator("hd", Some(Comparator::Equals));
        filters.set_value("color", Some(FilterValue::Multiple(vec!["2Gold".into()])));
        assert_eq!(filters.active_count(), 2);
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_serialized_form_for_dispatch() {
        let mut filters = SearchFilters::new();
        filters.set_comparator("litterDate", Some(Comparator::MoreThan));
        filters.set_value("litterDate", Some(FilterValue::Single("2019-01-01".into())));

        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "litterDate": {
                    "comparator": "moreThan",
                    "value": "2019-01-01",
                    "generations": 1
                }
            })
        );
    }
}
