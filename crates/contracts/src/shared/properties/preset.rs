use std::collections::BTreeMap;

use super::registry::PropertyRegistry;

/// Named fixed set of output properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: u8,
    pub label: &'static str,
    pub properties: &'static [&'static str],
}

impl Preset {
    /// Get all built-in presets, in display order
    pub fn all() -> &'static [Preset] {
        &[
            Preset {
                id: 0,
                label: "Keine",
                properties: &[],
            },
            Preset {
                id: 2,
                label: "Standard",
                properties: &[
                    "fullName",
                    "hd",
                    "pl",
                    "d",
                    "dw",
                    "zzu",
                    "zge",
                    "gender",
                    "organisationId",
                ],
            },
            Preset {
                id: 1,
                label: "Name",
                properties: &["fullName"],
            },
            Preset {
                id: 3,
                label: "Farbe",
                properties: &["fullName", "color"],
            },
        ]
    }
}

/// Which properties the search outputs, plus the marker of the preset the
/// selection came from.
///
/// Applying a preset replaces the whole selection. Any manual toggle clears
/// the preset marker, even when the resulting set still matches the preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSelection {
    active: BTreeMap<String, bool>,
    active_preset: Option<u8>,
}

impl OutputSelection {
    /// Start with every property of the registry switched off and no preset
    /// marked
    pub fn for_registry(registry: &PropertyRegistry) -> Self {
        Self {
            active: registry.names().map(|name| (name.to_string(), false)).collect(),
            active_preset: None,
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.active.get(name).copied().unwrap_or(false)
    }

    pub fn active_preset(&self) -> Option<u8> {
        self.active_preset
    }

    /// Flip one property and drop the preset marker
    pub fn toggle(&mut self, name: &str) {
        let flag = self.active.entry(name.to_string()).or_insert(false);
        *flag = !*flag;
        self.active_preset = None;
    }

    /// Replace the selection with exactly the preset's properties. Preset
    /// names the selection does not know are ignored.
    pub fn apply_preset(&mut self, preset: &Preset) {
        for (name, flag) in self.active.iter_mut() {
            *flag = preset.properties.contains(&name.as_str());
        }
        self.active_preset = Some(preset.id);
    }

    /// Selected property names, in stable name order
    pub fn selected(&self) -> Vec<String> {
        self.active
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
