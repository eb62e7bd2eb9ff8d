use crate::labels::{SLOT_COUNT, Slot};
use serde::{Deserialize, Serialize};

pub const DEFAULT_KEY_COLOR: &str = "#cccccc";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_TEXT_SIZE: f64 = 3.0;
pub const DEFAULT_BACKCOLOR: &str = "#eeeeee";

/// Legend text per slot, in canonical order.
pub type Labels = [Option<String>; SLOT_COUNT];

/// Per-key fallbacks used by every slot without an override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDefaults {
    pub text_color: String,
    pub text_size: f64,
}

impl Default for KeyDefaults {
    fn default() -> Self {
        Self {
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

/// One physical key, fully resolved.
///
/// Overrides in `text_color` / `text_size` are only stored when the slot carries a legend and
/// the value differs from [`Key::default`]; use the `effective_*` accessors to read the value
/// that actually applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub color: String,
    pub labels: Labels,
    #[serde(rename = "textColor")]
    pub text_color: [Option<String>; SLOT_COUNT],
    #[serde(rename = "textSize")]
    pub text_size: [Option<f64>; SLOT_COUNT],
    pub default: KeyDefaults,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub x2: f64,
    pub y2: f64,
    pub width2: f64,
    pub height2: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_angle: f64,
    pub decal: bool,
    pub ghost: bool,
    pub stepped: bool,
    /// Homing nub.
    pub nub: bool,
    pub profile: String,
    /// Switch mount.
    pub sm: String,
    /// Switch brand.
    pub sb: String,
    /// Switch type.
    pub st: String,
}

impl Default for Key {
    fn default() -> Self {
        Self {
            color: DEFAULT_KEY_COLOR.to_string(),
            labels: Default::default(),
            text_color: Default::default(),
            text_size: Default::default(),
            default: KeyDefaults::default(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            x2: 0.0,
            y2: 0.0,
            width2: 1.0,
            height2: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_angle: 0.0,
            decal: false,
            ghost: false,
            stepped: false,
            nub: false,
            profile: String::new(),
            sm: String::new(),
            sb: String::new(),
            st: String::new(),
        }
    }
}

impl Key {
    pub fn label(&self, slot: Slot) -> Option<&str> {
        self.labels[slot.index()].as_deref()
    }

    pub fn effective_text_color(&self, slot: Slot) -> &str {
        self.text_color[slot.index()]
            .as_deref()
            .unwrap_or(&self.default.text_color)
    }

    pub fn effective_text_size(&self, slot: Slot) -> f64 {
        self.text_size[slot.index()].unwrap_or(self.default.text_size)
    }

    /// Slots that carry legend text, paired with the text.
    pub fn legends(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.label(slot).map(|text| (slot, text)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub name: String,
    pub style: String,
}

/// Keyboard-wide descriptive fields, taken from the optional leading object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardMetadata {
    pub author: String,
    pub backcolor: String,
    pub background: Option<Background>,
    pub name: String,
    pub notes: String,
    pub radii: String,
    pub switch_mount: String,
    pub switch_brand: String,
    pub switch_type: String,
}

impl Default for KeyboardMetadata {
    fn default() -> Self {
        Self {
            author: String::new(),
            backcolor: DEFAULT_BACKCOLOR.to_string(),
            background: None,
            name: String::new(),
            notes: String::new(),
            radii: String::new(),
            switch_mount: String::new(),
            switch_brand: String::new(),
            switch_type: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    pub meta: KeyboardMetadata,
    pub keys: Vec<Key>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_values_fall_back_to_key_defaults() {
        let mut key = Key::default();
        key.labels[Slot::Center.index()] = Some("A".to_string());
        key.text_color[Slot::Center.index()] = Some("#ff0000".to_string());

        assert_eq!(key.effective_text_color(Slot::Center), "#ff0000");
        assert_eq!(key.effective_text_color(Slot::TopLeft), DEFAULT_TEXT_COLOR);
        assert_eq!(key.effective_text_size(Slot::Center), DEFAULT_TEXT_SIZE);
        assert_eq!(
            key.legends().collect::<Vec<_>>(),
            vec![(Slot::Center, "A")]
        );
    }

    #[test]
    fn key_serializes_with_editor_field_names() {
        let value = serde_json::to_value(Key::default()).unwrap();
        assert_eq!(value["textColor"].as_array().map(Vec::len), Some(SLOT_COUNT));
        assert_eq!(value["default"]["textSize"], serde_json::json!(3.0));
        assert_eq!(value["rotation_x"], serde_json::json!(0.0));
    }

    #[test]
    fn metadata_serializes_camel_case() {
        let value = serde_json::to_value(KeyboardMetadata::default()).unwrap();
        assert_eq!(value["backcolor"], serde_json::json!("#eeeeee"));
        assert!(value.get("switchMount").is_some());
        assert_eq!(value["background"], serde_json::Value::Null);
    }
}
