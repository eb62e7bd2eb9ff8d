use crate::model::{Background, KeyboardMetadata};
use serde_json::{Map, Value};

/// Copies the allow-listed keyboard fields out of the leading metadata object.
///
/// Empty or mistyped values leave the default in place; fields outside the allow-list are
/// ignored.
pub fn extract_metadata(obj: &Map<String, Value>) -> KeyboardMetadata {
    let mut meta = KeyboardMetadata::default();

    copy_text(obj, "author", &mut meta.author);
    copy_text(obj, "backcolor", &mut meta.backcolor);
    copy_text(obj, "name", &mut meta.name);
    copy_text(obj, "notes", &mut meta.notes);
    copy_text(obj, "radii", &mut meta.radii);
    copy_text(obj, "switchMount", &mut meta.switch_mount);
    copy_text(obj, "switchBrand", &mut meta.switch_brand);
    copy_text(obj, "switchType", &mut meta.switch_type);

    match obj.get("background") {
        None | Some(Value::Null) => {}
        Some(Value::Object(bg)) => {
            meta.background = Some(Background {
                name: string_field(bg, "name"),
                style: string_field(bg, "style"),
            });
        }
        Some(other) => {
            tracing::trace!(value = %other, "ignoring non-object keyboard background");
        }
    }

    meta
}

fn copy_text(obj: &Map<String, Value>, field: &str, out: &mut String) {
    match obj.get(field) {
        Some(Value::String(s)) if !s.is_empty() => *out = s.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(other) => {
            tracing::trace!(field, value = %other, "ignoring mistyped keyboard metadata field");
        }
    }
}

fn string_field(obj: &Map<String, Value>, field: &str) -> String {
    obj.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
