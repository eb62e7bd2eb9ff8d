use kle_core::Keyboard;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Invalid layout syntax: {message}")]
    Syntax { message: String },

    #[error(transparent)]
    Decode(#[from] kle_core::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub relaxed: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::relaxed()
    }
}

impl ParseOptions {
    /// Strict JSON: the text must be a complete document (`[ ... ]`).
    pub fn strict() -> Self {
        Self { relaxed: false }
    }

    /// JSON5 syntax (unquoted keys, single quotes, trailing commas); the editor's bracket-less
    /// raw-data fragments are accepted too.
    pub fn relaxed() -> Self {
        Self { relaxed: true }
    }
}

/// Parses layout text and decodes it into a [`Keyboard`].
///
/// ```
/// use kle::{ParseOptions, Slot, parse_str};
///
/// let kb = parse_str(r#"["Esc", {x:1}, "F1"], [{a:7}, "Tab"]"#, ParseOptions::relaxed())?;
/// assert_eq!(kb.keys.len(), 3);
/// assert_eq!(kb.keys[1].x, 2.0);
/// assert_eq!(kb.keys[2].label(Slot::Center), Some("Tab"));
/// # Ok::<(), kle::TextError>(())
/// ```
pub fn parse_str(text: &str, options: ParseOptions) -> Result<Keyboard> {
    let value = if options.relaxed {
        parse_relaxed(text)?
    } else {
        serde_json::from_str::<Value>(text).map_err(|e| TextError::Syntax {
            message: e.to_string(),
        })?
    };
    Ok(kle_core::decode(&value)?)
}

fn parse_relaxed(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    let whole = match json5::from_str::<Value>(trimmed) {
        Ok(value) if is_complete_document(&value) => return Ok(value),
        other => other,
    };

    // Raw-data pane contents: rows (and the metadata object) without the outer brackets.
    match json5::from_str::<Value>(&format!("[{trimmed}]")) {
        Ok(value) => {
            tracing::debug!("treating layout text as a raw-data fragment");
            Ok(value)
        }
        Err(wrapped_err) => match whole {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::trace!(%wrapped_err, "raw-data fragment fallback failed");
                Err(TextError::Syntax {
                    message: e.to_string(),
                })
            }
        },
    }
}

/// An array made only of rows and objects; a bare row (strings at the top level) is a
/// fragment.
fn is_complete_document(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|v| v.is_array() || v.is_object()))
}
