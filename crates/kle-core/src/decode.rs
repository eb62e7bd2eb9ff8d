//! Row/key accumulator: walks the serialized rows and resolves inherited key state.

use crate::labels::{self, DEFAULT_ALIGNMENT, SLOT_COUNT};
use crate::metadata::extract_metadata;
use crate::model::{Key, Keyboard};
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Decodes a serialized KLE document (an array of rows, optionally led by a metadata object).
///
/// Fails on the first structural violation; no partial keyboard is returned.
pub fn decode(input: &Value) -> Result<Keyboard> {
    let Some(rows) = input.as_array() else {
        return Err(Error::NotASequence {
            fragment: input.clone(),
        });
    };

    let mut keyboard = Keyboard::default();
    let mut acc = Accumulator::new();

    for (index, element) in rows.iter().enumerate() {
        match element {
            Value::Array(cells) => acc.row(index, cells, &mut keyboard.keys)?,
            Value::Object(obj) => {
                if index != 0 {
                    return Err(Error::MisplacedMetadata {
                        index,
                        fragment: element.clone(),
                    });
                }
                keyboard.meta = extract_metadata(obj);
            }
            other => {
                return Err(Error::UnexpectedElement {
                    index,
                    fragment: other.clone(),
                });
            }
        }
    }

    tracing::debug!(
        rows = rows.len(),
        keys = keyboard.keys.len(),
        "decoded keyboard layout"
    );
    Ok(keyboard)
}

/// Per-call decoding state.
///
/// `current` is the key template; `sizes` holds pending per-legend sizes in serialized order
/// (they are remapped with the alignment in force when each key is emitted), while
/// `current.text_color` is already in canonical order.
struct Accumulator {
    current: Key,
    sizes: [Option<f64>; SLOT_COUNT],
    align: u8,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            current: Key::default(),
            sizes: Default::default(),
            align: DEFAULT_ALIGNMENT,
        }
    }

    fn row(&mut self, row: usize, cells: &[Value], keys: &mut Vec<Key>) -> Result<()> {
        for (cell, item) in cells.iter().enumerate() {
            match item {
                Value::String(text) => keys.push(self.emit(text)),
                Value::Object(obj) => self.apply(row, cell, obj, item)?,
                other => {
                    return Err(Error::UnexpectedElement {
                        index: row,
                        fragment: other.clone(),
                    });
                }
            }
        }

        self.current.y += 1.0;
        self.current.x = self.current.rotation_x;
        Ok(())
    }

    fn apply(
        &mut self,
        row: usize,
        cell: usize,
        obj: &Map<String, Value>,
        raw: &Value,
    ) -> Result<()> {
        let m = Modifier(obj);
        let cur = &mut self.current;

        if cell != 0 && ["r", "rx", "ry"].iter().any(|f| m.is_set(f)) {
            return Err(Error::MisplacedRotation {
                row,
                cell,
                fragment: raw.clone(),
            });
        }
        if let Some(r) = m.number("r") {
            cur.rotation_angle = r;
        }
        if let Some(rx) = m.number("rx") {
            cur.rotation_x = rx;
        }
        if let Some(ry) = m.number("ry") {
            cur.rotation_y = ry;
        }
        if let Some(a) = m.number("a") {
            self.align = (a as i64 & 7) as u8;
        }
        if let Some(f) = m.nonzero("f") {
            cur.default.text_size = f;
            self.sizes = Default::default();
        }
        if let Some(f2) = m.nonzero("f2") {
            for size in self.sizes.iter_mut().skip(1) {
                *size = Some(f2);
            }
        }
        if let Some(fa) = m.sizes("fa") {
            self.sizes = fa;
        }
        if let Some(p) = m.text("p") {
            cur.profile = p.to_string();
        }
        if let Some(c) = m.text("c") {
            cur.color = c.to_string();
        }
        if let Some(t) = m.text("t") {
            let colors: Vec<&str> = t.split('\n').collect();
            if let Some(first) = colors.first().filter(|c| !c.is_empty()) {
                cur.default.text_color = first.to_string();
            }
            cur.text_color = labels::reorder(colors.into_iter().map(owned_non_empty), self.align);
        }
        if let Some(x) = m.nonzero("x") {
            cur.x += x;
        }
        if let Some(y) = m.nonzero("y") {
            cur.y += y;
        }
        if let Some(w) = m.nonzero("w") {
            cur.width = w;
            cur.width2 = w;
        }
        if let Some(h) = m.nonzero("h") {
            cur.height = h;
            cur.height2 = h;
        }
        if let Some(x2) = m.nonzero("x2") {
            cur.x2 = x2;
        }
        if let Some(y2) = m.nonzero("y2") {
            cur.y2 = y2;
        }
        if let Some(w2) = m.nonzero("w2") {
            cur.width2 = w2;
        }
        if let Some(h2) = m.nonzero("h2") {
            cur.height2 = h2;
        }
        if m.flag("n") {
            cur.nub = true;
        }
        if m.flag("l") {
            cur.stepped = true;
        }
        if m.flag("d") {
            cur.decal = true;
        }
        if let Some(g) = m.boolean("g") {
            cur.ghost = g;
        }
        if let Some(sm) = m.text("sm") {
            cur.sm = sm.to_string();
        }
        if let Some(sb) = m.text("sb") {
            cur.sb = sb.to_string();
        }
        if let Some(st) = m.text("st") {
            cur.st = st.to_string();
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Key {
        let mut key = self.current.clone();

        // A zero secondary size means "same as primary".
        if key.width2 == 0.0 {
            key.width2 = key.width;
        }
        if key.height2 == 0.0 {
            key.height2 = key.height;
        }

        key.labels = labels::reorder(text.split('\n').map(owned_non_empty), self.align);
        key.text_size = labels::reorder(self.sizes, self.align);

        for i in 0..SLOT_COUNT {
            if key.labels[i].is_none() {
                key.text_size[i] = None;
                key.text_color[i] = None;
            }
            if key.text_size[i] == Some(key.default.text_size) {
                key.text_size[i] = None;
            }
            if key.text_color[i].as_deref() == Some(key.default.text_color.as_str()) {
                key.text_color[i] = None;
            }
        }

        let cur = &mut self.current;
        cur.x += cur.width;
        cur.width = 1.0;
        cur.height = 1.0;
        cur.x2 = 0.0;
        cur.y2 = 0.0;
        cur.width2 = 0.0;
        cur.height2 = 0.0;
        cur.nub = false;
        cur.stepped = false;
        cur.decal = false;

        key
    }
}

fn owned_non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Typed, tolerant view over a modifier cell.
///
/// Fields follow the editor's truthiness rules: a zero number, an empty string or `false`
/// counts as "not set" unless the accessor says otherwise. Mistyped values are skipped.
struct Modifier<'a>(&'a Map<String, Value>);

impl<'a> Modifier<'a> {
    fn is_set(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(|v| !v.is_null())
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Any present number, zero included.
    fn number(&self, field: &str) -> Option<f64> {
        let value = self.get(field)?;
        let n = value.as_f64();
        if n.is_none() {
            tracing::trace!(field, %value, "ignoring non-numeric modifier field");
        }
        n
    }

    fn nonzero(&self, field: &str) -> Option<f64> {
        self.number(field).filter(|n| *n != 0.0)
    }

    fn text(&self, field: &str) -> Option<&'a str> {
        match self.get(field)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            value => {
                tracing::trace!(field, %value, "ignoring non-string modifier field");
                None
            }
        }
    }

    fn boolean(&self, field: &str) -> Option<bool> {
        let value = self.get(field)?;
        let b = value.as_bool();
        if b.is_none() {
            tracing::trace!(field, %value, "ignoring non-boolean modifier field");
        }
        b
    }

    fn flag(&self, field: &str) -> bool {
        self.boolean(field).unwrap_or(false)
    }

    /// A per-legend size list: an array (holes as `null`) or a newline-joined string.
    fn sizes(&self, field: &str) -> Option<[Option<f64>; SLOT_COUNT]> {
        let mut out: [Option<f64>; SLOT_COUNT] = Default::default();
        match self.get(field)? {
            Value::Array(items) => {
                for (slot, item) in out.iter_mut().zip(items) {
                    *slot = size_entry(item);
                }
            }
            Value::String(s) if !s.is_empty() => {
                for (slot, part) in out.iter_mut().zip(s.split('\n')) {
                    *slot = part.trim().parse::<f64>().ok().filter(|n| *n != 0.0);
                }
            }
            Value::String(_) => return None,
            value => {
                tracing::trace!(field, %value, "ignoring malformed size list");
                return None;
            }
        }
        Some(out)
    }
}

fn size_entry(item: &Value) -> Option<f64> {
    let n = match item {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| *n != 0.0)
}
