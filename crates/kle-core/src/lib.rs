#![forbid(unsafe_code)]

//! Keyboard Layout Editor (KLE) data decoder + semantic key model (headless).
//!
//! The serialized format is terse: keys inherit most attributes from the previous key,
//! legends are stored in a historical order that depends on the alignment flags, and
//! keyboard metadata is an optional leading object. [`decode`] resolves all of that into a
//! [`Keyboard`] whose keys carry explicit geometry, rotation and per-slot legends.
//!
//! ```
//! use serde_json::json;
//!
//! let kb = kle_core::decode(&json!([{ "name": "demo" }, [{ "w": 1.5 }, "Tab", "Q"]]))?;
//! assert_eq!(kb.meta.name, "demo");
//! assert_eq!(kb.keys[1].x, 1.5);
//! # Ok::<(), kle_core::Error>(())
//! ```

pub mod decode;
pub mod error;
pub mod labels;
pub mod metadata;
pub mod model;

pub use decode::decode;
pub use error::{Error, Result};
pub use labels::{SLOT_COUNT, Slot};
pub use model::{Background, Key, KeyDefaults, Keyboard, KeyboardMetadata, Labels};

#[cfg(test)]
mod tests;
