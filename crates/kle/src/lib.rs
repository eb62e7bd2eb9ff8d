#![forbid(unsafe_code)]

//! `kle` decodes Keyboard Layout Editor (keyboard-layout-editor.com) layouts in Rust.
//!
//! The decoding itself lives in `kle-core` and works on an in-memory [`serde_json::Value`].
//! This crate re-exports it and adds [`parse_str`], which accepts the text the editor
//! produces: the downloaded JSON file or the "Raw data" pane (relaxed JSON, usually without
//! the enclosing brackets).

pub use kle_core::*;

pub mod text;

pub use text::{ParseOptions, TextError, parse_str};
