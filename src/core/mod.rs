// src/core/mod.rs
//! Pure text transforms: no I/O, no shared state
//!
//! Each submodule implements one algorithm over in-memory strings.
//! Dispatch and validation live in [`crate::engine`].

pub mod base64;
pub mod caesar;
pub mod rot13;
