// src/lib.rs
//! textcrypt: reversible text transforms behind a tiny engine
//!
//! Features:
//! - Base64 (padded encode, lenient decode with UTF-8 validation)
//! - ROT13 over basic Latin letters
//! - Caesar shift over Unicode code points
//! - `encrypt` / `decrypt` entry points that always return an [`Outcome`]
//!
//! None of these provide confidentiality. They are obfuscation only.

pub mod config;
pub mod consts;
pub mod core;
pub mod engine;
pub mod enums;
pub mod error;
pub mod form;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use engine::{decrypt, encrypt, transform, try_decrypt, try_encrypt, Outcome, Request};
pub use enums::{Algorithm, Direction};
pub use error::{DecodeError, ErrorKind, Result, TransformError};
pub use form::FormState;
