// src/consts.rs
//! Shared constants: defaults and user-facing messages

/// Shift pre-filled by the form when Caesar is selected
pub const DEFAULT_SHIFT: i64 = 3;

/// Artificial processing latency applied by the presentation layer
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Env var pointing at an explicit config file
pub const CONFIG_ENV: &str = "TEXTCRYPT_CONFIG";

/// Env var overriding `ui.delay_ms`
pub const DELAY_ENV: &str = "TEXTCRYPT_DELAY_MS";

/// Directory under the user config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "textcrypt";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const INVALID_SHIFT_MSG: &str = "Invalid shift value for Caesar cipher.";

pub const ENCRYPT_FAILED_MSG: &str = "Encryption failed.";

pub const DECRYPT_FAILED_MSG: &str =
    "Decryption failed. The provided text might be invalid or not correctly encoded.";
