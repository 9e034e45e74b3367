// tests/algorithms/mod.rs

mod base64;
mod caesar;
mod rot13;
