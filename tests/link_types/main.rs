//! Integration tests for the `itemstring-rs` facade

mod decode;
mod level;
