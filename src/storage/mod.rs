//! Storage layer for passcrypt
//!
//! Payload reading, atomic artifact writes and artifact naming.

pub mod file_io;
pub mod naming;

pub use file_io::{read_envelope, read_payload, write_atomic};
pub use naming::{artifact_path, text_artifact_path, Direction};
