//! voice-export library
//!
//! Provides bank conversion functions for use by the CLI and integration tests.

pub mod bank;

pub use bank::{
    convert_bank, convert_bytes, trailing_empty_run, voices, ConvertOptions, ConvertReport,
    ConvertedVoice,
};

// Re-export the format crate's public surface used by callers
pub use mucom_voice::{Category, NamedVoice, OutputFormat, VoiceRecord, DEFAULT_PREFIX};
