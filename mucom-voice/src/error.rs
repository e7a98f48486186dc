//! Voice decoding error types

use thiserror::Error;

/// Errors that can occur when decoding a voice record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceError {
    /// Slice too short to hold a full voice record
    #[error("voice record needs {} bytes, got {len}", crate::VOICE_SIZE)]
    TooSmall {
        /// Number of bytes that were supplied
        len: usize,
    },
}
