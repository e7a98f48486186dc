//! Mucom-Voice: MUCOM88 FM voice bank decoder
//!
//! This crate decodes the 32-byte OPN voice records stored in a MUCOM88
//! `voice.dat` bank and re-encodes them for other tools. It does no I/O;
//! reading banks and writing presets is left to the caller.
//!
//! # Key Features
//!
//! - **Zero-copy records**: every field is read straight out of the raw bytes
//! - **Name recovery**: the PC-8801 character set (half-width kana, block
//!   graphics) is mapped back to Unicode and romanized for file names
//! - **Category guessing**: keyword heuristics pick a preset category
//! - **Two encoders**: MUCOM88 MML `@n:{...}` blocks and RYM2612 XML presets
//!
//! # Voice Record Layout
//!
//! ```text
//! 0x00      unused
//! 0x01-0x04 DT/MUL        (per operator)
//! 0x05-0x08 TL            (per operator)
//! 0x09-0x0C KS/AR         (per operator)
//! 0x0D-0x10 AM/DR         (per operator)
//! 0x11-0x14 SR            (per operator)
//! 0x15-0x18 SL/RR         (per operator)
//! 0x19      FB/AL
//! 0x1A-0x1F name          (zero-terminated)
//! ```
//!
//! Operator registers are stored in OPN slot order, so operator `n` lives at
//! offset [`operator_offset`]`(n)` inside each group.
//!
//! # Usage
//!
//! ```ignore
//! use mucom_voice::{NamedVoice, OutputFormat, VoiceRecord, VOICE_SIZE};
//!
//! let bank = std::fs::read("voice.dat").unwrap();
//! for (index, chunk) in bank.chunks_exact(VOICE_SIZE).enumerate() {
//!     let record = VoiceRecord::from_slice(chunk).unwrap();
//!     let named = NamedVoice::from_record(&record);
//!     let patch = named.display_name("MUCOM88", index);
//!     let xml = OutputFormat::Rym2612.encoder().encode(index, &record, &named, &patch).unwrap();
//!     println!("{patch}: {} bytes", xml.len());
//! }
//! ```

pub mod category;
pub mod encode;
mod error;
pub mod name;
pub mod tables;
mod voice;

pub use category::{Category, Classification, classify};
pub use encode::{MucomText, OutputFormat, Rym2612, Rym2612Operator, VoiceEncoder};
pub use error::VoiceError;
pub use name::{NamedVoice, combine_marks, decode_name, patch_name};
pub use voice::{Operator, VoiceRecord, operator_offset};

// =============================================================================
// Constants
// =============================================================================

/// Size of one voice record in bytes
pub const VOICE_SIZE: usize = 32;

/// Number of FM operators per voice
pub const OPERATOR_COUNT: usize = 4;

/// Offset of the name field inside a voice record
pub const NAME_OFFSET: usize = 26;

/// Maximum name length in bytes
pub const NAME_LEN: usize = 6;

/// Offset of the feedback/algorithm byte
pub const FB_AL_OFFSET: usize = 25;

/// Prefix used for patch display names
pub const DEFAULT_PREFIX: &str = "MUCOM88";
