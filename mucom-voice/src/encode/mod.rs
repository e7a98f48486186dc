//! Voice encoders
//!
//! - `mucom` - MUCOM88 MML voice definition blocks
//! - `rym2612` - RYM2612 XML presets

mod mucom;
mod rym2612;


pub use mucom::MucomText;
pub use rym2612::{Rym2612, Rym2612Operator};

use core::fmt;
use core::str::FromStr;

use crate::name::NamedVoice;
use crate::voice::VoiceRecord;

/// Serializes one voice into a text document
pub trait VoiceEncoder {
    /// File extension for encoded voices (without the dot)
    fn extension(&self) -> &'static str;

    /// Encode the voice at bank slot `index`
    ///
    /// `patch_name` is the display name built by [`NamedVoice::display_name`].
    fn encode(
        &self,
        index: usize,
        record: &VoiceRecord,
        named: &NamedVoice,
        patch_name: &str,
    ) -> Result<String, fmt::Error>;
}

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// RYM2612 XML preset (`.rym2612`)
    #[default]
    Rym2612,
    /// MUCOM88 MML voice block (`.muc`)
    Mucom,
}

impl OutputFormat {
    /// Encoder for this format
    pub fn encoder(self) -> &'static dyn VoiceEncoder {
        match self {
            OutputFormat::Rym2612 => &Rym2612,
            OutputFormat::Mucom => &MucomText,
        }
    }

    /// File extension for this format
    pub fn extension(self) -> &'static str {
        self.encoder().extension()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Rym2612 => f.write_str("rym2612"),
            OutputFormat::Mucom => f.write_str("mucom"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rym2612" | "rym" | "xml" => Ok(OutputFormat::Rym2612),
            "mucom" | "muc" | "mml" => Ok(OutputFormat::Mucom),
            other => Err(format!(
                "unknown output format '{other}' (expected rym2612 or mucom)"
            )),
        }
    }
}
