//! Voice name recovery
//!
//! Turns the six name bytes of a record into:
//!
//! - `decode` - the PC-8801 text mapped to Unicode (used for categories)
//! - `romaji` - kana transliteration for file names
//! - `sanitize` - reduction to a single safe path segment

mod romaji;
mod sanitize;

#[cfg(test)]
mod tests;

pub use romaji::{KanaRomanizer, Transliterate};
pub use sanitize::{BaseNameSanitizer, Sanitize};

use crate::category::{Category, classify};
use crate::tables::{
    DAKUTEN_PAIRS, GLYPHS, HANDAKUTEN_PAIRS, SEMI_VOICED_MARK, VOICED_MARK, lookup_pair,
};
use crate::voice::VoiceRecord;

/// Decode raw name bytes into a trimmed string
///
/// Bytes with the high bit set index into [`GLYPHS`]; anything else is taken
/// as ASCII. Decoding stops at the first zero byte.
pub fn decode_name(raw: &[u8]) -> String {
    let name: String = raw
        .iter()
        .take_while(|b| **b != 0)
        .map(|&b| {
            if b >= 0x80 {
                GLYPHS[(b - 0x80) as usize]
            } else {
                char::from(b)
            }
        })
        .collect();
    name.trim().to_string()
}

/// Fold standalone voiced marks into the preceding kana
///
/// `カ゛` becomes `ガ` and `ハ゜` becomes `パ`. A mark that cannot be
/// combined is dropped, never kept as a literal character.
pub fn combine_marks(s: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        let table = match c {
            VOICED_MARK => DAKUTEN_PAIRS,
            SEMI_VOICED_MARK => HANDAKUTEN_PAIRS,
            _ => {
                out.push(c);
                continue;
            }
        };
        if let Some(last) = out.last_mut() {
            if let Some(combined) = lookup_pair(table, *last) {
                *last = combined;
            }
        }
    }
    out.into_iter().collect()
}

/// Build a patch display name such as `MUCOM88-012-piano`
///
/// An empty sanitized name leaves just `MUCOM88-012`.
pub fn patch_name(prefix: &str, index: usize, sanitized: &str) -> String {
    if sanitized.is_empty() {
        format!("{prefix}-{index:03}")
    } else {
        format!("{prefix}-{index:03}-{sanitized}")
    }
}

/// Name-derived data for one voice, computed once per conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedVoice {
    /// Decoded name before transliteration
    pub decoded_name: String,
    /// File-name safe form of the name (may be empty)
    pub sanitized_name: String,
    /// Guessed preset category
    pub category: Category,
    /// True when no keyword matched a non-empty name
    pub used_fallback: bool,
}

impl NamedVoice {
    /// Derive names using the built-in romanizer and sanitizer
    pub fn from_record(record: &VoiceRecord) -> Self {
        Self::with(record, &KanaRomanizer, &BaseNameSanitizer)
    }

    /// Derive names with caller-supplied collaborators
    pub fn with(
        record: &VoiceRecord,
        transliterator: &dyn Transliterate,
        sanitizer: &dyn Sanitize,
    ) -> Self {
        let decoded_name = record.name();
        let romanized = transliterator.transliterate(&combine_marks(&decoded_name));
        let sanitized_name = sanitizer.sanitize(&romanized);
        let classification = classify(&decoded_name);

        Self {
            decoded_name,
            sanitized_name,
            category: classification.category,
            used_fallback: classification.used_fallback,
        }
    }

    /// Whether the bank slot carries a name at all
    pub fn has_name(&self) -> bool {
        !self.decoded_name.is_empty()
    }

    /// Patch display name for bank slot `index`
    pub fn display_name(&self, prefix: &str, index: usize) -> String {
        patch_name(prefix, index, &self.sanitized_name)
    }
}
