//! Tests for name recovery

use super::*;
use crate::{NAME_OFFSET, VOICE_SIZE};

fn record_with_name(name: &[u8]) -> VoiceRecord {
    let mut bytes = [0u8; VOICE_SIZE];
    bytes[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
    VoiceRecord::new(bytes)
}

#[test]
fn test_decode_ascii_name() {
    assert_eq!(decode_name(b"PIANO1"), "PIANO1");
    assert_eq!(decode_name(b"EP\0XYZ"), "EP");
}

#[test]
fn test_decode_high_bit_glyphs() {
    // ﾍﾞｰｽ (be-su)
    assert_eq!(decode_name(&[0xCD, 0xDE, 0xB0, 0xBD, 0, 0]), "ヘ゛ース");
    assert_eq!(decode_name(&[0xF1, 0x80, 0xE8, 0, 0, 0]), "円▁♠");
}

#[test]
fn test_decode_trims_whitespace() {
    assert_eq!(decode_name(b"  BS  "), "BS");
    // 0xA0 and 0xF8-0xFF are blank glyphs
    assert_eq!(decode_name(&[0xA0, b'A', 0xF8, 0xFF, 0, 0]), "A");
    assert_eq!(decode_name(&[0xA0, 0xF9, b' ', 0, 0, 0]), "");
}

#[test]
fn test_decode_all_zero_is_empty() {
    assert_eq!(decode_name(&[0; 6]), "");
}

#[test]
fn test_decode_is_deterministic() {
    let raw = [0xB6, 0xDE, b'1', 0x9F, 0xD4, 0];
    assert_eq!(decode_name(&raw), decode_name(&raw));
}

#[test]
fn test_combine_voiced_mark() {
    assert_eq!(combine_marks("か゛"), "が");
    assert_eq!(combine_marks("ヘ゛ース"), "ベース");
    assert_eq!(combine_marks("ウ゛"), "ヴ");
}

#[test]
fn test_combine_semi_voiced_mark() {
    assert_eq!(combine_marks("ヒ゜アノ"), "ピアノ");
    assert_eq!(combine_marks("ほ゜"), "ぽ");
}

#[test]
fn test_unmatched_marks_are_dropped() {
    assert_eq!(combine_marks("゛"), "");
    assert_eq!(combine_marks("゜A"), "A");
    assert_eq!(combine_marks("A゛B"), "AB");
    // no handakuten form for カ
    assert_eq!(combine_marks("カ゜"), "カ");
    // second mark has nothing left to combine with
    assert_eq!(combine_marks("ハ゛゛"), "バ");
}

#[test]
fn test_patch_name() {
    assert_eq!(patch_name("MUCOM88", 5, "piano"), "MUCOM88-005-piano");
    assert_eq!(patch_name("MUCOM88", 5, ""), "MUCOM88-005");
    assert_eq!(patch_name("X", 1234, "a"), "X-1234-a");
}

#[test]
fn test_named_voice_kana() {
    // ﾋﾟｱﾉ
    let record = record_with_name(&[0xCB, 0xDF, 0xB1, 0xC9]);
    let named = NamedVoice::from_record(&record);
    assert_eq!(named.decoded_name, "ヒ゜アノ");
    assert_eq!(named.sanitized_name, "piano");
    assert!(named.has_name());
    assert_eq!(named.display_name("MUCOM88", 3), "MUCOM88-003-piano");
}

#[test]
fn test_named_voice_empty() {
    let named = NamedVoice::from_record(&record_with_name(&[]));
    assert_eq!(named.decoded_name, "");
    assert_eq!(named.sanitized_name, "");
    assert_eq!(named.category, Category::VideoGames);
    assert!(!named.used_fallback);
    assert!(!named.has_name());
    assert_eq!(named.display_name("MUCOM88", 0), "MUCOM88-000");
}

#[test]
fn test_named_voice_symbols_only() {
    // a name of box glyphs survives decoding but sanitizes to nothing
    let named = NamedVoice::from_record(&record_with_name(&[0x80, 0x81]));
    assert_eq!(named.decoded_name, "▁▂");
    assert_eq!(named.sanitized_name, "");
    assert!(named.has_name());
    assert_eq!(named.category, Category::Lead);
    assert!(named.used_fallback);
}

#[test]
fn test_named_voice_custom_collaborators() {
    struct Upper;
    impl Transliterate for Upper {
        fn transliterate(&self, input: &str) -> String {
            input.to_uppercase()
        }
    }
    struct Keep;
    impl Sanitize for Keep {
        fn sanitize(&self, input: &str) -> String {
            input.to_string()
        }
    }

    let named = NamedVoice::with(&record_with_name(b"bass"), &Upper, &Keep);
    assert_eq!(named.decoded_name, "bass");
    assert_eq!(named.sanitized_name, "BASS");
    assert_eq!(named.category, Category::Bass);
}
