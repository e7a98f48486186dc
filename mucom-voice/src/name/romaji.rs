//! Kana to romaji transliteration

/// Converts kana text to Latin script
pub trait Transliterate {
    /// Transliterate `input`, leaving characters it does not know unchanged
    fn transliterate(&self, input: &str) -> String;
}

/// Hepburn-style romanizer for hiragana and katakana
///
/// Katakana is folded to hiragana first, so both scripts share one table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaRomanizer;

const SMALL_TSU: char = 'っ';

/// Two-kana syllables, matched before single kana
const DIGRAPHS: &[([char; 2], &str)] = &[
    (['き', 'ゃ'], "kya"), (['き', 'ゅ'], "kyu"), (['き', 'ょ'], "kyo"),
    (['し', 'ゃ'], "sha"), (['し', 'ゅ'], "shu"), (['し', 'ょ'], "sho"), (['し', 'ぇ'], "she"),
    (['ち', 'ゃ'], "cha"), (['ち', 'ゅ'], "chu"), (['ち', 'ょ'], "cho"), (['ち', 'ぇ'], "che"),
    (['に', 'ゃ'], "nya"), (['に', 'ゅ'], "nyu"), (['に', 'ょ'], "nyo"),
    (['ひ', 'ゃ'], "hya"), (['ひ', 'ゅ'], "hyu"), (['ひ', 'ょ'], "hyo"),
    (['み', 'ゃ'], "mya"), (['み', 'ゅ'], "myu"), (['み', 'ょ'], "myo"),
    (['り', 'ゃ'], "rya"), (['り', 'ゅ'], "ryu"), (['り', 'ょ'], "ryo"),
    (['ぎ', 'ゃ'], "gya"), (['ぎ', 'ゅ'], "gyu"), (['ぎ', 'ょ'], "gyo"),
    (['じ', 'ゃ'], "ja"), (['じ', 'ゅ'], "ju"), (['じ', 'ょ'], "jo"), (['じ', 'ぇ'], "je"),
    (['ぢ', 'ゃ'], "ja"), (['ぢ', 'ゅ'], "ju"), (['ぢ', 'ょ'], "jo"),
    (['び', 'ゃ'], "bya"), (['び', 'ゅ'], "byu"), (['び', 'ょ'], "byo"),
    (['ぴ', 'ゃ'], "pya"), (['ぴ', 'ゅ'], "pyu"), (['ぴ', 'ょ'], "pyo"),
    (['ふ', 'ぁ'], "fa"), (['ふ', 'ぃ'], "fi"), (['ふ', 'ぇ'], "fe"), (['ふ', 'ぉ'], "fo"),
    (['ゔ', 'ぁ'], "va"), (['ゔ', 'ぃ'], "vi"), (['ゔ', 'ぇ'], "ve"), (['ゔ', 'ぉ'], "vo"),
    (['て', 'ぃ'], "ti"), (['で', 'ぃ'], "di"), (['う', 'ぃ'], "wi"), (['う', 'ぇ'], "we"),
];

const MONOGRAPHS: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('ゐ', "wi"), ('ゑ', "we"), ('を', "wo"), ('ん', "n"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('だ', "da"), ('ぢ', "ji"), ('づ', "zu"), ('で', "de"), ('ど', "do"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ゔ', "vu"),
    ('ぁ', "a"), ('ぃ', "i"), ('ぅ', "u"), ('ぇ', "e"), ('ぉ', "o"),
    ('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo"), ('ゎ', "wa"),
    ('ー', "-"),
];

/// Map a katakana code point onto its hiragana counterpart
fn to_hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

fn lookup_digraph(pair: [char; 2]) -> Option<&'static str> {
    DIGRAPHS
        .iter()
        .find(|(kana, _)| *kana == pair)
        .map(|(_, romaji)| *romaji)
}

fn lookup_monograph(c: char) -> Option<&'static str> {
    MONOGRAPHS
        .iter()
        .find(|(kana, _)| *kana == c)
        .map(|(_, romaji)| *romaji)
}

/// Consonant written for a small tsu in front of `syllable`
fn geminate(syllable: &str) -> Option<char> {
    let first = syllable.chars().next()?;
    match first {
        'a' | 'i' | 'u' | 'e' | 'o' | 'n' | '-' => None,
        'c' => Some('t'),
        c => Some(c),
    }
}

impl Transliterate for KanaRomanizer {
    fn transliterate(&self, input: &str) -> String {
        let kana: Vec<char> = input.chars().map(to_hiragana).collect();
        let mut out = String::with_capacity(input.len());
        let mut pending_tsu = false;
        let mut i = 0;

        while i < kana.len() {
            let c = kana[i];
            if c == SMALL_TSU {
                if pending_tsu {
                    out.push_str("xtsu");
                }
                pending_tsu = true;
                i += 1;
                continue;
            }

            let (syllable, width) = match kana
                .get(i + 1)
                .and_then(|&next| lookup_digraph([c, next]))
            {
                Some(romaji) => (Some(romaji), 2),
                None => (lookup_monograph(c), 1),
            };

            if pending_tsu {
                match syllable.and_then(geminate) {
                    Some(consonant) => out.push(consonant),
                    None => out.push_str("xtsu"),
                }
                pending_tsu = false;
            }

            match syllable {
                Some(romaji) => out.push_str(romaji),
                None => out.push(c),
            }
            i += width;
        }

        if pending_tsu {
            out.push_str("xtsu");
        }
        out
    }
}
