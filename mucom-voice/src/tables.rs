//! Static lookup tables
//!
//! Character set data for name recovery and the parameter tables used by the
//! RYM2612 encoder. Everything here is read-only.

/// PC-8801 glyphs for name bytes `0x80..=0xFF`, indexed by `byte - 0x80`
///
/// Covers block graphics, half-width kana (widened to full-width katakana),
/// card suits and the date/time kanji. The standalone voiced marks live at
/// `0xDE` (`゛`) and `0xDF` (`゜`).
pub const GLYPHS: [char; 128] = [
    // 0x80
    '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '┼',
    // 0x90
    '┴', '┬', '┤', '├', '▔', '─', '│', '▕', '┌', '┐', '└', '┘', '╭', '╮', '╰', '╯',
    // 0xA0
    ' ', '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ',
    // 0xB0
    'ー', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
    // 0xC0
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ',
    // 0xD0
    'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
    // 0xE0
    '═', '╞', '╪', '╡', '◢', '◣', '◥', '◤', '♠', '♥', '♦', '♣', '●', '○', '╱', '╲',
    // 0xF0
    '╳', '円', '年', '月', '日', '時', '分', '秒', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
];

/// Standalone voiced sound mark (dakuten)
pub const VOICED_MARK: char = '゛';

/// Standalone semi-voiced sound mark (handakuten)
pub const SEMI_VOICED_MARK: char = '゜';

/// Base kana and their dakuten forms
pub const DAKUTEN_PAIRS: &[(char, char)] = &[
    ('か', 'が'), ('き', 'ぎ'), ('く', 'ぐ'), ('け', 'げ'), ('こ', 'ご'), ('さ', 'ざ'), ('し', 'じ'), ('す', 'ず'),
    ('せ', 'ぜ'), ('そ', 'ぞ'), ('た', 'だ'), ('ち', 'ぢ'), ('つ', 'づ'), ('て', 'で'), ('と', 'ど'), ('は', 'ば'),
    ('ひ', 'び'), ('ふ', 'ぶ'), ('へ', 'べ'), ('ほ', 'ぼ'), ('う', 'ゔ'), ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'),
    ('ケ', 'ゲ'), ('コ', 'ゴ'), ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'), ('タ', 'ダ'),
    ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'), ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'),
    ('ホ', 'ボ'), ('ウ', 'ヴ'),
];

/// Base kana and their handakuten forms
pub const HANDAKUTEN_PAIRS: &[(char, char)] = &[
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
];

/// Carrier operators per algorithm, indexed `[algorithm][operator]`
///
/// ```text
/// AL 0-3: ........ only OP4 reaches the output
/// AL 4:   OP2, OP4
/// AL 5-6: OP2, OP3, OP4
/// AL 7:   all four operators
/// ```
pub const CARRIERS: [[bool; 4]; 8] = [
    [false, false, false, true],
    [false, false, false, true],
    [false, false, false, true],
    [false, false, false, true],
    [false, true, false, true],
    [false, true, true, true],
    [false, true, true, true],
    [true, true, true, true],
];

/// RYM2612 `MUL` parameter values for OPN multiple 0-15
pub const MULTIPLE_TABLE: [u16; 16] = [
    0, 1054, 1581, 2635, 3689, 4743, 5797, 6851, 7905, 8959, 10013, 10540, 11594, 12648, 14229,
    15000,
];

/// Look up the replacement for `base` in a pair table
pub fn lookup_pair(table: &[(char, char)], base: char) -> Option<char> {
    table
        .iter()
        .find(|(from, _)| *from == base)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_marks_position() {
        assert_eq!(GLYPHS[0xDE - 0x80], VOICED_MARK);
        assert_eq!(GLYPHS[0xDF - 0x80], SEMI_VOICED_MARK);
        assert_eq!(GLYPHS[0xB1 - 0x80], 'ア');
        assert_eq!(GLYPHS[0xDD - 0x80], 'ン');
    }

    #[test]
    fn test_glyph_tail_is_blank() {
        assert!(GLYPHS[0x78..].iter().all(|c| *c == ' '));
        assert_eq!(GLYPHS[0x20], ' ');
    }

    #[test]
    fn test_carriers_last_operator_always_carrier() {
        for row in &CARRIERS {
            assert!(row[3]);
        }
        assert!(CARRIERS[7].iter().all(|c| *c));
        for row in CARRIERS.iter().take(4) {
            assert_eq!(*row, [false, false, false, true]);
        }
    }

    #[test]
    fn test_multiple_table_monotonic() {
        assert!(MULTIPLE_TABLE.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MULTIPLE_TABLE[3], 2635);
        assert_eq!(MULTIPLE_TABLE[15], 15000);
    }

    #[test]
    fn test_lookup_pair() {
        assert_eq!(lookup_pair(DAKUTEN_PAIRS, 'か'), Some('が'));
        assert_eq!(lookup_pair(DAKUTEN_PAIRS, 'ウ'), Some('ヴ'));
        assert_eq!(lookup_pair(HANDAKUTEN_PAIRS, 'ホ'), Some('ポ'));
        assert_eq!(lookup_pair(HANDAKUTEN_PAIRS, 'カ'), None);
    }
}
