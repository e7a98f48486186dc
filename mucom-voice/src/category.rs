//! Preset category guessing
//!
//! MUCOM88 voices carry no category, so one is inferred from the voice name
//! by keyword matching. Longer keywords are tried first so that a specific
//! match ("guitar") beats a short generic one ("ep").

use core::fmt;
use std::sync::OnceLock;

/// RYM2612 preset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bass,
    Bells,
    Brass,
    DrumsAndPercs,
    Fx,
    Keys,
    Lead,
    Organ,
    Pads,
    Plucked,
    Poly,
    ReedAndPipe,
    Rhythmic,
    Strings,
    Synth,
    VideoGames,
    Woodwinds,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 17] = [
        Category::Bass,
        Category::Bells,
        Category::Brass,
        Category::DrumsAndPercs,
        Category::Fx,
        Category::Keys,
        Category::Lead,
        Category::Organ,
        Category::Pads,
        Category::Plucked,
        Category::Poly,
        Category::ReedAndPipe,
        Category::Rhythmic,
        Category::Strings,
        Category::Synth,
        Category::VideoGames,
        Category::Woodwinds,
    ];

    /// Category for voices without a name
    pub const UNNAMED: Category = Category::VideoGames;

    /// Category used when no keyword matches
    pub const FALLBACK: Category = Category::Lead;

    /// Name as written into preset files
    pub fn name(self) -> &'static str {
        match self {
            Category::Bass => "Bass",
            Category::Bells => "Bells",
            Category::Brass => "Brass",
            Category::DrumsAndPercs => "Drums & Percs",
            Category::Fx => "FX",
            Category::Keys => "Keys",
            Category::Lead => "Lead",
            Category::Organ => "Organ",
            Category::Pads => "Pads",
            Category::Plucked => "Plucked",
            Category::Poly => "Poly",
            Category::ReedAndPipe => "Reed and Pipe",
            Category::Rhythmic => "Rhythmic",
            Category::Strings => "Strings",
            Category::Synth => "Synth",
            Category::VideoGames => "Video Games",
            Category::Woodwinds => "Woodwinds",
        }
    }

    /// Lowercase name fragments that select this category
    ///
    /// Some keywords keep the standalone voiced mark because matching runs
    /// on the decoded name before marks are combined.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Bass => &["bas", "チョッ"],
            Category::Bells => &["bell"],
            Category::Brass => &["brass", "brs", "horn", "sax"],
            Category::DrumsAndPercs => &[
                "cowb", "perc", "drum", "dram", "drm", "timbal", "tom", "tam", "hihat", "hi-hat",
                "hi_hat", "kik", "kick", "タムタム", "dora", "ホ゛ンコ゛", "ツツ゛ミ", "cow",
            ],
            Category::Fx => &[
                "laser", "train", "ufo", "car", "mushi", "sakebi", "efc", "tweet",
            ],
            Category::Keys => &["ep", "pian", "clav", "ap1"],
            Category::Lead => &["main", "7th"],
            Category::Organ => &["orgn", "sin"],
            Category::Pads => &["back", "down", "amb"],
            Category::Plucked => &["guitar", "gtr", "koto", "harp", "banjo", "zitar"],
            Category::Poly => &[],
            Category::ReedAndPipe => &["flute", "oboe", "pic", "harm", "clari", "pipe"],
            Category::Rhythmic => &["grock", "timp", "xylo", "vib"],
            Category::Strings => &["str"],
            Category::Synth => &["psg", "synt", "orc", "dgt"],
            Category::VideoGames => &[],
            Category::Woodwinds => &["kuchi", "fue"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Chosen category
    pub category: Category,
    /// True when the name was non-empty but no keyword matched
    pub used_fallback: bool,
}

/// Keyword list, longest keyword first
///
/// Lengths are compared in bytes. The sort is stable, so equally long
/// keywords keep declaration order.
fn keyword_table() -> &'static [(&'static str, Category)] {
    static TABLE: OnceLock<Vec<(&'static str, Category)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: Vec<(&'static str, Category)> = Category::ALL
            .iter()
            .flat_map(|&category| category.keywords().iter().map(move |&kw| (kw, category)))
            .collect();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    })
}

/// Guess the category of a decoded voice name
///
/// Never fails: empty names map to [`Category::UNNAMED`] and names without a
/// keyword hit map to [`Category::FALLBACK`] with `used_fallback` set.
pub fn classify(name: &str) -> Classification {
    let name = name.to_lowercase();
    if name.is_empty() {
        return Classification {
            category: Category::UNNAMED,
            used_fallback: false,
        };
    }

    match keyword_table()
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
    {
        Some(&(_, category)) => Classification {
            category,
            used_fallback: false,
        },
        None => Classification {
            category: Category::FALLBACK,
            used_fallback: true,
        },
    }
}
