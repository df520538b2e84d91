//! Dominant-script detection and code-mixing checks for Indic text.
//!
//! Every character is assigned to the first entry of [`SCRIPT_RANGES`] whose
//! inclusive code-point bounds contain it; characters outside every range
//! (Latin letters, digits, punctuation, whitespace) are ignored. Both entry
//! points are total and allocation free.

use std::fmt;

use serde::Serialize;

/// Scripts recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Bengali,
    Tamil,
}

impl Script {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self::Devanagari, Self::Bengali, Self::Tamil];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Devanagari => "devanagari",
            Self::Bengali => "bengali",
            Self::Tamil => "tamil",
        }
    }

    /// Language label reported for text dominated by this script.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Devanagari => "hi",
            Self::Bengali => "bn",
            Self::Tamil => "ta",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive code-point block owned by one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub script: Script,
    pub low: u32,
    pub high: u32,
}

impl ScriptRange {
    pub const fn new(script: Script, low: u32, high: u32) -> Self {
        Self { script, low, high }
    }

    #[inline]
    pub const fn contains(&self, code_point: u32) -> bool {
        self.low <= code_point && code_point <= self.high
    }
}

/// Lookup table in priority order. Earlier entries win both overlapping
/// code points and ties between equal counts.
pub const SCRIPT_RANGES: [ScriptRange; Script::COUNT] = [
    ScriptRange::new(Script::Devanagari, 0x0900, 0x097F),
    ScriptRange::new(Script::Bengali, 0x0980, 0x09FF),
    ScriptRange::new(Script::Tamil, 0x0B80, 0x0BFF),
];

/// Script owning `ch`, if any.
#[inline]
pub fn script_of(ch: char) -> Option<Script> {
    let code_point = u32::from(ch);
    SCRIPT_RANGES.iter().find(|range| range.contains(code_point)).map(|range| range.script)
}

/// Per-script character counts for one piece of text.
///
/// Every script has a slot, zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts([usize; Script::COUNT]);

impl ScriptCounts {
    pub fn tally(text: &str) -> Self {
        let mut counts = Self::default();
        for script in text.chars().filter_map(script_of) {
            counts.0[script.index()] += 1;
        }
        counts
    }

    #[inline]
    pub const fn get(&self, script: Script) -> usize {
        self.0[script.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(script, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Script, usize)> + '_ {
        SCRIPT_RANGES.iter().map(|range| (range.script, self.get(range.script)))
    }

    /// Script with the highest count. Scanning in table order and replacing
    /// only on a strictly greater count, so ties go to the earlier entry.
    pub fn dominant(&self) -> Option<Script> {
        let mut best: Option<(Script, usize)> = None;
        for (script, count) in self.iter() {
            if count > best.map_or(0, |(_, n)| n) {
                best = Some((script, count));
            }
        }
        best.map(|(script, _)| script)
    }

    /// Number of scripts with at least one character.
    pub fn present(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }

    #[inline]
    pub fn is_mixed(&self) -> bool {
        self.present() > 1
    }
}

/// Label of the dominant script in `text`, or `None` when no character
/// belongs to a known script.
pub fn classify_dominant_script(text: &str) -> Option<&'static str> {
    ScriptCounts::tally(text).dominant().map(Script::label)
}

/// True when characters from more than one known script appear in `text`.
pub fn is_multi_script(text: &str) -> bool {
    ScriptCounts::tally(text).is_mixed()
}
