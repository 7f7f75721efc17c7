// src/style.rs - Reversible Unicode glyph styling (bold, italic, bold-italic, unstyle)

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

// First code point of each Mathematical Alphanumeric Symbols run
const BOLD_LETTERS_START: u32 = 0x1D400;
const BOLD_DIGITS_START: u32 = 0x1D7CE;
const ITALIC_LETTERS_START: u32 = 0x1D434;
const BOLD_ITALIC_LETTERS_START: u32 = 0x1D468;

/// Mathematical italic small h (U+1D455) is unassigned; Unicode points at PLANCK CONSTANT.
const ITALIC_SMALL_H: char = '\u{210E}';

/// Which substitution a transform call applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    Bold,
    Italic,
    BoldItalic,
    Unstyle,
}

impl StyleVariant {
    pub const ALL: [StyleVariant; 4] = [
        StyleVariant::Bold,
        StyleVariant::Italic,
        StyleVariant::BoldItalic,
        StyleVariant::Unstyle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleVariant::Bold => "bold",
            StyleVariant::Italic => "italic",
            StyleVariant::BoldItalic => "bold-italic",
            StyleVariant::Unstyle => "unstyle",
        }
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown style '{0}' (expected bold, italic, bold-italic or unstyle)")]
pub struct ParseStyleError(pub String);

impl FromStr for StyleVariant {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" | "b" => Ok(StyleVariant::Bold),
            "italic" | "i" => Ok(StyleVariant::Italic),
            "bold-italic" | "bolditalic" | "bi" => Ok(StyleVariant::BoldItalic),
            "unstyle" | "plain" | "u" => Ok(StyleVariant::Unstyle),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

/// Plain character to styled code point, for one variant
pub type ForwardTable = HashMap<char, char>;

/// The three forward tables and their combined inverse.
///
/// Built once at startup and handed to whoever needs to transform text. Never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct StyleTables {
    bold: ForwardTable,
    italic: ForwardTable,
    bold_italic: ForwardTable,
    reverse: HashMap<char, char>,
}

impl StyleTables {
    pub fn new() -> Self {
        let bold: ForwardTable = run(LETTERS, BOLD_LETTERS_START)
            .chain(run(DIGITS, BOLD_DIGITS_START))
            .collect();

        let mut italic: ForwardTable = run(LETTERS, ITALIC_LETTERS_START).collect();
        italic.insert('h', ITALIC_SMALL_H);

        let bold_italic: ForwardTable = run(LETTERS, BOLD_ITALIC_LETTERS_START).collect();

        let reverse = [&bold, &italic, &bold_italic]
            .into_iter()
            .flat_map(|table| table.iter().map(|(&plain, &styled)| (styled, plain)))
            .collect();

        Self {
            bold,
            italic,
            bold_italic,
            reverse,
        }
    }

    /// Forward table for a styling variant; `None` for `Unstyle`
    pub fn forward(&self, variant: StyleVariant) -> Option<&ForwardTable> {
        match variant {
            StyleVariant::Bold => Some(&self.bold),
            StyleVariant::Italic => Some(&self.italic),
            StyleVariant::BoldItalic => Some(&self.bold_italic),
            StyleVariant::Unstyle => None,
        }
    }

    /// Plain ASCII source of a styled glyph, if it is one
    pub fn plain_for(&self, c: char) -> Option<char> {
        self.reverse.get(&c).copied()
    }

    pub fn is_styled(&self, c: char) -> bool {
        self.reverse.contains_key(&c)
    }

    fn table(&self, variant: StyleVariant) -> &HashMap<char, char> {
        self.forward(variant).unwrap_or(&self.reverse)
    }
}

impl Default for StyleTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Pair each char of `chars` with consecutive code points starting at `start`
fn run(chars: &'static str, start: u32) -> impl Iterator<Item = (char, char)> {
    chars
        .chars()
        .zip(start..)
        .filter_map(|(plain, code)| char::from_u32(code).map(|styled| (plain, styled)))
}

/// Transform `text` one character at a time.
///
/// Characters outside the variant's table (punctuation, whitespace, emoji, non-Latin letters,
/// digits for italic variants) pass through unchanged, so the output always has the same
/// number of chars as the input.
pub fn apply(text: &str, variant: StyleVariant, tables: &StyleTables) -> String {
    let table = tables.table(variant);
    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}
