// src/lists.rs - Bulleted, numbered and dashed list helpers

use std::str::FromStr;

use thiserror::Error;

pub const BULLET: char = '•';
pub const DASH: char = '-';

/// Kind of list the list action produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullets,
    Numbers,
    Dashes,
}

impl ListStyle {
    /// Prefix for the item at `index` (0-based)
    pub fn prefix(self, index: usize) -> String {
        match self {
            ListStyle::Bullets => format!("{BULLET} "),
            ListStyle::Numbers => format!("{}. ", index.saturating_add(1)),
            ListStyle::Dashes => format!("{DASH} "),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListStyle::Bullets => "Bulleted list",
            ListStyle::Numbers => "Numbered list",
            ListStyle::Dashes => "Dashed list",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown list type '{0}' (expected bullets, numbers or dashes)")]
pub struct ParseListError(pub String);

impl FromStr for ListStyle {
    type Err = ParseListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bullets" | "bullet" | "b" => Ok(ListStyle::Bullets),
            "numbers" | "numbered" | "n" => Ok(ListStyle::Numbers),
            "dashes" | "dash" | "d" => Ok(ListStyle::Dashes),
            other => Err(ParseListError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bullet,
    Dash,
    Number(usize),
}

/// A line that starts with a list marker, split around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub indent: &'a str,
    pub marker: Marker,
    pub rest: &'a str,
}

/// Recognize `<indent><marker><space><rest>` where marker is `•`, `-` or `<digits>.`
pub fn parse_line(line: &str) -> Option<ListLine<'_>> {
    let body_start = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(idx, _)| idx)?;
    let (indent, body) = line.split_at(body_start);

    let (marker, after) = if let Some(after) = body.strip_prefix(BULLET) {
        (Marker::Bullet, after)
    } else if let Some(after) = body.strip_prefix(DASH) {
        (Marker::Dash, after)
    } else {
        let digits_end = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        if digits_end == 0 {
            return None;
        }
        let after = body[digits_end..].strip_prefix('.')?;
        // Absurdly long numbers still count as a list marker
        let number = body[..digits_end].parse().unwrap_or(usize::MAX);
        (Marker::Number(number), after)
    };

    let separator = after.chars().next().filter(|c| c.is_whitespace())?;
    Some(ListLine {
        indent,
        marker,
        rest: &after[separator.len_utf8()..],
    })
}

/// Drop one list marker from `line`, keeping its indentation
pub fn strip_prefix(line: &str) -> String {
    match parse_line(line) {
        Some(parsed) => format!("{}{}", parsed.indent, parsed.rest),
        None => line.to_string(),
    }
}

/// Strip list markers from every line of `text`
pub fn strip_prefixes(text: &str) -> String {
    text.split('\n')
        .map(strip_prefix)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn every line of `text` into an item of `style`, replacing existing markers.
///
/// A trailing newline is kept and not turned into an empty item. Returns `None` when there
/// is no line to prefix.
pub fn apply_list(text: &str, style: ListStyle) -> Option<String> {
    let (body, trailing) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };
    if body.is_empty() && trailing.is_empty() {
        return None;
    }

    let items = body
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            format!("{}{}", style.prefix(idx), strip_prefix(line))
        })
        .collect::<Vec<_>>();
    Some(format!("{}{}", items.join("\n"), trailing))
}

/// What pressing Enter at the end of a list line should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Start the next item: insert a newline followed by this text
    NextItem(String),
    /// The item is empty: replace the line with its indentation and insert a plain newline
    EndList { indent: String },
}

pub fn continuation(line: &str) -> Option<Continuation> {
    let parsed = parse_line(line)?;
    if parsed.rest.trim().is_empty() {
        return Some(Continuation::EndList {
            indent: parsed.indent.to_string(),
        });
    }
    let prefix = match parsed.marker {
        Marker::Number(n) => format!("{}. ", n.saturating_add(1)),
        Marker::Bullet => format!("{BULLET} "),
        Marker::Dash => format!("{DASH} "),
    };
    Some(Continuation::NextItem(format!("{}{}", parsed.indent, prefix)))
}
