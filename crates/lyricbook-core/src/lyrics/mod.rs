//! Lyric line alignment
//!
//! Source lyrics and translations are authored as two separate text blocks
//! that may break lines differently. [`align`] pairs them line by line.

use serde::{Deserialize, Serialize};

/// One source line and its translation, before ids are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePair {
    pub source: String,
    pub translation: String,
}

impl LinePair {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }

    /// Both sides are empty
    pub fn is_blank(&self) -> bool {
        self.source.is_empty() && self.translation.is_empty()
    }
}

/// Split on `\r\n`, `\r` or `\n`, trimming each line
fn split_lines(block: &str) -> Vec<&str> {
    block
        .split("\r\n")
        .flat_map(|chunk| chunk.split(|c: char| c == '\r' || c == '\n'))
        .map(str::trim)
        .collect()
}

/// Pair two text blocks line by line.
///
/// The result is as long as the longer block, the shorter side padded with
/// empty strings, then trailing pairs where both sides are empty are dropped.
pub fn align(source: &str, translation: &str) -> Vec<LinePair> {
    let source_lines = split_lines(source);
    let translation_lines = split_lines(translation);
    let len = source_lines.len().max(translation_lines.len());

    let mut pairs: Vec<LinePair> = (0..len)
        .map(|i| {
            LinePair::new(
                source_lines.get(i).copied().unwrap_or(""),
                translation_lines.get(i).copied().unwrap_or(""),
            )
        })
        .collect();

    trim_trailing_blank(&mut pairs);
    pairs
}

/// Drop trailing pairs where both sides are empty
pub fn trim_trailing_blank(pairs: &mut Vec<LinePair>) {
    while pairs.last().is_some_and(LinePair::is_blank) {
        pairs.pop();
    }
}
