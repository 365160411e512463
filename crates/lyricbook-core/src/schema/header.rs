//! Header row resolution
//!
//! Maps user-authored column headers to [`FieldId`]s. Matching is tolerant of
//! case, punctuation, "(optional)" markers and embedded qualifiers, but fully
//! deterministic: tiers are tried exact, then prefix, then substring, across
//! all fields before moving to the next tier, and a column claimed by one
//! field is never offered to another.

use std::collections::HashMap;

use super::FieldId;

/// Substrings removed from headers before matching
const OPTIONAL_MARKERS: [&str; 4] = ["optional", "可选", "选填", "선택"];

/// Normalize a raw header cell for alias matching.
///
/// Strips a byte-order mark, case-folds, drops whitespace, underscores,
/// hyphens and parentheses (ASCII and full-width), then removes optional
/// markers.
pub fn normalize_header(raw: &str) -> String {
    let folded: String = raw
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-' | '(' | ')' | '（' | '）'))
        .collect();

    OPTIONAL_MARKERS
        .iter()
        .fold(folded, |acc, marker| acc.replace(marker, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

impl MatchTier {
    fn matches(self, alias: &str, header: &str) -> bool {
        match self {
            MatchTier::Exact => header == alias,
            MatchTier::Prefix => header.starts_with(alias),
            MatchTier::Substring => header.contains(alias),
        }
    }
}

/// Resolved mapping from canonical field to column index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: HashMap<FieldId, usize>,
}

impl ColumnMap {
    /// Column index for a field, if a header resolved to it
    pub fn get(&self, field: FieldId) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.columns.contains_key(&field)
    }

    /// Whether any of the given fields resolved
    pub fn contains_any(&self, fields: &[FieldId]) -> bool {
        fields.iter().any(|f| self.contains(*f))
    }

    pub fn insert(&mut self, field: FieldId, column: usize) {
        self.columns.insert(field, column);
    }

    /// Required fields that no header resolved to, in canonical order
    pub fn missing_required(&self) -> Vec<FieldId> {
        FieldId::REQUIRED
            .iter()
            .copied()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    /// Resolved fields in canonical order
    pub fn fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .filter(|f| self.contains(*f))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Resolve a header row into a [`ColumnMap`]
pub fn resolve_headers<S: AsRef<str>>(headers: &[S]) -> ColumnMap {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| normalize_header(h.as_ref()))
        .collect();

    let mut map = ColumnMap::default();
    let mut claimed = vec![false; normalized.len()];

    for tier in [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring] {
        for field in FieldId::ALL {
            if map.contains(field) {
                continue;
            }
            if let Some(column) = find_column(field, tier, &normalized, &claimed) {
                claimed[column] = true;
                map.insert(field, column);
            }
        }
    }

    map
}

fn find_column(
    field: FieldId,
    tier: MatchTier,
    headers: &[String],
    claimed: &[bool],
) -> Option<usize> {
    // Our own export label is always the first candidate
    let label = normalize_header(field.label());
    let candidates = std::iter::once(label.as_str()).chain(field.aliases().iter().copied());

    for alias in candidates {
        let hit = headers
            .iter()
            .enumerate()
            .find(|(column, header)| !claimed[*column] && !header.is_empty() && tier.matches(alias, header));
        if let Some((column, _)) = hit {
            return Some(column);
        }
    }
    None
}
