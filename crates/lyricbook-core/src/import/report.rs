//! End-of-import summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts gathered over one import, shown to the user as a single summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Lyric lines committed across all touched songs
    pub lines_imported: usize,
    /// Vocabulary entries committed
    pub vocab_imported: usize,
    /// Grammar points committed
    pub grammar_imported: usize,
    /// Rows without album/song titles, or without any payload or metadata
    pub rows_skipped: usize,
    /// Albums appended to the catalog
    pub albums_created: usize,
    /// Songs appended to albums
    pub songs_created: usize,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries written into song collections
    pub fn total_imported(&self) -> usize {
        self.lines_imported + self.vocab_imported + self.grammar_imported
    }

    /// Whether the import changed nothing in any song collection
    pub fn is_empty(&self) -> bool {
        self.total_imported() == 0
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lyric lines, {} vocabulary entries, {} grammar points imported; {} rows skipped",
            self.lines_imported, self.vocab_imported, self.grammar_imported, self.rows_skipped
        )?;
        if self.albums_created > 0 || self.songs_created > 0 {
            write!(
                f,
                " ({} new albums, {} new songs)",
                self.albums_created, self.songs_created
            )?;
        }
        Ok(())
    }
}
