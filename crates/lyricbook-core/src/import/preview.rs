//! Dry run mode for previewing an import without changing the catalog

use std::fmt;

use serde::Serialize;

use super::ImportReport;
use crate::catalog::{Album, Catalog, Song};

/// How one song would change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongChange {
    pub album_title: String,
    pub song_title: String,
    /// The song does not exist yet
    pub is_new: bool,
    pub metadata_changed: bool,
    pub lyrics_replaced: bool,
    pub vocab_replaced: bool,
    pub grammar_replaced: bool,
}

impl SongChange {
    /// Short list of what changes, e.g. "new, lyrics, vocab"
    pub fn summary(&self) -> String {
        let parts: Vec<&str> = [
            (self.is_new, "new"),
            (self.metadata_changed && !self.is_new, "metadata"),
            (self.lyrics_replaced, "lyrics"),
            (self.vocab_replaced, "vocab"),
            (self.grammar_replaced, "grammar"),
        ]
        .iter()
        .filter(|(flag, _)| *flag)
        .map(|(_, name)| *name)
        .collect();
        parts.join(", ")
    }
}

impl fmt::Display for SongChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} [{}]", self.album_title, self.song_title, self.summary())
    }
}

/// Result of a dry run import
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportPreview {
    /// Counts the import would report
    pub report: ImportReport,
    /// Titles of albums that would be appended
    pub new_albums: Vec<String>,
    /// Songs that would be created or modified, in catalog order
    pub changes: Vec<SongChange>,
}

impl ImportPreview {
    /// Describe the difference between `before` and the imported `after`.
    ///
    /// Imports only append, so entries past the old lengths are new.
    pub fn compare(before: &Catalog, after: &Catalog, report: ImportReport) -> Self {
        let mut preview = Self {
            report,
            ..Default::default()
        };

        for (album_index, album) in after.albums.iter().enumerate() {
            let old_album = before.albums.get(album_index);
            if old_album.is_none() {
                preview.new_albums.push(album.title.clone());
            }

            for (song_index, song) in album.songs.iter().enumerate() {
                let old_song = old_album.and_then(|a| a.songs.get(song_index));
                if let Some(change) = song_change(old_album, album, old_song, song) {
                    preview.changes.push(change);
                }
            }
        }

        preview
    }

    /// Whether the import would leave the catalog as it is
    pub fn is_noop(&self) -> bool {
        self.new_albums.is_empty() && self.changes.is_empty()
    }
}

fn song_change(
    old_album: Option<&Album>,
    album: &Album,
    old: Option<&Song>,
    song: &Song,
) -> Option<SongChange> {
    let album_metadata_changed = old_album
        .is_some_and(|a| a.release_date != album.release_date || a.cover_ref != album.cover_ref);

    let change = match old {
        None => SongChange {
            album_title: album.title.clone(),
            song_title: song.title.clone(),
            is_new: true,
            metadata_changed: true,
            lyrics_replaced: !song.lyrics.is_empty(),
            vocab_replaced: !song.vocab.is_empty(),
            grammar_replaced: !song.grammar.is_empty(),
        },
        Some(old) => SongChange {
            album_title: album.title.clone(),
            song_title: song.title.clone(),
            is_new: false,
            metadata_changed: album_metadata_changed
                || old.release_date != song.release_date
                || old.lyricist != song.lyricist
                || old.composer != song.composer,
            lyrics_replaced: lyrics_differ(old, song),
            vocab_replaced: vocab_differ(old, song),
            grammar_replaced: grammar_differ(old, song),
        },
    };

    let changed = change.is_new
        || change.metadata_changed
        || change.lyrics_replaced
        || change.vocab_replaced
        || change.grammar_replaced;
    changed.then_some(change)
}

// Collections compare by content; ids are always fresh after a replace

fn lyrics_differ(a: &Song, b: &Song) -> bool {
    a.lyrics.len() != b.lyrics.len()
        || a.lyrics.iter().zip(&b.lyrics).any(|(x, y)| {
            x.source_text != y.source_text || x.translation_text != y.translation_text
        })
}

fn vocab_differ(a: &Song, b: &Song) -> bool {
    a.vocab.len() != b.vocab.len()
        || a.vocab
            .iter()
            .zip(&b.vocab)
            .any(|(x, y)| x.word != y.word || x.translation != y.translation)
}

fn grammar_differ(a: &Song, b: &Song) -> bool {
    a.grammar.len() != b.grammar.len()
        || a.grammar.iter().zip(&b.grammar).any(|(x, y)| {
            x.pattern != y.pattern || x.explanation != y.explanation || x.example != y.example
        })
}

impl fmt::Display for ImportPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.report)?;
        for title in &self.new_albums {
            writeln!(f, "  + album {}", title)?;
        }
        for change in &self.changes {
            writeln!(f, "  ~ {}", change)?;
        }
        Ok(())
    }
}
