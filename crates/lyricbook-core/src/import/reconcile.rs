//! Row reconciliation
//!
//! Each data row names an (album, song) pair by title. The pair is found or
//! created, non-empty metadata cells are applied, and the row's payload is
//! buffered per song. Buffers are committed after the last row: each touched
//! collection of a song is replaced wholesale, untouched ones are left alone.

use std::collections::BTreeMap;

use tracing::debug;

use super::ImportReport;
use crate::catalog::{Catalog, GrammarPoint, VocabItem};
use crate::date::normalize_date;
use crate::error::{Error, Result};
use crate::lyrics::{trim_trailing_blank, LinePair};
use crate::schema::{ColumnMap, FieldId};
use crate::table::{cell_at, Cell};

/// Position of a song in the catalog. Stable for one pass since the pass only appends.
type SongKey = (usize, usize);

/// Rows collected for one song during a pass
#[derive(Debug, Default)]
struct PendingSong {
    lyrics: Vec<LinePair>,
    vocab: Vec<VocabItem>,
    grammar: Vec<GrammarPoint>,
}

/// What a single row carries besides its titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowPayload {
    Grammar,
    Vocab,
    None,
}

/// Merges data rows into a catalog using a resolved column map
#[derive(Debug, Clone)]
pub struct Reconciler {
    columns: ColumnMap,
    has_lyric_columns: bool,
}

impl Reconciler {
    /// Create a reconciler, failing if album or song title is unresolved
    pub fn new(columns: ColumnMap) -> Result<Self> {
        let missing = columns.missing_required();
        if !missing.is_empty() {
            return Err(Error::MissingRequiredColumns { missing });
        }

        let has_lyric_columns =
            columns.contains_any(&[FieldId::SourceLyric, FieldId::TranslationLyric]);
        Ok(Self {
            columns,
            has_lyric_columns,
        })
    }

    fn cell<'r>(&self, row: &'r [Cell], field: FieldId) -> &'r Cell {
        cell_at(row, self.columns.get(field))
    }

    fn text(&self, row: &[Cell], field: FieldId) -> String {
        self.cell(row, field).text()
    }

    /// Normalized date from a field, or `None` when the cell is blank
    fn date(&self, row: &[Cell], field: FieldId) -> Option<String> {
        let date = normalize_date(self.cell(row, field));
        (!date.is_empty()).then_some(date)
    }

    /// Non-empty text from a field
    fn non_empty(&self, row: &[Cell], field: FieldId) -> Option<String> {
        let text = self.text(row, field);
        (!text.is_empty()).then_some(text)
    }

    /// Merge `rows` (header excluded) into `catalog`
    pub fn reconcile(&self, catalog: &mut Catalog, rows: &[Vec<Cell>]) -> ImportReport {
        let mut report = ImportReport::new();
        let mut pending: BTreeMap<SongKey, PendingSong> = BTreeMap::new();

        for row in rows {
            let album_title = self.text(row, FieldId::AlbumTitle);
            let song_title = self.text(row, FieldId::SongTitle);
            if album_title.is_empty() || song_title.is_empty() {
                report.rows_skipped += 1;
                continue;
            }

            let (album_index, album_created) = catalog.find_or_create_album(&album_title);
            if album_created {
                debug!("Created album '{}'", album_title);
                report.albums_created += 1;
            }
            let album = &mut catalog.albums[album_index];

            // Album metadata first so a new song inherits the imported album date
            let mut has_metadata = false;
            if let Some(date) = self.date(row, FieldId::AlbumReleaseDate) {
                album.release_date = date;
                has_metadata = true;
            }
            if let Some(cover) = self.non_empty(row, FieldId::CoverRef) {
                album.cover_ref = cover;
                has_metadata = true;
            }

            let (song_index, song_created) = album.find_or_create_song(&song_title);
            if song_created {
                debug!("Created song '{}' in album '{}'", song_title, album.title);
                report.songs_created += 1;
            }
            let song = &mut album.songs[song_index];

            if let Some(date) = self.date(row, FieldId::ReleaseDate) {
                song.release_date = date;
                has_metadata = true;
            }
            if let Some(lyricist) = self.non_empty(row, FieldId::Lyricist) {
                song.lyricist = lyricist;
                has_metadata = true;
            }
            if let Some(composer) = self.non_empty(row, FieldId::Composer) {
                song.composer = composer;
                has_metadata = true;
            }

            let buffer = pending.entry((album_index, song_index)).or_default();
            let payload = self.classify(row);
            match payload {
                RowPayload::Grammar => buffer.grammar.push(GrammarPoint::new(
                    self.text(row, FieldId::GrammarPattern),
                    self.text(row, FieldId::GrammarExplanation),
                    self.text(row, FieldId::GrammarExample),
                )),
                RowPayload::Vocab => buffer.vocab.push(VocabItem::new(
                    self.text(row, FieldId::VocabWord),
                    self.text(row, FieldId::VocabTranslation),
                )),
                RowPayload::None => {}
            }

            let line = LinePair::new(
                self.text(row, FieldId::SourceLyric),
                self.text(row, FieldId::TranslationLyric),
            );
            let has_lyric = !line.is_blank();
            // A blank line on a row with no other payload is a stanza break once
            // the song has lyrics; leading ones are dropped, trailing ones trimmed
            // at commit
            let is_break = payload == RowPayload::None && !buffer.lyrics.is_empty();
            if self.has_lyric_columns && (has_lyric || is_break) {
                buffer.lyrics.push(line);
            }

            if !has_lyric && payload == RowPayload::None && !has_metadata {
                report.rows_skipped += 1;
            }
        }

        for ((album_index, song_index), buffer) in pending {
            let song = &mut catalog.albums[album_index].songs[song_index];

            let mut lines = buffer.lyrics;
            trim_trailing_blank(&mut lines);
            if !lines.is_empty() {
                report.lines_imported += lines.len();
                song.set_lyrics(lines);
            }
            if !buffer.vocab.is_empty() {
                report.vocab_imported += buffer.vocab.len();
                song.vocab = buffer.vocab;
            }
            if !buffer.grammar.is_empty() {
                report.grammar_imported += buffer.grammar.len();
                song.grammar = buffer.grammar;
            }
        }

        report
    }

    /// Grammar wins over vocabulary when a row fills both
    fn classify(&self, row: &[Cell]) -> RowPayload {
        if !self.cell(row, FieldId::GrammarPattern).is_blank() {
            RowPayload::Grammar
        } else if !self.cell(row, FieldId::VocabWord).is_blank()
            || !self.cell(row, FieldId::VocabTranslation).is_blank()
        {
            RowPayload::Vocab
        } else {
            RowPayload::None
        }
    }
}
