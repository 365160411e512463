//! Catalog to flat table projection
//!
//! Every song fans out into one row per lyric line, then one per vocabulary
//! entry, then one per grammar point, with the album and song metadata
//! repeated on each row. A song with no entries still gets one row.

use crate::catalog::{Album, Catalog, GrammarPoint, LyricLine, Song, VocabItem};
use crate::schema::{FieldGroup, FieldId};

/// The part of a song one exported row carries
#[derive(Debug, Clone, Copy)]
enum RowSource<'a> {
    Metadata,
    Lyric(&'a LyricLine),
    Vocab(&'a VocabItem),
    Grammar(&'a GrammarPoint),
}

/// Requested fields with the required ones guaranteed present.
///
/// Missing required fields are prepended in canonical order; repeated ids
/// keep their first position.
pub fn export_fields(requested: &[FieldId]) -> Vec<FieldId> {
    let mut fields: Vec<FieldId> = FieldId::REQUIRED
        .iter()
        .copied()
        .filter(|f| !requested.contains(f))
        .collect();

    for field in requested {
        if !fields.contains(field) {
            fields.push(*field);
        }
    }
    fields
}

/// Header row of labels for `fields`
pub fn header_row(fields: &[FieldId]) -> Vec<String> {
    fields.iter().map(|f| f.label().to_string()).collect()
}

/// Project the catalog into a grid whose first row is the header
pub fn export_grid(catalog: &Catalog, requested: &[FieldId]) -> Vec<Vec<String>> {
    let fields = export_fields(requested);
    let mut grid = vec![header_row(&fields)];

    for album in &catalog.albums {
        for song in &album.songs {
            for source in row_sources(song) {
                grid.push(
                    fields
                        .iter()
                        .map(|field| field_value(album, song, source, *field))
                        .collect(),
                );
            }
        }
    }

    grid
}

fn row_sources(song: &Song) -> Vec<RowSource<'_>> {
    if song.has_no_entries() {
        return vec![RowSource::Metadata];
    }

    song.lyrics
        .iter()
        .map(RowSource::Lyric)
        .chain(song.vocab.iter().map(RowSource::Vocab))
        .chain(song.grammar.iter().map(RowSource::Grammar))
        .collect()
}

fn field_value(album: &Album, song: &Song, source: RowSource<'_>, field: FieldId) -> String {
    let value: &str = match (field.group(), source) {
        (FieldGroup::Metadata, _) => match field {
            FieldId::AlbumTitle => &album.title,
            FieldId::SongTitle => &song.title,
            FieldId::AlbumReleaseDate => &album.release_date,
            FieldId::ReleaseDate => &song.release_date,
            FieldId::Lyricist => &song.lyricist,
            FieldId::Composer => &song.composer,
            FieldId::CoverRef => &album.cover_ref,
            _ => "",
        },
        (FieldGroup::Lyric, RowSource::Lyric(line)) => match field {
            FieldId::SourceLyric => &line.source_text,
            _ => &line.translation_text,
        },
        (FieldGroup::Vocab, RowSource::Vocab(item)) => match field {
            FieldId::VocabWord => &item.word,
            _ => &item.translation,
        },
        (FieldGroup::Grammar, RowSource::Grammar(point)) => match field {
            FieldId::GrammarPattern => &point.pattern,
            FieldId::GrammarExplanation => &point.explanation,
            _ => &point.example,
        },
        _ => "",
    };
    value.to_string()
}
