//! Data models for the album/song catalog

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date;
use crate::lyrics::{self, LinePair};

/// Matching key for album and song titles: trimmed and case-folded
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

fn same_title(a: &str, b: &str) -> bool {
    title_key(a) == title_key(b)
}

/// The whole catalog: an ordered list of albums
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub albums: Vec<Album>,
}

/// An album and its ordered songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Uuid,
    /// Title, unique within the catalog ignoring case
    pub title: String,
    /// Release date in `Y/M/D` form
    pub release_date: String,
    /// Opaque cover reference (URL or embedded image)
    pub cover_ref: String,
    pub songs: Vec<Song>,
}

/// A song with its lyric, vocabulary and grammar notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: Uuid,
    /// Title, unique within its album ignoring case
    pub title: String,
    pub release_date: String,
    pub lyricist: String,
    pub composer: String,
    pub lyrics: Vec<LyricLine>,
    pub vocab: Vec<VocabItem>,
    pub grammar: Vec<GrammarPoint>,
}

/// One lyric line and its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    pub id: Uuid,
    pub source_text: String,
    pub translation_text: String,
}

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
}

/// A grammar note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarPoint {
    pub id: Uuid,
    pub pattern: String,
    pub explanation: String,
    pub example: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Number of albums
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Number of songs across all albums
    pub fn song_count(&self) -> usize {
        self.albums.iter().map(|a| a.songs.len()).sum()
    }

    /// Index of the album with this title, ignoring case
    pub fn album_index(&self, title: &str) -> Option<usize> {
        self.albums.iter().position(|a| same_title(&a.title, title))
    }

    pub fn find_album(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|a| same_title(&a.title, title))
    }

    pub fn find_album_mut(&mut self, title: &str) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| same_title(&a.title, title))
    }

    /// Append an album, keeping existing order. Returns its index.
    pub fn add_album(&mut self, album: Album) -> usize {
        self.albums.push(album);
        self.albums.len() - 1
    }

    /// Find an album by title or append a new one.
    ///
    /// Returns the album's index and whether it was created.
    pub fn find_or_create_album(&mut self, title: &str) -> (usize, bool) {
        match self.album_index(title) {
            Some(index) => (index, false),
            None => (self.add_album(Album::new(title.trim())), true),
        }
    }

    /// Remove an album and everything it contains
    pub fn remove_album(&mut self, id: Uuid) -> Option<Album> {
        let index = self.albums.iter().position(|a| a.id == id)?;
        Some(self.albums.remove(index))
    }
}

impl Album {
    /// Create an album released today with no cover
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            release_date: date::today(),
            cover_ref: String::new(),
            songs: Vec::new(),
        }
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    pub fn song_index(&self, title: &str) -> Option<usize> {
        self.songs.iter().position(|s| same_title(&s.title, title))
    }

    pub fn find_song(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|s| same_title(&s.title, title))
    }

    pub fn find_song_mut(&mut self, title: &str) -> Option<&mut Song> {
        self.songs.iter_mut().find(|s| same_title(&s.title, title))
    }

    /// Append a song. Returns its index.
    pub fn add_song(&mut self, song: Song) -> usize {
        self.songs.push(song);
        self.songs.len() - 1
    }

    /// Find a song by title or append a new one dated like the album.
    ///
    /// Returns the song's index and whether it was created.
    pub fn find_or_create_song(&mut self, title: &str) -> (usize, bool) {
        match self.song_index(title) {
            Some(index) => (index, false),
            None => {
                let song = Song::new(title.trim(), self.release_date.clone());
                (self.add_song(song), true)
            }
        }
    }

    /// Remove a song and its lyric, vocabulary and grammar entries
    pub fn remove_song(&mut self, id: Uuid) -> Option<Song> {
        let index = self.songs.iter().position(|s| s.id == id)?;
        Some(self.songs.remove(index))
    }
}

impl Song {
    pub fn new(title: impl Into<String>, release_date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            release_date: release_date.into(),
            lyricist: String::new(),
            composer: String::new(),
            lyrics: Vec::new(),
            vocab: Vec::new(),
            grammar: Vec::new(),
        }
    }

    /// Whether the song has no lyric lines, vocabulary or grammar
    pub fn has_no_entries(&self) -> bool {
        self.lyrics.is_empty() && self.vocab.is_empty() && self.grammar.is_empty()
    }

    /// Replace the lyrics with fresh lines, dropping trailing blank pairs
    pub fn set_lyrics(&mut self, mut pairs: Vec<LinePair>) {
        lyrics::trim_trailing_blank(&mut pairs);
        self.lyrics = pairs.into_iter().map(LyricLine::from).collect();
    }

    /// Replace the lyrics from two separately edited text blocks
    pub fn set_lyrics_from_text(&mut self, source: &str, translation: &str) {
        self.set_lyrics(lyrics::align(source, translation));
    }

    /// The lyrics as two newline-joined blocks (source, translation)
    pub fn lyric_blocks(&self) -> (String, String) {
        let source = self
            .lyrics
            .iter()
            .map(|l| l.source_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let translation = self
            .lyrics
            .iter()
            .map(|l| l.translation_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        (source, translation)
    }
}

impl LyricLine {
    pub fn new(source_text: impl Into<String>, translation_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_text: source_text.into(),
            translation_text: translation_text.into(),
        }
    }
}

impl From<LinePair> for LyricLine {
    fn from(pair: LinePair) -> Self {
        Self::new(pair.source, pair.translation)
    }
}

impl VocabItem {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            translation: translation.into(),
        }
    }
}

impl GrammarPoint {
    pub fn new(
        pattern: impl Into<String>,
        explanation: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pattern: pattern.into(),
            explanation: explanation.into(),
            example: example.into(),
        }
    }
}
