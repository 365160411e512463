//! Integration tests for import/export workflows.
//!
//! These tests drive the public entry points end to end: bytes in, catalog
//! mutated, bytes out, and back again.

use lyricbook_core::{
    export, import, Album, Catalog, Error, ExportFormat, FieldId, GrammarPoint, LyricLine, Song,
    VocabItem,
};
use serde_json::Value;

/// Test fixture holding a catalog that uses every field.
struct TestFixture {
    catalog: Catalog,
}

impl TestFixture {
    /// Creates a catalog with two albums, one song per collection shape plus an empty song.
    fn new() -> Self {
        let mut catalog = Catalog::new();

        let mut the_day = Album::new("The Day").with_release_date("2015/9/7");
        the_day.cover_ref = "https://example.com/the-day.jpg".to_string();

        let mut freely = Song::new("Freely", "2015/9/7");
        freely.lyricist = "Kim, Eana".to_string();
        freely.composer = "Park \"PK\" Jin".to_string();
        freely.lyrics = vec![
            LyricLine::new("안녕", "你好"),
            LyricLine::new("", ""),
            LyricLine::new("", "只有翻译"),
            LyricLine::new("잘 가", "再见"),
        ];
        freely.vocab = vec![
            VocabItem::new("안녕", "你好"),
            VocabItem::new("가다", ""),
        ];
        freely.grammar = vec![GrammarPoint::new("-아/어요", "polite ending", "좋아요")];
        the_day.add_song(freely);
        the_day.add_song(Song::new("Interlude", "2015/9/8"));

        let mut second = Album::new("Second Album").with_release_date("2018/1/2");
        let mut congratulations = Song::new("Congratulations", "2018/1/2");
        congratulations.lyrics = vec![LyricLine::new("좋아", "good")];
        second.add_song(congratulations);

        catalog.add_album(the_day);
        catalog.add_album(second);

        Self { catalog }
    }

    fn export_all(&self) -> Vec<u8> {
        export(&self.catalog, &FieldId::ALL, ExportFormat::Csv, true).expect("Failed to export")
    }
}

/// Catalog content as JSON with every `id` removed
fn without_ids(catalog: &Catalog) -> Value {
    fn strip(value: &mut Value) {
        match value {
            Value::Object(map) => {
                map.remove("id");
                map.values_mut().for_each(strip);
            }
            Value::Array(items) => items.iter_mut().for_each(strip),
            _ => {}
        }
    }

    let mut value = serde_json::to_value(catalog).expect("Failed to serialize catalog");
    strip(&mut value);
    value
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_three_row_scenario() {
    let csv = "album,song,kor,zh\n\
               The Day,Freely,안녕,hi\n\
               The Day,Freely,,\n\
               The Day,Congratulations,좋아,good\n";

    let mut catalog = Catalog::new();
    let report = import(&mut catalog, csv.as_bytes(), "scenario.csv").expect("Import failed");

    assert_eq!(catalog.len(), 1);
    let album = &catalog.albums[0];
    assert_eq!(album.title, "The Day");
    assert_eq!(album.songs.len(), 2);

    let freely = album.find_song("Freely").expect("Freely missing");
    assert_eq!(freely.lyrics.len(), 1);
    assert_eq!(freely.lyrics[0].source_text, "안녕");
    assert_eq!(freely.lyrics[0].translation_text, "hi");

    let congratulations = album.find_song("Congratulations").expect("Congratulations missing");
    assert_eq!(congratulations.lyrics.len(), 1);
    assert_eq!(congratulations.lyrics[0].source_text, "좋아");
    assert_eq!(congratulations.lyrics[0].translation_text, "good");

    assert_eq!(report.lines_imported, 2);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.albums_created, 1);
    assert_eq!(report.songs_created, 2);
}

// =============================================================================
// Round-trip and idempotence
// =============================================================================

#[test]
fn test_export_then_import_round_trips() {
    let fixture = TestFixture::new();
    let bytes = fixture.export_all();

    let mut imported = Catalog::new();
    let report = import(&mut imported, &bytes, "export.csv").expect("Import failed");

    assert_eq!(without_ids(&imported), without_ids(&fixture.catalog));
    assert_eq!(report.lines_imported, 5);
    assert_eq!(report.vocab_imported, 2);
    assert_eq!(report.grammar_imported, 1);
}

#[test]
fn test_tsv_export_then_import_round_trips() {
    let mut fixture = TestFixture::new();
    fixture.catalog.albums[1].songs[0]
        .lyrics
        .push(LyricLine::new("he said \"hi\"", "\"quoted\" translation"));

    let bytes = export(&fixture.catalog, &FieldId::ALL, ExportFormat::Tsv, true)
        .expect("Failed to export");
    let mut imported = Catalog::new();
    import(&mut imported, &bytes, "export.tsv").expect("Import failed");

    assert_eq!(without_ids(&imported), without_ids(&fixture.catalog));
    let line = &imported.albums[1].songs[0].lyrics[1];
    assert_eq!(line.source_text, "he said \"hi\"");
    assert_eq!(line.translation_text, "\"quoted\" translation");
}

#[test]
fn test_importing_twice_is_idempotent() {
    let fixture = TestFixture::new();
    let bytes = fixture.export_all();

    let mut once = Catalog::new();
    import(&mut once, &bytes, "export.csv").expect("Import failed");
    let after_once = without_ids(&once);
    let album_ids: Vec<_> = once.albums.iter().map(|a| a.id).collect();

    import(&mut once, &bytes, "export.csv").expect("Import failed");
    assert_eq!(without_ids(&once), after_once);
    assert_eq!(once.albums.iter().map(|a| a.id).collect::<Vec<_>>(), album_ids);
}

#[test]
fn test_reimport_into_source_changes_nothing() {
    let fixture = TestFixture::new();
    let bytes = fixture.export_all();

    let mut catalog = fixture.catalog.clone();
    let report = import(&mut catalog, &bytes, "export.csv").expect("Import failed");
    assert_eq!(without_ids(&catalog), without_ids(&fixture.catalog));
    assert_eq!(report.albums_created, 0);
    assert_eq!(report.songs_created, 0);
}

// =============================================================================
// Merge behaviour
// =============================================================================

#[test]
fn test_existing_album_order_survives_import() {
    let mut catalog = Catalog::new();
    catalog.add_album(Album::new("B"));
    catalog.add_album(Album::new("A"));

    let csv = "album,song\nA,s1\nC,s2\nb,s3\n";
    import(&mut catalog, csv.as_bytes(), "order.csv").expect("Import failed");

    let titles: Vec<&str> = catalog.albums.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "C"]);
    assert_eq!(catalog.song_count(), 3);
}

#[test]
fn test_song_titles_match_case_insensitively() {
    let csv = "album,song,word,meaning\nX,Freely,a,1\nx,FREELY,b,2\n";
    let mut catalog = Catalog::new();
    import(&mut catalog, csv.as_bytes(), "case.csv").expect("Import failed");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.albums[0].songs.len(), 1);
    assert_eq!(catalog.albums[0].songs[0].vocab.len(), 2);
}

#[test]
fn test_grammar_row_never_counts_as_vocab() {
    let csv = "album,song,vocab word,vocab meaning,grammar pattern,grammar example\n\
               A,S,먹다,eat,-고 싶다,먹고 싶다\n\
               A,S,가다,go,,\n";
    let mut catalog = Catalog::new();
    let report = import(&mut catalog, csv.as_bytes(), "notes.csv").expect("Import failed");

    assert_eq!(report.grammar_imported, 1);
    assert_eq!(report.vocab_imported, 1);
    let song = &catalog.albums[0].songs[0];
    assert_eq!(song.vocab[0].word, "가다");
    assert_eq!(song.grammar[0].example, "먹고 싶다");
}

#[test]
fn test_bilingual_headers_with_markers() {
    let csv = "\u{feff}专辑名,歌曲名,发行日期（可选）,韩文歌词,中文翻译\n\
               The Day,Freely,2015-09-07,안녕,你好\n";
    let mut catalog = Catalog::new();
    import(&mut catalog, csv.as_bytes(), "zh.csv").expect("Import failed");

    let song = &catalog.albums[0].songs[0];
    assert_eq!(song.release_date, "2015/9/7");
    assert_eq!(song.lyrics[0].translation_text, "你好");
}

#[test]
fn test_missing_required_columns_is_fatal() {
    let mut catalog = TestFixture::new().catalog;
    let before = without_ids(&catalog);

    let err = import(&mut catalog, b"kor,zh\na,b\n", "bad.csv").unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumns { .. }));
    assert_eq!(without_ids(&catalog), before);
}
