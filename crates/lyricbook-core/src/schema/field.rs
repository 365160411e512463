//! Canonical field identifiers for tabular import and export

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language-independent name for the meaning of one table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    AlbumTitle,
    SongTitle,
    AlbumReleaseDate,
    ReleaseDate,
    Lyricist,
    Composer,
    CoverRef,
    SourceLyric,
    TranslationLyric,
    VocabWord,
    VocabTranslation,
    GrammarPattern,
    GrammarExplanation,
    GrammarExample,
}

/// Which part of a song a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Album or song metadata, repeated on every exported row
    Metadata,
    /// One side of a lyric line
    Lyric,
    /// One half of a vocabulary entry
    Vocab,
    /// One part of a grammar point
    Grammar,
}

impl FieldId {
    /// Every field, in canonical order
    pub const ALL: [FieldId; 14] = [
        FieldId::AlbumTitle,
        FieldId::SongTitle,
        FieldId::AlbumReleaseDate,
        FieldId::ReleaseDate,
        FieldId::Lyricist,
        FieldId::Composer,
        FieldId::CoverRef,
        FieldId::SourceLyric,
        FieldId::TranslationLyric,
        FieldId::VocabWord,
        FieldId::VocabTranslation,
        FieldId::GrammarPattern,
        FieldId::GrammarExplanation,
        FieldId::GrammarExample,
    ];

    /// Fields every import must resolve and every export includes
    pub const REQUIRED: [FieldId; 2] = [FieldId::AlbumTitle, FieldId::SongTitle];

    /// The camelCase identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::AlbumTitle => "albumTitle",
            FieldId::SongTitle => "songTitle",
            FieldId::AlbumReleaseDate => "albumReleaseDate",
            FieldId::ReleaseDate => "releaseDate",
            FieldId::Lyricist => "lyricist",
            FieldId::Composer => "composer",
            FieldId::CoverRef => "coverRef",
            FieldId::SourceLyric => "sourceLyric",
            FieldId::TranslationLyric => "translationLyric",
            FieldId::VocabWord => "vocabWord",
            FieldId::VocabTranslation => "vocabTranslation",
            FieldId::GrammarPattern => "grammarPattern",
            FieldId::GrammarExplanation => "grammarExplanation",
            FieldId::GrammarExample => "grammarExample",
        }
    }

    /// Human-readable, bilingual column label written by exports and templates
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::AlbumTitle => "Album Title / 专辑名",
            FieldId::SongTitle => "Song Title / 歌曲名",
            FieldId::AlbumReleaseDate => "Album Release Date / 专辑发行日期",
            FieldId::ReleaseDate => "Release Date / 发行日期",
            FieldId::Lyricist => "Lyricist / 作词",
            FieldId::Composer => "Composer / 作曲",
            FieldId::CoverRef => "Album Cover / 专辑封面",
            FieldId::SourceLyric => "Lyric / 原文歌词",
            FieldId::TranslationLyric => "Translation / 中文翻译",
            FieldId::VocabWord => "Vocab Word / 单词",
            FieldId::VocabTranslation => "Vocab Meaning / 单词释义",
            FieldId::GrammarPattern => "Grammar Pattern / 语法",
            FieldId::GrammarExplanation => "Grammar Explanation / 语法解释",
            FieldId::GrammarExample => "Grammar Example / 例句",
        }
    }

    /// Accepted header spellings, already in normalized form.
    ///
    /// Order matters: earlier aliases win ties within a matching tier.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            FieldId::AlbumTitle => &["albumtitle", "albumname", "album", "专辑名", "专辑名称", "专辑", "앨범"],
            FieldId::SongTitle => &[
                "songtitle", "songname", "song", "track", "title", "歌曲名", "歌曲名称", "歌名", "歌曲", "곡",
            ],
            FieldId::AlbumReleaseDate => &["albumreleasedate", "albumdate", "专辑发行日期", "专辑日期"],
            FieldId::ReleaseDate => &[
                "releasedate", "songreleasedate", "date", "released", "发行日期", "发行时间", "日期", "발매일",
            ],
            FieldId::Lyricist => &["lyricist", "lyricsby", "writer", "作词", "작사"],
            FieldId::Composer => &["composer", "composedby", "music", "作曲", "작곡"],
            FieldId::CoverRef => &["albumcover", "cover", "coverurl", "coverimage", "artwork", "专辑封面", "封面"],
            FieldId::SourceLyric => &[
                "sourcelyric", "lyric", "lyrics", "original", "source", "kor", "korean", "韩文歌词", "原文歌词",
                "歌词原文", "原文", "歌词", "가사",
            ],
            FieldId::TranslationLyric => &[
                "translationlyric", "translation", "translated", "zh", "chinese", "中文翻译", "中文歌词", "歌词翻译",
                "翻译", "译文", "中文", "번역",
            ],
            FieldId::VocabWord => &["vocabword", "vocab", "word", "vocabulary", "单词", "词汇", "生词", "단어"],
            FieldId::VocabTranslation => &[
                "vocabmeaning", "vocabtranslation", "wordmeaning", "wordtranslation", "meaning", "单词释义", "释义",
                "词义", "뜻",
            ],
            FieldId::GrammarPattern => &["grammarpattern", "grammar", "pattern", "语法点", "语法", "문법"],
            FieldId::GrammarExplanation => &[
                "grammarexplanation", "explanation", "grammarnote", "语法解释", "语法说明", "解释", "说明", "설명",
            ],
            FieldId::GrammarExample => &["grammarexample", "example", "examplesentence", "例句", "예문"],
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            FieldId::SourceLyric | FieldId::TranslationLyric => FieldGroup::Lyric,
            FieldId::VocabWord | FieldId::VocabTranslation => FieldGroup::Vocab,
            FieldId::GrammarPattern | FieldId::GrammarExplanation | FieldId::GrammarExample => {
                FieldGroup::Grammar
            }
            _ => FieldGroup::Metadata,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown field id: {}", wanted))
    }
}

/// Parse a comma-separated list of field ids, e.g. `albumTitle,songTitle,vocabWord`
pub fn parse_field_list(s: &str) -> Result<Vec<FieldId>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(FieldId::from_str)
        .collect()
}
