use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    Russian,
}

impl Language {
    /// Name used in dictionary URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Russian => "russian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered language pair of one dictionary page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "en-fr")]
    EnglishFrench,
    #[serde(rename = "fr-en")]
    FrenchEnglish,
    #[serde(rename = "en-ru")]
    EnglishRussian,
}

impl Direction {
    pub fn source(&self) -> Language {
        match self {
            Direction::EnglishFrench | Direction::EnglishRussian => Language::English,
            Direction::FrenchEnglish => Language::French,
        }
    }

    pub fn target(&self) -> Language {
        match self {
            Direction::EnglishFrench => Language::French,
            Direction::FrenchEnglish => Language::English,
            Direction::EnglishRussian => Language::Russian,
        }
    }

    /// Code as written in the word list, e.g. `en-fr`
    pub fn code(&self) -> &'static str {
        match self {
            Direction::EnglishFrench => "en-fr",
            Direction::FrenchEnglish => "fr-en",
            Direction::EnglishRussian => "en-ru",
        }
    }

    /// Dictionary path segment, e.g. `english-french`
    pub fn slug(&self) -> String {
        format!("{}-{}", self.source(), self.target())
    }

    /// Whether this page is from the gloss (Russian) dictionary
    pub fn is_gloss(&self) -> bool {
        self.target() == Language::Russian
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported direction code '{0}'")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-fr" => Ok(Direction::EnglishFrench),
            "fr-en" => Ok(Direction::FrenchEnglish),
            "en-ru" => Ok(Direction::EnglishRussian),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Article,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Article => "article",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported part of speech '{0}'")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.to_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            "article" => PartOfSpeech::Article,
            _ => return Err(UnknownPartOfSpeech(s.to_string())),
        };
        Ok(pos)
    }
}

/// One line of the word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordQuery {
    pub text: String,
    pub part_of_speech: PartOfSpeech,
    pub direction: Direction,
}

impl WordQuery {
    pub fn new(text: impl Into<String>, part_of_speech: PartOfSpeech, direction: Direction) -> Self {
        Self {
            text: text.into(),
            part_of_speech,
            direction,
        }
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.text, self.part_of_speech, self.direction)
    }
}

/// Output of a single lookup stage. A blank `word` means unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub part_of_speech: String,
    pub transcription: String,
    pub translation: String,
    /// Full multi-sense fragment when the translation was split on `/`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub additional_info: String,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.word.trim().is_empty()
    }
}

/// English, French and Russian sides of one resolved word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrilingualRecord {
    #[serde(rename = "english")]
    pub source: LookupResult,
    #[serde(rename = "french")]
    pub target: LookupResult,
    #[serde(rename = "russian")]
    pub gloss: LookupResult,
}

impl TrilingualRecord {
    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty() && !self.gloss.is_empty()
    }

    /// Names of the sides that failed to resolve
    pub fn missing_sides(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.source.is_empty() {
            missing.push("english");
        }
        if self.target.is_empty() {
            missing.push("french");
        }
        if self.gloss.is_empty() {
            missing.push("russian");
        }
        missing
    }
}

/// Routing label for an assembled record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Complete,
    NeedsWork,
}
