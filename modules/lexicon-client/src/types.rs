use serde::Deserialize;

// --- Free Dictionary API (api.dictionaryapi.dev) ---

/// One headword entry. The API returns an array of these per lookup,
/// one per etymology.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "sourceUrls", default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

/// Definitions grouped under a single part of speech.
#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Body the dictionary API sends alongside a 404.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryMiss {
    pub title: String,
    #[serde(default)]
    pub message: String,
}

// --- Datamuse (api.datamuse.com) ---

/// A word related to the query, ranked by `score` (higher is closer).
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedWord {
    pub word: String,
    pub score: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dictionary_entry() {
        let json = r#"[{
            "word": "run",
            "phonetic": "/ɹʌn/",
            "phonetics": [{"text": "/ɹʌn/", "audio": ""}],
            "meanings": [
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        {"definition": "To move swiftly.", "example": "He ran home.", "synonyms": ["sprint"], "antonyms": []},
                        {"definition": "To flee.", "synonyms": [], "antonyms": []}
                    ],
                    "synonyms": ["jog"],
                    "antonyms": ["walk"]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": "Act or instance of running."}]
                }
            ],
            "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
            "sourceUrls": ["https://en.wiktionary.org/wiki/run"]
        }]"#;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "run");
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "verb");
        assert_eq!(entry.meanings[0].definitions[0].example.as_deref(), Some("He ran home."));
        assert_eq!(entry.meanings[0].definitions[1].example, None);
        assert!(entry.meanings[1].definitions[0].synonyms.is_empty());
        assert_eq!(entry.source_urls, vec!["https://en.wiktionary.org/wiki/run"]);
    }

    #[test]
    fn parses_datamuse_words() {
        let json = r#"[{"word":"sprint","score":1234},{"word":"jog"}]"#;
        let words: Vec<RelatedWord> = serde_json::from_str(json).unwrap();
        assert_eq!(words[0].word, "sprint");
        assert_eq!(words[0].score, Some(1234));
        assert_eq!(words[1].score, None);
    }

    #[test]
    fn parses_dictionary_miss() {
        let json = r#"{"title":"No Definitions Found","message":"Sorry pal.","resolution":"Try the web."}"#;
        let miss: DictionaryMiss = serde_json::from_str(json).unwrap();
        assert_eq!(miss.title, "No Definitions Found");
    }
}
