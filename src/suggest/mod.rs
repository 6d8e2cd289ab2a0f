//! Word-completion port and a dictionary-backed default implementation.

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::info;

/// At most this many completions are surfaced per fragment.
pub const MAX_SUGGESTIONS: usize = 4;

/// Capability seam over word completion. The pipeline queries it with the
/// trailing word fragment after every processed frame.
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionProvider {
    /// Up to [`MAX_SUGGESTIONS`] completions for `fragment`, best first.
    fn suggest(&self, fragment: &str) -> Vec<String>;
}

/// Built-in fallback vocabulary, used when no dictionary file is configured.
static FALLBACK_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "ABOUT", "AFTER", "AGAIN", "COULD", "EVERY", "FIRST", "GOOD", "GREAT",
        "HELLO", "HELP", "HERE", "HOUSE", "KNOW", "LIKE", "MAKE", "MANY",
        "NAME", "NEED", "OTHER", "PEOPLE", "PLEASE", "RIGHT", "SOME", "THANK",
        "THANKS", "THEIR", "THERE", "THESE", "THING", "THINK", "TIME", "WANT",
        "WATER", "WHERE", "WHICH", "WORLD", "WOULD", "YES", "YOUR",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
});

/// Prefix matcher over an uppercase word list.
pub struct WordListSuggester {
    words: Vec<String>,
}

impl WordListSuggester {
    /// Uses the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            words: FALLBACK_WORDS.clone(),
        }
    }

    /// Loads one word per line, uppercased, blank lines skipped.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let words: Vec<String> = contents
            .lines()
            .map(|l| l.trim().to_uppercase())
            .filter(|l| !l.is_empty())
            .collect();
        info!(count = words.len(), path = %path.display(), "loaded dictionary");
        Ok(Self { words })
    }
}

impl Default for WordListSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionProvider for WordListSuggester {
    fn suggest(&self, fragment: &str) -> Vec<String> {
        let fragment = fragment.trim().to_uppercase();
        if fragment.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.starts_with(&fragment))
            .cloned()
            .collect();
        // Shortest completions first; ties alphabetical.
        matches.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_prefix_matches_are_ranked_and_capped() {
        let suggester = WordListSuggester::new();
        let suggestions = suggester.suggest("TH");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "THANK");
        assert!(suggestions.iter().all(|w| w.starts_with("TH")));
    }

    #[test]
    fn test_shorter_completions_rank_first() {
        let suggester = WordListSuggester::new();
        let suggestions = suggester.suggest("HEL");
        assert_eq!(suggestions, vec!["HELP".to_string(), "HELLO".to_string()]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let suggester = WordListSuggester::new();
        assert_eq!(suggester.suggest("hel"), suggester.suggest("HEL"));
    }

    #[test]
    fn test_blank_fragment_yields_nothing() {
        let suggester = WordListSuggester::new();
        assert!(suggester.suggest("").is_empty());
        assert!(suggester.suggest("   ").is_empty());
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let suggester = WordListSuggester::new();
        assert!(suggester.suggest("QQQQ").is_empty());
    }

    #[test]
    fn test_dictionary_file_loading() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "alpha\n\nBeta\n  gamma  ").unwrap();

        let suggester = WordListSuggester::from_file(&path).unwrap();
        assert_eq!(suggester.suggest("A"), vec!["ALPHA".to_string()]);
        assert_eq!(suggester.suggest("g"), vec!["GAMMA".to_string()]);
    }

    #[test]
    fn test_missing_dictionary_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(WordListSuggester::from_file(&dir.path().join("absent.txt")).is_err());
    }
}
