use std::fmt::Display;

use super::locale::Language;

pub const STOP_WORDS: [&str; 18] = [
    "and", "or", "the", "is", "in", "at", "a", "an", "of", "for", "on", "with", "to", "find",
    "me", "near", "by", "from",
];

pub const GREETINGS: [&str; 4] = ["hi", "hello", "hey", "salut"];

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub raw_text: String,
    pub keywords: Vec<String>,
    pub detected_language: Option<Language>,
}

impl Query {
    pub fn new(raw_text: impl Display, detected_language: Option<Language>) -> Self {
        let raw_text = raw_text.to_string();
        let keywords = extract_keywords(&raw_text);

        Query {
            raw_text,
            keywords,
            detected_language,
        }
    }

    pub fn is_greeting(&self) -> bool {
        is_greeting(&self.raw_text)
    }

    pub fn language(&self) -> Language {
        self.detected_language.unwrap_or_default()
    }
}

/// Lowercases and splits on whitespace, dropping stop words. Order is preserved.
pub fn extract_keywords(query: impl Display) -> Vec<String> {
    let query = query.to_string().to_lowercase();

    let keywords: Vec<String> = query
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect();

    log::debug!("Extracted keywords: {:?}", keywords);

    keywords
}

pub fn is_greeting(message: &str) -> bool {
    let message = message.trim().to_lowercase();
    GREETINGS.contains(&message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_keeps_order() {
        assert_eq!(
            extract_keywords("Find me a hotel in Watamu"),
            vec!["hotel", "watamu"]
        );
    }

    #[test]
    fn only_stop_words_gives_nothing() {
        assert!(extract_keywords("find me in the a an at").is_empty());
        assert!(extract_keywords("Find ME near BY the").is_empty());
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \t\n ").is_empty());
    }

    #[test]
    fn extraction_is_idempotent_on_clean_input() {
        let clean = "beach resort watamu";
        let once = extract_keywords(clean);
        assert_eq!(once.join(" "), clean);
        assert_eq!(extract_keywords(once.join(" ")), once);
    }

    #[test]
    fn collapses_irregular_whitespace() {
        assert_eq!(
            extract_keywords("  Safari\tlodges \n near   Tsavo "),
            vec!["safari", "lodges", "tsavo"]
        );
    }

    #[test]
    fn non_string_input_is_stringified() {
        assert_eq!(extract_keywords(2024), vec!["2024"]);
    }

    #[test]
    fn keywords_are_a_subset_of_the_lowercased_words() {
        let raw = "Cheap HOTEL with a Pool at Diani and Malindi";
        let words: Vec<String> = raw.split_whitespace().map(|w| w.to_lowercase()).collect();

        let keywords = extract_keywords(raw);
        assert!(keywords.iter().all(|k| words.contains(k)));
        assert!(keywords.iter().all(|k| !STOP_WORDS.contains(&k.as_str())));
        assert_eq!(keywords, vec!["cheap", "hotel", "pool", "diani", "malindi"]);
    }

    #[test]
    fn greetings_match_whole_message_only() {
        assert!(is_greeting("hello"));
        assert!(is_greeting("HeY"));
        assert!(is_greeting(" Salut "));
        assert!(!is_greeting("hello there"));
        assert!(!is_greeting("hotel"));
    }

    #[test]
    fn query_carries_language_with_default() {
        let query = Query::new("hotels in Lamu", None);
        assert_eq!(query.keywords, vec!["hotels", "lamu"]);
        assert_eq!(query.language(), Language::En);

        let query = Query::new("salut", Some(Language::Fr));
        assert!(query.is_greeting());
        assert_eq!(query.language(), Language::Fr);
    }
}
