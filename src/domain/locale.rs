#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Welcome,
    Error,
    Clarify,
}

impl Language {
    /// Accepts tags such as `fr`, `FR`, `fr-CA` or `fr_CA`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// First supported language of an `Accept-Language` header value, quality weights ignored.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Language::from_tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

pub fn translate(key: MessageKey, language: Language) -> &'static str {
    match (language, key) {
        (Language::En, MessageKey::Welcome) => "Welcome to Nuru!",
        (Language::En, MessageKey::Error) => "Oops! Something went wrong. Please try again later.",
        (Language::En, MessageKey::Clarify) => {
            "I didn't understand your query. Could you be more specific?"
        }
        (Language::Fr, MessageKey::Welcome) => "Bienvenue à Nuru!",
        (Language::Fr, MessageKey::Error) => {
            "Oups ! Une erreur s'est produite. Veuillez réessayer plus tard."
        }
        (Language::Fr, MessageKey::Clarify) => {
            "Je n'ai pas compris votre demande. Pouvez-vous être plus précis ?"
        }
    }
}
