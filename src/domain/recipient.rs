use std::fmt;

pub const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Bare recipient key, without the transport prefix Twilio puts on `From`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipient(String);

impl Recipient {
    pub fn parse(from: &str) -> Option<Self> {
        let from = from.trim();
        let bare = from.strip_prefix(WHATSAPP_PREFIX).unwrap_or(from).trim();

        match bare.is_empty() {
            true => None,
            false => Some(Recipient(bare.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn whatsapp_address(&self) -> String {
        whatsapp_address(&self.0)
    }
}

pub fn whatsapp_address(number: &str) -> String {
    match number.starts_with(WHATSAPP_PREFIX) {
        true => number.to_string(),
        false => format!("{}{}", WHATSAPP_PREFIX, number),
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_restores_prefix() {
        let recipient = Recipient::parse("whatsapp:+254712345678").unwrap();
        assert_eq!(recipient.as_str(), "+254712345678");
        assert_eq!(recipient.whatsapp_address(), "whatsapp:+254712345678");
    }

    #[test]
    fn accepts_unprefixed_numbers() {
        let recipient = Recipient::parse("+33612345678").unwrap();
        assert_eq!(recipient.whatsapp_address(), "whatsapp:+33612345678");
    }

    #[test]
    fn empty_identifiers_are_rejected() {
        assert_eq!(Recipient::parse(""), None);
        assert_eq!(Recipient::parse("whatsapp:"), None);
        assert_eq!(Recipient::parse("  "), None);
    }

    #[test]
    fn sender_number_is_prefixed_once() {
        assert_eq!(whatsapp_address("+14155238886"), "whatsapp:+14155238886");
        assert_eq!(whatsapp_address("whatsapp:+14155238886"), "whatsapp:+14155238886");
    }
}
