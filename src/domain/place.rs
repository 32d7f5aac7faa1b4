use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub contact_number: String,
    pub rating: f64,
    pub image_url: Option<String>,
}

impl Place {
    /// Image to send alongside the listing, if the row carries a usable one.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::Place;

    fn place(image_url: Option<&str>) -> Place {
        Place {
            name: "Hemingways".to_string(),
            description: "Beachfront hotel".to_string(),
            contact_number: "+254 700 000000".to_string(),
            rating: 4.5,
            image_url: image_url.map(|u| u.to_string()),
        }
    }

    #[test]
    fn blank_image_is_ignored() {
        assert_eq!(place(None).image(), None);
        assert_eq!(place(Some("")).image(), None);
        assert_eq!(place(Some("   ")).image(), None);
        assert_eq!(
            place(Some("https://img.example/h.jpg")).image(),
            Some("https://img.example/h.jpg")
        );
    }
}
