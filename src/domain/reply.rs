use rand::seq::SliceRandom;
use serde::Serialize;

use super::place::Place;

pub const RESULTS_HEADER: &str = "Here are some results for your search:";
pub const MANNERISMS: [&str; 9] = ["😊", "🤔", "✨", "😄", "🙌", "😅", "👍", "💡", "🤷‍♂️"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SearchResult {
    #[serde(rename = "database")]
    Db { places: Vec<Place> },
    Web { summary: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaRequest {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub media: Vec<MediaRequest>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            media: vec![],
        }
    }
}

pub fn render(result: &SearchResult) -> Reply {
    match result {
        SearchResult::Db { places } => Reply {
            text: render_places(places),
            media: places
                .iter()
                .filter_map(|place| {
                    place.image().map(|url| MediaRequest {
                        url: url.to_string(),
                        caption: format!("Here's a view of {}", place.name),
                    })
                })
                .collect(),
        },
        SearchResult::Web { summary } => Reply::text(summary.clone()),
    }
}

fn render_places(places: &[Place]) -> String {
    let entries: Vec<String> = places
        .iter()
        .enumerate()
        .map(|(index, place)| {
            format!(
                "{}. {}\n   - Description: {}\n   - Contact: {}\n   - Rating: {}/5\n",
                index + 1,
                place.name,
                place.description,
                place.contact_number,
                place.rating
            )
        })
        .collect();

    format!("{}\n\n{}", RESULTS_HEADER, entries.join("\n"))
}

/// Appends one random emoji. Cosmetic only.
pub fn decorate(text: &str) -> String {
    let emoji = MANNERISMS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default();

    format!("{} {}", text, emoji)
}
