//! Frontend Models
//!
//! Data structures exchanged with the review API.

use serde::{Deserialize, Serialize};

/// Rateable review category, in the order the checkboxes appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Social,
    Clubs,
    Study,
    Opportunities,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Social,
        Category::Clubs,
        Category::Study,
        Category::Opportunities,
    ];

    /// Wire name, also used as the input `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Social => "social",
            Category::Clubs => "clubs",
            Category::Study => "study",
            Category::Opportunities => "opportunities",
        }
    }

    /// Label shown above the rating input, e.g. "Food Rating (1–10):"
    pub fn rating_label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} Rating (1–10):", capitalized)
    }
}

/// Body of `POST /generate_tags`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateTagsRequest<'a> {
    pub text: &'a str,
}

/// Response of `POST /generate_tags`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateTagsResponse {
    pub tags: Vec<String>,
}

/// Body of `POST /colleges/{college}`
///
/// Ratings of unchecked categories serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub user: String,
    pub text: String,
    pub tags: Vec<String>,
    pub rated_categories: Vec<Category>,
    pub food: Option<i64>,
    pub social: Option<i64>,
    pub clubs: Option<i64>,
    pub study: Option<i64>,
    pub opportunities: Option<i64>,
}
