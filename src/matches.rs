//! College Matching
//!
//! Contract between the recommender wizard and whatever ranks colleges
//! for it. The shipped provider returns a fixed list.

use std::collections::BTreeMap;

use crate::wizard::Answer;

/// Inputs collected by the wizard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchQuery {
    /// Parent category id -> importance 0-100
    pub weights: BTreeMap<String, u8>,
    /// Child question id -> answer
    pub answers: BTreeMap<String, Answer>,
    pub free_text: String,
}

/// A ranked college with the reasons it matched
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeMatch {
    pub id: String,
    pub name: String,
    /// Match strength in 0.0..=1.0
    pub score: f64,
    pub why: Vec<String>,
}

impl CollegeMatch {
    fn new(id: &str, name: &str, score: f64, why: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            score,
            why: why.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Score as a whole percent, e.g. 86
    pub fn percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    pub fn why_line(&self) -> String {
        format!("Why: {}", self.why.join(" · "))
    }

    /// Inline style for the score bar
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.score.clamp(0.0, 1.0) * 100.0)
    }
}

/// Ranks colleges for a wizard query
pub trait MatchProvider {
    /// Best match first
    fn rank(&self, query: &MatchQuery) -> Vec<CollegeMatch>;
}

/// Fixed results until real scoring is wired in
#[derive(Debug, Clone, Copy, Default)]
pub struct MockMatchProvider;

impl MatchProvider for MockMatchProvider {
    fn rank(&self, _query: &MatchQuery) -> Vec<CollegeMatch> {
        vec![
            CollegeMatch::new(
                "trinity",
                "Trinity College",
                0.86,
                &["Residence: Lighting", "Food: Quality", "Social: Moderate"],
            ),
            CollegeMatch::new("innis", "Innis College", 0.79, &["Residence: Doubles", "Social: Events"]),
            CollegeMatch::new("victoria", "Victoria College", 0.72, &["Food: Variety", "Clubs: Career"]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_results_are_fixed_and_ranked() {
        let provider = MockMatchProvider;
        let empty = provider.rank(&MatchQuery::default());
        let mut query = MatchQuery::default();
        query.free_text = "quiet library".into();
        query.weights.insert("food".into(), 100);

        assert_eq!(empty, provider.rank(&query));
        let ids: Vec<_> = empty.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["trinity", "innis", "victoria"]);
        assert!(empty.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_display_helpers() {
        let top = &MockMatchProvider.rank(&MatchQuery::default())[0];
        assert_eq!(top.percent(), 86);
        assert_eq!(top.why_line(), "Why: Residence: Lighting · Food: Quality · Social: Moderate");
        assert!(top.bar_style().starts_with("width: 86"));
    }
}
