//! Review Draft
//!
//! Client-side state of a review being written in the modal, and the
//! conversion into the payload the college endpoint expects.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::ApiError;
use crate::debounce::Ticket;
use crate::models::{Category, ReviewPayload};

/// Parse a rating input the way the browser's `parseInt(v) || 0` does.
///
/// Leading whitespace and an optional sign are accepted, digits are read
/// until the first non-digit. Anything without leading digits is 0.
/// Values past the `i64` range saturate.
pub fn parse_rating(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                seen = true;
                let d = i64::from(d);
                value = value
                    .saturating_mul(10)
                    .saturating_add(if negative { -d } else { d });
            }
            None => break,
        }
    }
    if seen {
        value
    } else {
        0
    }
}

/// Normalize text typed into the custom tag field.
///
/// Returns `None` for blank input. A single leading `#` is stripped so
/// `"#foo"` and `"foo"` yield the same tag.
pub fn normalize_custom_tag(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let tag = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Checked categories, always iterated in checkbox order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySelection {
    checked: BTreeSet<Category>,
}

impl CategorySelection {
    pub fn set(&mut self, category: Category, checked: bool) {
        if checked {
            self.checked.insert(category);
        } else {
            self.checked.remove(&category);
        }
    }

    pub fn is_checked(&self, category: Category) -> bool {
        self.checked.contains(&category)
    }

    pub fn checked(&self) -> Vec<Category> {
        self.checked.iter().copied().collect()
    }
}

/// Raw rating input values keyed by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ratings {
    values: BTreeMap<Category, String>,
}

impl Ratings {
    pub fn set_raw(&mut self, category: Category, raw: String) {
        self.values.insert(category, raw);
    }

    pub fn raw(&self, category: Category) -> String {
        self.values.get(&category).cloned().unwrap_or_default()
    }

    /// Parsed rating, 0 when the input is missing or not numeric
    pub fn value(&self, category: Category) -> i64 {
        self.values.get(&category).map(|raw| parse_rating(raw)).unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// One rendered rating input. `generation` changes on every rebuild so the
/// view remounts the inputs empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatingField {
    pub generation: u32,
    pub category: Category,
}

/// Checked categories together with the rating inputs built for them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingBlock {
    selection: CategorySelection,
    ratings: Ratings,
    generation: u32,
}

impl RatingBlock {
    /// Check or uncheck a category and rebuild the block. Every rating
    /// value is dropped, including those of untouched categories.
    pub fn toggle(&mut self, category: Category, checked: bool) {
        self.selection.set(category, checked);
        self.ratings.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_checked(&self, category: Category) -> bool {
        self.selection.is_checked(category)
    }

    pub fn checked(&self) -> Vec<Category> {
        self.selection.checked()
    }

    /// Inputs to render, in checkbox order
    pub fn fields(&self) -> Vec<RatingField> {
        self.selection
            .checked()
            .into_iter()
            .map(|category| RatingField {
                generation: self.generation,
                category,
            })
            .collect()
    }

    pub fn set_raw(&mut self, category: Category, raw: String) {
        self.ratings.set_raw(category, raw);
    }

    pub fn raw(&self, category: Category) -> String {
        self.ratings.raw(category)
    }

    /// Parsed rating of a checked category, `None` when unchecked
    pub fn rating(&self, category: Category) -> Option<i64> {
        self.is_checked(category).then(|| self.ratings.value(category))
    }
}

/// A removable tag label
#[derive(Debug, Clone, PartialEq)]
pub struct TagChip {
    pub id: u32,
    pub label: String,
}

impl TagChip {
    pub fn display(&self) -> String {
        format!("#{}", self.label)
    }
}

/// Contents of the tag area: chips or a loading placeholder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagChips {
    chips: Vec<TagChip>,
    next_id: u32,
    loading: bool,
}

impl TagChips {
    pub fn chips(&self) -> &[TagChip] {
        &self.chips
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn push(&mut self, label: String) {
        self.next_id += 1;
        self.chips.push(TagChip { id: self.next_id, label });
    }

    /// Append a manually entered tag. Returns false if the input was blank.
    pub fn add_custom(&mut self, input: &str) -> bool {
        match normalize_custom_tag(input) {
            Some(tag) => {
                self.push(tag);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.chips.retain(|chip| chip.id != id);
    }

    /// Show the loading placeholder in place of the current chips
    pub fn begin_loading(&mut self) {
        self.chips.clear();
        self.loading = true;
    }

    /// Replace the whole area with server suggestions
    pub fn replace_all(&mut self, tags: Vec<String>) {
        self.chips.clear();
        self.loading = false;
        for tag in tags {
            self.push(tag);
        }
    }

    /// Drop the loading placeholder without adding suggestions
    pub fn end_loading(&mut self) {
        self.loading = false;
    }

    /// Show the placeholder for the request `ticket` is about to send.
    /// Returns false, leaving the area alone, once the ticket is stale.
    pub fn start_suggestions(&mut self, ticket: &Ticket) -> bool {
        if !ticket.is_current() {
            return false;
        }
        self.begin_loading();
        true
    }

    /// Apply the outcome of a suggestion request. A stale ticket leaves the
    /// area untouched; a failure only drops the placeholder.
    pub fn apply_suggestions(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<String>, ApiError>,
    ) -> bool {
        if !ticket.is_current() {
            return false;
        }
        match result {
            Ok(tags) => self.replace_all(tags),
            Err(_) => self.end_loading(),
        }
        true
    }

    /// Tag texts as submitted, without the leading `#`
    pub fn labels(&self) -> Vec<String> {
        self.chips.iter().map(|chip| chip.label.trim().to_string()).collect()
    }
}

/// Snapshot of the modal inputs at submit time
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub user: String,
    pub text: String,
    pub ratings: RatingBlock,
    pub tags: TagChips,
}

impl ReviewDraft {
    pub fn payload(&self) -> ReviewPayload {
        let rating = |category: Category| self.ratings.rating(category);

        ReviewPayload {
            user: self.user.trim().to_string(),
            text: self.text.trim().to_string(),
            tags: self.tags.labels(),
            rated_categories: self.ratings.checked(),
            food: rating(Category::Food),
            social: rating(Category::Social),
            clubs: rating(Category::Clubs),
            study: rating(Category::Study),
            opportunities: rating(Category::Opportunities),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::DebounceToken;
    use serde_json::json;

    #[test]
    fn test_parse_rating_like_parse_int() {
        assert_eq!(parse_rating("8"), 8);
        assert_eq!(parse_rating("  7"), 7);
        assert_eq!(parse_rating("7.9"), 7);
        assert_eq!(parse_rating("10abc"), 10);
        assert_eq!(parse_rating("-3"), -3);
        assert_eq!(parse_rating("+4"), 4);
        assert_eq!(parse_rating(""), 0);
        assert_eq!(parse_rating("abc"), 0);
        assert_eq!(parse_rating("-"), 0);
        assert_eq!(parse_rating("99999999999"), 99_999_999_999);
        assert_eq!(parse_rating("-99999999999"), -99_999_999_999);
        assert_eq!(parse_rating("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_custom_tag_hash_is_optional() {
        let mut a = TagChips::default();
        let mut b = TagChips::default();
        assert!(a.add_custom("#foo"));
        assert!(b.add_custom("foo"));
        assert_eq!(a.chips().len(), 1);
        assert_eq!(a.chips()[0].display(), "#foo");
        assert_eq!(b.chips()[0].display(), "#foo");
    }

    #[test]
    fn test_custom_tag_ignores_blank() {
        let mut chips = TagChips::default();
        assert!(!chips.add_custom("   "));
        assert!(!chips.add_custom("#"));
        assert!(!chips.add_custom(" # "));
        assert!(chips.chips().is_empty());
    }

    #[test]
    fn test_custom_tags_keep_duplicates() {
        let mut chips = TagChips::default();
        chips.add_custom("quiet");
        chips.add_custom("#quiet");
        assert_eq!(chips.labels(), vec!["quiet", "quiet"]);
        assert_ne!(chips.chips()[0].id, chips.chips()[1].id);
    }

    #[test]
    fn test_remove_only_clicked_chip() {
        let mut chips = TagChips::default();
        chips.add_custom("a");
        chips.add_custom("a");
        chips.add_custom("b");
        let second = chips.chips()[1].id;
        chips.remove(second);
        assert_eq!(chips.labels(), vec!["a", "b"]);
    }

    #[test]
    fn test_suggestions_replace_whole_area() {
        let mut chips = TagChips::default();
        chips.add_custom("mine");
        chips.begin_loading();
        assert!(chips.is_loading());
        assert!(chips.labels().is_empty());

        chips.replace_all(vec!["chill".into(), "library".into()]);
        assert!(!chips.is_loading());
        assert_eq!(chips.labels(), vec!["chill", "library"]);
    }

    #[test]
    fn test_selection_is_in_checkbox_order() {
        let mut selection = CategorySelection::default();
        selection.set(Category::Study, true);
        selection.set(Category::Food, true);
        selection.set(Category::Clubs, true);
        selection.set(Category::Clubs, false);
        assert_eq!(selection.checked(), vec![Category::Food, Category::Study]);
    }

    #[test]
    fn test_every_subset_yields_one_input_per_checked_category() {
        for mask in 0u32..32 {
            let mut selection = CategorySelection::default();
            for (i, category) in Category::ALL.iter().enumerate() {
                selection.set(*category, mask & (1 << i) != 0);
            }
            let expected: Vec<Category> = Category::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();
            assert_eq!(selection.checked(), expected);
        }
    }

    #[test]
    fn test_missing_rating_becomes_zero() {
        let mut draft = ReviewDraft::default();
        draft.ratings.toggle(Category::Food, true);
        draft.ratings.toggle(Category::Social, true);
        draft.ratings.set_raw(Category::Social, "great".into());

        let payload = draft.payload();
        assert_eq!(payload.food, Some(0));
        assert_eq!(payload.social, Some(0));
        assert_eq!(payload.clubs, None);
    }

    #[test]
    fn test_toggle_clears_every_rating() {
        let mut block = RatingBlock::default();
        block.toggle(Category::Social, true);
        block.set_raw(Category::Social, "7".into());
        let before = block.fields();

        block.toggle(Category::Food, true);
        assert_eq!(block.raw(Category::Social), "");
        assert_eq!(block.rating(Category::Social), Some(0));
        assert_eq!(block.checked(), vec![Category::Food, Category::Social]);

        let after = block.fields();
        assert_eq!(after.len(), 2);
        assert!(after.iter().all(|field| !before.contains(field)));
    }

    #[test]
    fn test_unchecking_rebuilds_remaining_inputs() {
        let mut block = RatingBlock::default();
        block.toggle(Category::Food, true);
        block.toggle(Category::Study, true);
        block.set_raw(Category::Food, "9".into());

        block.toggle(Category::Study, false);
        assert_eq!(block.raw(Category::Food), "");
        assert_eq!(block.rating(Category::Study), None);
        assert_eq!(block.fields().len(), 1);
    }

    #[test]
    fn test_stale_suggestions_leave_chips_alone() {
        let token = DebounceToken::new();
        let mut chips = TagChips::default();
        chips.add_custom("mine");

        let a = token.restart();
        assert!(chips.start_suggestions(&a));
        let b = token.restart();

        assert!(!chips.apply_suggestions(&a, Ok(vec!["from-a".into()])));
        assert!(chips.is_loading());
        assert!(chips.labels().is_empty());

        assert!(chips.apply_suggestions(&b, Ok(vec!["from-b".into()])));
        assert!(!chips.is_loading());
        assert_eq!(chips.labels(), vec!["from-b"]);
    }

    #[test]
    fn test_stale_timer_does_not_show_placeholder() {
        let token = DebounceToken::new();
        let mut chips = TagChips::default();
        chips.add_custom("mine");

        let a = token.restart();
        token.restart();
        assert!(!chips.start_suggestions(&a));
        assert!(!chips.is_loading());
        assert_eq!(chips.labels(), vec!["mine"]);
    }

    #[test]
    fn test_failed_suggestions_drop_placeholder() {
        let token = DebounceToken::new();
        let mut chips = TagChips::default();

        let ticket = token.restart();
        chips.start_suggestions(&ticket);
        assert!(chips.apply_suggestions(&ticket, Err(ApiError::Status(502))));
        assert!(!chips.is_loading());
        assert!(chips.chips().is_empty());
    }

    #[test]
    fn test_payload_end_to_end() {
        let mut draft = ReviewDraft {
            user: "  sam ".into(),
            text: " great dining hall \n".into(),
            ..Default::default()
        };
        draft.ratings.toggle(Category::Social, true);
        draft.ratings.toggle(Category::Food, true);
        draft.ratings.set_raw(Category::Food, "8".into());
        draft.ratings.set_raw(Category::Social, "6".into());
        draft.tags.replace_all(vec!["chill".into(), "library".into()]);

        let value = serde_json::to_value(draft.payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "user": "sam",
                "text": "great dining hall",
                "tags": ["chill", "library"],
                "rated_categories": ["food", "social"],
                "food": 8,
                "social": 6,
                "clubs": null,
                "study": null,
                "opportunities": null
            })
        );
    }
}
