//! Recommender Wizard State
//!
//! The four-step preference flow: weights, drill-down questions, free
//! text, results. Held entirely in a client-side store and never
//! persisted.

use std::collections::BTreeMap;

use reactive_stores::Store;
use thiserror::Error;

use crate::matches::MatchQuery;

/// Weight every parent gets after Reset
pub const BASELINE_WEIGHT: u8 = 50;

/// Parent preference category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentCategory {
    pub id: &'static str,
    pub label: &'static str,
}

/// Yes/no question under a parent category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildQuestion {
    pub id: &'static str,
    pub label: &'static str,
}

pub const PARENTS: &[ParentCategory] = &[
    ParentCategory { id: "social", label: "Social Life" },
    ParentCategory { id: "academics", label: "Academics" },
    ParentCategory { id: "residence", label: "Residence" },
    ParentCategory { id: "food", label: "Food" },
    ParentCategory { id: "clubs", label: "Clubs & Opps" },
];

const SOCIAL: &[ChildQuestion] = &[
    ChildQuestion { id: "party", label: "Party Scene" },
    ChildQuestion { id: "events", label: "Campus Events" },
    ChildQuestion { id: "intramurals", label: "Intramurals" },
];

const RESIDENCE: &[ChildQuestion] = &[
    ChildQuestion { id: "double_rooms", label: "Double Rooms" },
    ChildQuestion { id: "lighting", label: "Lighting" },
    ChildQuestion { id: "common_spaces", label: "Common Spaces" },
];

const ACADEMICS: &[ChildQuestion] = &[
    ChildQuestion { id: "research", label: "Research" },
    ChildQuestion { id: "rigor", label: "Rigor" },
    ChildQuestion { id: "prof_support", label: "Prof Support" },
];

const FOOD: &[ChildQuestion] = &[
    ChildQuestion { id: "variety", label: "Variety" },
    ChildQuestion { id: "quality", label: "Quality" },
    ChildQuestion { id: "hours", label: "Late Hours" },
];

const CLUBS: &[ChildQuestion] = &[
    ChildQuestion { id: "count", label: "Many Clubs" },
    ChildQuestion { id: "career", label: "Career Societies" },
    ChildQuestion { id: "sports", label: "Sports Clubs" },
];

/// Questions shown for a parent; empty for unknown ids
pub fn children_of(parent_id: &str) -> &'static [ChildQuestion] {
    match parent_id {
        "social" => SOCIAL,
        "residence" => RESIDENCE,
        "academics" => ACADEMICS,
        "food" => FOOD,
        "clubs" => CLUBS,
        _ => &[],
    }
}

/// Step of the wizard, numbered 1 to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Weights,
    DrillDown,
    FreeText,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Cannot move from step {from} to step {to}")]
    InvalidTransition { from: u8, to: u8 },
}

impl WizardStep {
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Weights => 1,
            WizardStep::DrillDown => 2,
            WizardStep::FreeText => 3,
            WizardStep::Results => 4,
        }
    }

    /// Step for a number, clamped to 1..=4
    pub fn from_index(index: i32) -> Self {
        match index.clamp(1, 4) {
            1 => WizardStep::Weights,
            2 => WizardStep::DrillDown,
            3 => WizardStep::FreeText,
            _ => WizardStep::Results,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(i32::from(self.index()) + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(i32::from(self.index()) - 1)
    }

    /// Adjacent steps, plus Results back to DrillDown (refine)
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Weights, DrillDown)
                | (DrillDown, Weights)
                | (DrillDown, FreeText)
                | (FreeText, DrillDown)
                | (FreeText, Results)
                | (Results, DrillDown)
        )
    }

    pub fn transition_to(&self, target: Self) -> Result<Self, WizardError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(WizardError::InvalidTransition {
                from: self.index(),
                to: target.index(),
            })
        }
    }

    /// Header progress bar value
    pub fn progress(&self) -> u8 {
        (self.index() - 1) * 33 + 1
    }
}

/// Importance (0-100) per parent category
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(BTreeMap<&'static str, u8>);

impl Default for Weights {
    fn default() -> Self {
        Self(BTreeMap::from([
            ("social", 60),
            ("academics", 55),
            ("residence", 80),
            ("food", 40),
            ("clubs", 50),
        ]))
    }
}

impl Weights {
    pub fn get(&self, parent_id: &str) -> u8 {
        self.0.get(parent_id).copied().unwrap_or(BASELINE_WEIGHT)
    }

    /// Set a weight, clamped to 100. Unknown parents are ignored.
    pub fn set(&mut self, parent_id: &str, value: u8) {
        if let Some(parent) = PARENTS.iter().find(|p| p.id == parent_id) {
            self.0.insert(parent.id, value.min(100));
        }
    }

    pub fn reset(&mut self) {
        for parent in PARENTS {
            self.0.insert(parent.id, BASELINE_WEIGHT);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Answer to a drill-down question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Skip,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Skip];

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Skip => "Skip",
        }
    }
}

/// Answers keyed by child question id, across all parents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildAnswers(BTreeMap<&'static str, Answer>);

impl ChildAnswers {
    pub fn answer(&mut self, child_id: &'static str, answer: Answer) {
        self.0.insert(child_id, answer);
    }

    pub fn get(&self, child_id: &str) -> Option<Answer> {
        self.0.get(child_id).copied()
    }
}

/// Wizard session with field-level reactivity
#[derive(Debug, Clone, Store)]
pub struct WizardSession {
    pub step: WizardStep,
    pub weights: Weights,
    pub chosen_parent: Option<&'static str>,
    pub answers: ChildAnswers,
    pub free_text: String,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self {
            step: WizardStep::Weights,
            weights: Weights::default(),
            chosen_parent: Some("residence"),
            answers: ChildAnswers::default(),
            free_text: String::new(),
        }
    }
}

impl WizardSession {
    /// Everything a match provider needs
    pub fn query(&self) -> MatchQuery {
        MatchQuery {
            weights: self.weights.iter().map(|(k, v)| (k.to_string(), v)).collect(),
            answers: self.answers.0.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            free_text: self.free_text.clone(),
        }
    }
}
