//! Problem definition step: the free-text problem statement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// What the user is trying to solve.
///
/// Every field is optional free text; empty strings are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemData {
    pub title: String,
    pub description: String,
    pub importance: String,
    pub impact: String,
    pub category: String,
}

/// A single field edit on the problem definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemField {
    Title(String),
    Description(String),
    Importance(String),
    Impact(String),
    Category(String),
}

impl ProblemField {
    /// Category edit; preset names are stored in their canonical form, any
    /// other text verbatim.
    pub fn category(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.parse::<ProblemCategory>() {
            Ok(known) => ProblemField::Category(known.as_str().to_string()),
            Err(_) => ProblemField::Category(raw),
        }
    }
}

impl ProblemData {
    /// Returns a copy with exactly one field replaced.
    pub fn with_field(&self, field: ProblemField) -> Self {
        let mut next = self.clone();
        match field {
            ProblemField::Title(v) => next.title = v,
            ProblemField::Description(v) => next.description = v,
            ProblemField::Importance(v) => next.importance = v,
            ProblemField::Impact(v) => next.impact = v,
            ProblemField::Category(v) => next.category = v,
        }
        next
    }

    /// Number of words in the description.
    pub fn description_word_count(&self) -> usize {
        word_count(&self.description)
    }

    /// The known category this problem is filed under, if any.
    pub fn known_category(&self) -> Option<ProblemCategory> {
        self.category.parse().ok()
    }
}

/// Counts whitespace-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Formats a word count the way the description field shows it.
pub fn word_label(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", count)
    }
}

/// Categories offered by the problem form.
///
/// The stored category stays free text; this only covers the preset choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemCategory {
    Personal,
    Work,
    Study,
    Custom,
}

impl ProblemCategory {
    pub fn all() -> &'static [ProblemCategory] {
        &[
            ProblemCategory::Personal,
            ProblemCategory::Work,
            ProblemCategory::Study,
            ProblemCategory::Custom,
        ]
    }

    /// Value stored in `ProblemData::category`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemCategory::Personal => "personal",
            ProblemCategory::Work => "work",
            ProblemCategory::Study => "study",
            ProblemCategory::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProblemCategory::Personal => "Personal",
            ProblemCategory::Work => "Work",
            ProblemCategory::Study => "Study",
            ProblemCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProblemCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(ProblemCategory::Personal),
            "work" => Ok(ProblemCategory::Work),
            "study" => Ok(ProblemCategory::Study),
            "custom" => Ok(ProblemCategory::Custom),
            _ => Err(ValidationError::invalid_format(
                "category",
                format!("unknown category '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_edit_normalizes_presets_only() {
        assert_eq!(
            ProblemField::category(" Study "),
            ProblemField::Category("study".to_string())
        );
        assert_eq!(
            ProblemField::category("Side project"),
            ProblemField::Category("Side project".to_string())
        );
    }

    #[test]
    fn default_problem_is_all_empty() {
        let problem = ProblemData::default();
        assert!(problem.title.is_empty());
        assert!(problem.description.is_empty());
        assert!(problem.importance.is_empty());
        assert!(problem.impact.is_empty());
        assert!(problem.category.is_empty());
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let base = ProblemData {
            title: "Late mornings".to_string(),
            category: "personal".to_string(),
            ..Default::default()
        };

        let next = base.with_field(ProblemField::Impact("Missed standups".to_string()));

        assert_eq!(next.impact, "Missed standups");
        assert_eq!(next.title, "Late mornings");
        assert_eq!(next.category, "personal");
        assert!(base.impact.is_empty());
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  too   many\nspaces here "), 4);
    }

    #[test]
    fn description_word_count_tracks_description() {
        let problem = ProblemData::default()
            .with_field(ProblemField::Description("I keep hitting snooze".to_string()));
        assert_eq!(problem.description_word_count(), 4);
    }

    #[test]
    fn word_label_pluralizes() {
        assert_eq!(word_label(0), "0 words");
        assert_eq!(word_label(1), "1 word");
        assert_eq!(word_label(12), "12 words");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Work".parse::<ProblemCategory>().unwrap(), ProblemCategory::Work);
        assert_eq!(" study ".parse::<ProblemCategory>().unwrap(), ProblemCategory::Study);
        assert!("hobby".parse::<ProblemCategory>().is_err());
    }

    #[test]
    fn known_category_keeps_unknown_values_as_none() {
        let problem = ProblemData::default().with_field(ProblemField::Category("garden".into()));
        assert_eq!(problem.known_category(), None);
        assert_eq!(problem.category, "garden");
    }

    #[test]
    fn category_round_trips_through_as_str() {
        for category in ProblemCategory::all() {
            assert_eq!(category.as_str().parse::<ProblemCategory>().unwrap(), *category);
        }
    }
}
