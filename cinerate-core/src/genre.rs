//! Genre selection quota for the questionnaire step.
//!
//! An independent counter over toggled genre names. It shares the
//! message-region *type* with the rating board and nothing else.

use std::collections::HashSet;

use crate::notice::{MessageRegion, Notice, NoticeKind};

/// Outcome of toggling a genre checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreToggle {
    /// The toggle stood.
    Applied,
    /// The toggle would exceed the limit and was reverted.
    Reverted,
}

/// Enforces the genre selection limit.
#[derive(Debug, Clone)]
pub struct GenreQuota {
    limit: usize,
    selected: HashSet<String>,
}

impl GenreQuota {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            selected: HashSet::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, genre: &str) -> bool {
        self.selected.contains(genre)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Flip a genre checkbox, reverting the change when it would push the
    /// selection past the limit.
    pub fn toggle(
        &mut self,
        genre: &str,
        region: &mut MessageRegion,
    ) -> GenreToggle {
        if self.selected.remove(genre) {
            region.resolve(NoticeKind::SelectionLimit);
            return GenreToggle::Applied;
        }

        if self.selected.len() >= self.limit {
            region.show(Notice::SelectionLimit(format!(
                "Limit reached: you can only select {} genres.",
                self.limit
            )));
            return GenreToggle::Reverted;
        }

        self.selected.insert(genre.to_string());
        region.resolve(NoticeKind::SelectionLimit);
        GenreToggle::Applied
    }

    /// Submission-time validation: at least one genre, at most the limit.
    pub fn validate(&self, region: &mut MessageRegion) -> bool {
        if self.selected.is_empty() {
            region.show(Notice::SelectionLimit(
                "Please select at least one genre.".to_string(),
            ));
            return false;
        }
        if self.selected.len() > self.limit {
            region.show(Notice::SelectionLimit(format!(
                "You can select a maximum of {} genres.",
                self.limit
            )));
            return false;
        }

        region.resolve(NoticeKind::SelectionLimit);
        true
    }
}
