//! In-memory assessment state for one session.
//!
//! [`AssessmentState`] is the single container the view reads from and the
//! only place selections are written. Its fields are private: a role's level
//! changes only through [`AssessmentState::select_level`], a checklist flag
//! only through [`AssessmentState::toggle_item`], and the school label only
//! through [`AssessmentState::set_identity`].

use std::collections::BTreeMap;

use crate::taxonomy::CATEGORY_COUNT;
use crate::taxonomy::CHECKLIST_LEN;
use crate::taxonomy::CategoryId;
use crate::taxonomy::Role;

/// A role's position on its maturity scale.
///
/// `Unstarted` is deliberately not `Level(0)`: it is shown as "not started"
/// rather than as a rung, while still counting as 0 in ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSelection {
    #[default]
    Unstarted,
    Level(u8),
}

impl LevelSelection {
    /// Numeric value used for comparisons and ratios; 0 when unstarted.
    pub fn as_number(self) -> u8 {
        match self {
            LevelSelection::Unstarted => 0,
            LevelSelection::Level(level) => level,
        }
    }

    pub fn is_started(self) -> bool {
        matches!(self, LevelSelection::Level(_))
    }
}

/// Completion flags of one practice board, index-aligned with its items.
pub type ChecklistFlags = [bool; CHECKLIST_LEN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentState {
    selections: BTreeMap<Role, LevelSelection>,
    checklists: [ChecklistFlags; CATEGORY_COUNT],
    identity: String,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentState {
    /// Fresh session: every role unstarted, every flag cleared, empty label.
    pub fn new() -> Self {
        Self {
            selections: Role::ALL
                .into_iter()
                .map(|role| (role, LevelSelection::Unstarted))
                .collect(),
            checklists: [[false; CHECKLIST_LEN]; CATEGORY_COUNT],
            identity: String::new(),
        }
    }

    /// Fresh session with a pre-filled identity label.
    pub fn with_identity(label: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_identity(label);
        state
    }

    /// Set `role`'s selection to `level`, replacing any earlier choice.
    ///
    /// Callers must only pass levels drawn from `role.levels()`; anything
    /// else is a programming error. It trips a debug assertion and is
    /// otherwise ignored so the call stays total.
    pub fn select_level(&mut self, role: Role, level: u8) {
        debug_assert!(
            role.has_level(level),
            "level {level} is not defined for role {role}"
        );
        if !role.has_level(level) {
            tracing::warn!(%role, level, "ignoring selection of undefined level");
            return;
        }
        tracing::debug!(%role, level, "level selected");
        self.selections.insert(role, LevelSelection::Level(level));
    }

    /// Flip the completion flag at `index` on `category`'s board.
    ///
    /// `index` must be in `0..CHECKLIST_LEN`; out-of-range indices trip a
    /// debug assertion and are otherwise ignored.
    pub fn toggle_item(&mut self, category: CategoryId, index: usize) {
        debug_assert!(
            index < CHECKLIST_LEN,
            "checklist index {index} out of range for {category}"
        );
        match self.checklists[category.index()].get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                tracing::debug!(%category, index, checked = *flag, "checklist item toggled");
            }
            None => {
                tracing::warn!(%category, index, "ignoring toggle of undefined checklist item");
            }
        }
    }

    /// Replace the identity label verbatim. No trimming, no validation.
    pub fn set_identity(&mut self, label: impl Into<String>) {
        self.identity = label.into();
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn selection(&self, role: Role) -> LevelSelection {
        self.selections.get(&role).copied().unwrap_or_default()
    }

    /// The selected level as a number, 0 when the role is unstarted.
    pub fn selected_level(&self, role: Role) -> u8 {
        self.selection(role).as_number()
    }

    pub fn flags(&self, category: CategoryId) -> &ChecklistFlags {
        &self.checklists[category.index()]
    }

    pub fn is_checked(&self, category: CategoryId, index: usize) -> bool {
        self.flags(category).get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_session_is_unstarted_and_empty() {
        let state = AssessmentState::new();
        for role in Role::ALL {
            assert_eq!(state.selection(role), LevelSelection::Unstarted);
            assert_eq!(state.selected_level(role), 0);
        }
        for category in CategoryId::ALL {
            assert_eq!(state.flags(category), &[false; CHECKLIST_LEN]);
        }
        assert_eq!(state.identity(), "");
    }

    #[test]
    fn select_level_replaces_previous_choice() {
        let mut state = AssessmentState::new();
        state.select_level(Role::Teacher, 6);
        state.select_level(Role::Teacher, 2);
        assert_eq!(state.selection(Role::Teacher), LevelSelection::Level(2));
        assert_eq!(state.selection(Role::Librarian), LevelSelection::Unstarted);
    }

    #[test]
    fn level_one_is_distinct_from_unstarted() {
        let mut state = AssessmentState::new();
        state.select_level(Role::Principal, 1);
        assert!(state.selection(Role::Principal).is_started());
        assert_ne!(state.selection(Role::Principal), LevelSelection::Unstarted);
    }

    #[test]
    fn toggle_flips_only_the_addressed_flag() {
        let mut state = AssessmentState::new();
        state.toggle_item(CategoryId::Culture, 5);
        assert!(state.is_checked(CategoryId::Culture, 5));
        assert_eq!(
            state.flags(CategoryId::Culture).iter().filter(|f| **f).count(),
            1
        );
        for other in [CategoryId::Mik, CategoryId::Reading, CategoryId::Democracy] {
            assert_eq!(state.flags(other), &[false; CHECKLIST_LEN]);
        }
    }

    #[test]
    fn identity_is_stored_verbatim() {
        let mut state = AssessmentState::new();
        state.set_identity("  Exempel skola \t");
        assert_eq!(state.identity(), "  Exempel skola \t");
    }

    #[test]
    fn with_identity_prefills_label() {
        let state = AssessmentState::with_identity("Norra skolan");
        assert_eq!(state.identity(), "Norra skolan");
        assert_eq!(state.selected_level(Role::Librarian), 0);
    }
}
