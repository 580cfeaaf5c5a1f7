//! Values derived from [`AssessmentState`] on every read.
//!
//! Nothing here is cached: the inputs are a handful of integers and flags,
//! so each render recomputes from the state it is given.

use crate::state::AssessmentState;
use crate::taxonomy::CHECKLIST_LEN;
use crate::taxonomy::CategoryId;
use crate::taxonomy::Role;

/// Whether `level` is at or below `role`'s selection. Reached levels are
/// highlighted cumulatively.
pub fn is_reached(state: &AssessmentState, role: Role, level: u8) -> bool {
    state.selected_level(role) >= level
}

/// Whether `level` is exactly the selected rung for `role`.
pub fn is_current(state: &AssessmentState, role: Role, level: u8) -> bool {
    state.selection(role).is_started() && state.selected_level(role) == level
}

/// Number of completed items on `category`'s board.
pub fn checked_count(state: &AssessmentState, category: CategoryId) -> usize {
    state.flags(category).iter().filter(|flag| **flag).count()
}

/// Completion percentage of `category`, in `[0, 100]`.
///
/// `count / 16` is an exact binary fraction, so every possible result
/// (multiples of 6.25, including 0 and 100) is exact.
pub fn category_progress(state: &AssessmentState, category: CategoryId) -> f64 {
    checked_count(state, category) as f64 * 100.0 / CHECKLIST_LEN as f64
}

/// Number of fully filled quartiles of `category`'s progress bar (0..=4).
pub fn completed_quarters(state: &AssessmentState, category: CategoryId) -> usize {
    checked_count(state, category) / (CHECKLIST_LEN / 4)
}

pub fn is_started(state: &AssessmentState, category: CategoryId) -> bool {
    checked_count(state, category) > 0
}

pub fn is_complete(state: &AssessmentState, category: CategoryId) -> bool {
    checked_count(state, category) == CHECKLIST_LEN
}

/// Selected level over the role's own maximum level, in `[0, 1]`.
///
/// Roles have scales of different lengths, so the denominator must be the
/// role's own maximum.
pub fn overall_role_ratio(state: &AssessmentState, role: Role) -> f64 {
    let max = role.max_level();
    if max == 0 {
        return 0.0;
    }
    f64::from(state.selected_level(role)) / f64::from(max)
}
