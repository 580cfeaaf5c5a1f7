//! Property tests for the derivation rules over arbitrary sessions.

use proptest::prelude::*;
use resan_core::AssessmentState;
use resan_core::CHECKLIST_LEN;
use resan_core::CategoryId;
use resan_core::Role;
use resan_core::progress::category_progress;
use resan_core::progress::is_reached;
use resan_core::progress::overall_role_ratio;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = CategoryId> {
    prop::sample::select(CategoryId::ALL.to_vec())
}

proptest! {
    #[test]
    fn selecting_a_level_reaches_it_and_not_the_next(role in role_strategy(), pick in 0usize..11) {
        let levels = role.levels();
        let level = levels[pick % levels.len()].level;
        let mut state = AssessmentState::new();
        state.select_level(role, level);

        prop_assert!(is_reached(&state, role, level));
        if role.has_level(level + 1) {
            prop_assert!(!is_reached(&state, role, level + 1));
        }
        for lower in 1..level {
            prop_assert!(is_reached(&state, role, lower));
        }
    }

    #[test]
    fn progress_is_six_and_a_quarter_per_checked_item(
        category in category_strategy(),
        mask in prop::collection::vec(any::<bool>(), CHECKLIST_LEN),
    ) {
        let mut state = AssessmentState::new();
        for (idx, _) in mask.iter().enumerate().filter(|(_, set)| **set) {
            state.toggle_item(category, idx);
        }
        let k = mask.iter().filter(|set| **set).count();
        prop_assert_eq!(category_progress(&state, category), 6.25 * k as f64);
    }

    #[test]
    fn double_toggle_restores_flag_and_progress(
        category in category_strategy(),
        prefix in prop::collection::vec(0usize..CHECKLIST_LEN, 0..32),
        idx in 0usize..CHECKLIST_LEN,
    ) {
        let mut state = AssessmentState::new();
        for i in prefix {
            state.toggle_item(category, i);
        }
        let before_flag = state.is_checked(category, idx);
        let before_progress = category_progress(&state, category);

        state.toggle_item(category, idx);
        state.toggle_item(category, idx);

        prop_assert_eq!(state.is_checked(category, idx), before_flag);
        prop_assert_eq!(category_progress(&state, category), before_progress);
    }

    #[test]
    fn ratio_stays_within_unit_interval(role in role_strategy(), pick in 0usize..11) {
        let levels = role.levels();
        let level = levels[pick % levels.len()].level;
        let mut state = AssessmentState::new();
        state.select_level(role, level);
        let ratio = overall_role_ratio(&state, role);
        prop_assert!(ratio > 0.0 && ratio <= 1.0);
        prop_assert_eq!(ratio, f64::from(level) / f64::from(role.max_level()));
    }
}

#[test]
fn top_level_yields_full_ratio_for_every_role() {
    let mut state = AssessmentState::new();
    state.select_level(Role::Librarian, 11);
    state.select_level(Role::Teacher, 8);
    state.select_level(Role::Principal, 8);
    for role in Role::ALL {
        assert_eq!(overall_role_ratio(&state, role), 1.0, "{role}");
    }
}

#[test]
fn categories_are_independent_of_roles() {
    let mut state = AssessmentState::new();
    state.select_level(Role::Librarian, 5);
    state.toggle_item(CategoryId::Democracy, 0);
    state.toggle_item(CategoryId::Democracy, 3);
    state.toggle_item(CategoryId::Democracy, 7);

    assert!((overall_role_ratio(&state, Role::Librarian) - 5.0 / 11.0).abs() < 1e-12);
    assert_eq!(category_progress(&state, CategoryId::Democracy), 18.75);
    assert_eq!(category_progress(&state, CategoryId::Mik), 0.0);
    assert_eq!(overall_role_ratio(&state, Role::Teacher), 0.0);
}
