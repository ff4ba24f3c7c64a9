/// Property-based tests for step matching
use proptest::prelude::*;

use crate::domain::test_state_helpers::{matcher_with, solving_turns};
use crate::domain::{test_gens, test_prelude, TurnOutcome};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: correct turns strictly advance the cursor until Unlocked.
    #[test]
    fn prop_correct_turns_are_monotonic(lock in test_gens::alternating_lock()) {
        let turns = solving_turns(&lock);
        let mut m = matcher_with(lock);
        let last = turns.len() - 1;

        for (i, d) in turns.into_iter().enumerate() {
            let before = m.state().cursor();
            let outcome = m.check_input(d).unwrap();
            if i == last {
                prop_assert_eq!(outcome, TurnOutcome::Unlocked);
            } else {
                prop_assert_eq!(outcome, TurnOutcome::Progressing);
                prop_assert!(m.state().cursor() > before,
                    "cursor {:?} did not advance past {:?}", m.state().cursor(), before);
            }
        }
    }

    /// Property: a wrong turn returns Wrong and never mutates, wherever it lands.
    #[test]
    fn prop_wrong_turn_never_mutates(
        lock in test_gens::alternating_lock(),
        prefix_len in 0usize..64,
    ) {
        let turns = solving_turns(&lock);
        let mut m = matcher_with(lock);
        // Stop short of unlocking so there is always an active step.
        for d in turns.iter().take(prefix_len.min(turns.len() - 1)) {
            m.check_input(*d).unwrap();
        }

        let before = m.state().clone();
        let expected = before.active_step().unwrap().required_direction;
        prop_assert_eq!(m.check_input(expected.opposite()).unwrap(), TurnOutcome::Wrong);
        prop_assert_eq!(m.state(), &before);
    }

    /// Property: progress never sits at a step boundary.
    #[test]
    fn prop_progress_below_requirement(
        lock in test_gens::alternating_lock(),
        turns in test_gens::turns(80),
    ) {
        let mut m = matcher_with(lock);
        for d in turns {
            if m.state().is_solved() {
                break;
            }
            m.check_input(d).unwrap();
            if let Some(step) = m.state().active_step() {
                prop_assert!(m.state().progress_in_active_step() < step.required_count);
            }
        }
    }
}
