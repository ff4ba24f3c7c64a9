/// Property-based tests for secret generation
use proptest::prelude::*;

use crate::domain::rules::REQUIRED_COUNT_RANGE;
use crate::domain::{test_prelude, CombinationGenerator};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: neighbouring steps never share a direction.
    #[test]
    fn prop_directions_alternate(seed in any::<u64>(), step_count in 1usize..=16) {
        let lock = CombinationGenerator::new(Some(seed)).generate(step_count);
        prop_assert_eq!(lock.steps().len(), step_count);
        for pair in lock.steps().windows(2) {
            prop_assert_ne!(pair[0].required_direction, pair[1].required_direction);
        }
    }

    /// Property: every count is in 1..=9 and the cursor starts at the beginning.
    #[test]
    fn prop_counts_in_range(seed in any::<u64>(), step_count in 1usize..=16) {
        let lock = CombinationGenerator::new(Some(seed)).generate(step_count);
        for step in lock.steps() {
            prop_assert!(REQUIRED_COUNT_RANGE.contains(&step.required_count),
                "count {} out of range", step.required_count);
        }
        prop_assert_eq!(lock.cursor(), (0, 0));
        prop_assert!(!lock.is_solved());
    }
}
