//! Property tests for fragment ordering.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rulemerge::domain::policies::{locale_cmp, OrderingPolicy, DEFAULT_PRIORITY};

fn fragment_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(DEFAULT_PRIORITY).prop_map(str::to_string),
        "[A-Za-z][A-Za-z0-9_-]{0,8}\\.mdc",
    ]
}

fn fragment_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(fragment_name(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the order contains every input name exactly once.
    #[test]
    fn property_sort_is_a_permutation(names in fragment_set()) {
        let outcome = OrderingPolicy::default().sort(names.iter());

        prop_assert_eq!(outcome.order.len(), names.len());
        let sorted: BTreeSet<String> = outcome.order.iter().cloned().collect();
        prop_assert_eq!(sorted, names);
    }

    /// PROPERTY: listed names come first, in priority-list order.
    #[test]
    fn property_priority_names_first(names in fragment_set()) {
        let policy = OrderingPolicy::default();
        let outcome = policy.sort(names.iter());

        let listed = outcome.order.iter().take_while(|n| policy.is_listed(n)).count();
        prop_assert!(outcome.order[listed..].iter().all(|n| !policy.is_listed(n)));

        let expected: Vec<&String> = policy
            .priority()
            .iter()
            .filter(|p| names.contains(*p))
            .collect();
        let actual: Vec<&String> = outcome.order[..listed].iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: the unlisted tail is ascending and reported as unlisted.
    #[test]
    fn property_unlisted_tail_is_alphabetical(names in fragment_set()) {
        let policy = OrderingPolicy::default();
        let outcome = policy.sort(names.iter());

        let tail: Vec<&String> = outcome.order.iter().filter(|n| !policy.is_listed(n)).collect();
        for pair in tail.windows(2) {
            prop_assert_ne!(locale_cmp(pair[0], pair[1]), std::cmp::Ordering::Greater);
        }
        let unlisted: Vec<&String> = outcome.unlisted.iter().collect();
        prop_assert_eq!(unlisted, tail);
    }

    /// PROPERTY: sorting an already sorted order changes nothing.
    #[test]
    fn property_sort_is_idempotent(names in fragment_set()) {
        let policy = OrderingPolicy::default();
        let once = policy.sort(names.iter()).order;
        let twice = policy.sort(once.iter()).order;
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: the base flag matches whether the base name was given.
    #[test]
    fn property_base_missing_flag(names in fragment_set()) {
        let outcome = OrderingPolicy::default().sort(names.iter());
        prop_assert_eq!(outcome.base_missing, !names.contains("base.mdc"));
    }

    /// PROPERTY: the comparison is a total order.
    #[test]
    fn property_locale_cmp_is_antisymmetric(a in "[A-Za-z]{0,6}", b in "[A-Za-z]{0,6}") {
        prop_assert_eq!(locale_cmp(&a, &b), locale_cmp(&b, &a).reverse());
        prop_assert_eq!(locale_cmp(&a, &b) == std::cmp::Ordering::Equal, a == b);
    }
}
