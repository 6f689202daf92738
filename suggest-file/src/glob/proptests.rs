//! Property-based tests for glob splitting.

use super::split::{contains_meta, split_pattern};
use crate::path::normalize::{clean, split};
use proptest::prelude::*;
use std::path::PathBuf;

fn literal_component() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,10}".prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn glob_component() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just("**".to_string()),
        "[a-z]{0,4}\\*[a-z]{0,4}",
        "[a-z]{1,4}\\?",
        Just("{a,b}".to_string()),
        Just("[xyz]".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Without metacharacters the split is (parent, final component)
    #[test]
    fn literal_pattern_splits_into_parent_and_name(
        parts in prop::collection::vec(literal_component(), 1..6),
        absolute in any::<bool>(),
    ) {
        let pattern = if absolute { format!("/{}", parts.join("/")) } else { parts.join("/") };
        let (base, glob) = split_pattern(&pattern);
        let (dir, name) = split(&clean(&pattern));
        prop_assert_eq!(base, dir);
        prop_assert_eq!(glob, name.to_string_lossy().into_owned());
    }

    // The base is metacharacter-free and rejoining gives the cleaned pattern
    #[test]
    fn base_is_literal_and_recombines(
        literal in prop::collection::vec(literal_component(), 0..4),
        globbed in glob_component(),
        tail in prop::collection::vec(literal_component(), 0..3),
        absolute in any::<bool>(),
    ) {
        let mut parts = literal.clone();
        parts.push(globbed);
        parts.extend(tail);
        let joined = parts.join("/");
        let pattern = if absolute { format!("/{joined}") } else { joined };

        let (base, glob) = split_pattern(&pattern);
        let base_text = base.to_string_lossy().into_owned();

        prop_assert!(!contains_meta(&base_text));
        prop_assert!(contains_meta(&glob));
        prop_assert!(!base_text.is_empty());

        let recombined = if base == PathBuf::from(".") {
            PathBuf::from(&glob)
        } else {
            base.join(&glob)
        };
        prop_assert_eq!(recombined, clean(&pattern));
    }
}
