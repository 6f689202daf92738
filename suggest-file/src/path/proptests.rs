//! Property-based tests for lexical path handling.

use super::normalize::{clean, expand_tilde, has_trailing_separator, join, split};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => "\\.[a-z]{1,6}",
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent
    #[test]
    fn clean_idempotent(path in relative_path_strategy()) {
        let once = clean(&path);
        prop_assert_eq!(clean(&once), once);
    }

    // Cleaned paths never contain "." components or empty segments
    #[test]
    fn cleaned_paths_have_no_dot_segments(path in relative_path_strategy()) {
        let cleaned = clean(&path).to_string_lossy().into_owned();
        if cleaned != "." {
            for segment in cleaned.split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
            }
        }
    }

    // Trailing separators survive tilde expansion
    #[test]
    fn tilde_keeps_trailing_separator(rest in "[a-z]{1,8}(/[a-z]{1,8}){0,3}/?") {
        let pattern = format!("~/{rest}");
        let expanded = expand_tilde(&pattern, Some(Path::new("/home/u"))).unwrap();
        prop_assert!(expanded.starts_with("/home/u/"));
        prop_assert_eq!(has_trailing_separator(&expanded), has_trailing_separator(&pattern));
    }

    // Splitting then joining a cleaned path gives it back
    #[test]
    fn split_join_roundtrip(path in relative_path_strategy()) {
        let cleaned = clean(&path);
        let (dir, name) = split(&cleaned);
        if name != ".." && cleaned != PathBuf::from(".") {
            prop_assert_eq!(join(&dir, &name), cleaned);
        }
    }
}
