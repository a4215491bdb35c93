//! Property-based tests for path handling.
//!
//! Note: The standardize module already has property tests for collapsing.
//! This module focuses on construction, composition and decomposition.

#![cfg(unix)]

use super::types::Path;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| Path::new(format!("/{}", parts.join("/"))))
}

fn relative_path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| Path::new(parts.join("/")))
}

fn any_path_strategy() -> impl Strategy<Value = Path> {
    prop_oneof![absolute_path_strategy(), relative_path_strategy()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Construction stores the string unchanged
    #[test]
    fn path_construction_preserves_raw(raw in ".*") {
        let path = Path::new(raw.clone());
        prop_assert_eq!(path.as_str(), raw.as_str());
    }

    // Joining never doubles or drops the separator
    #[test]
    fn path_join_single_separator(
        base in absolute_path_strategy(),
        name in path_component_strategy(),
        trailing in any::<bool>(),
        leading in any::<bool>(),
    ) {
        let lhs = if trailing { Path::new(format!("{base}/")) } else { base.clone() };
        let rhs = if leading { format!("/{name}") } else { name.clone() };
        prop_assert_eq!(lhs + rhs.as_str(), Path::new(format!("{base}/{name}")));
    }

    // The parent of a join is the left operand
    #[test]
    fn path_parent_of_join(base in any_path_strategy(), name in path_component_strategy()) {
        prop_assert_eq!((&base + name.as_str()).parent(), base);
    }

    // The last prefix is the path itself for well-formed paths
    #[test]
    fn path_last_prefix_is_whole(path in any_path_strategy()) {
        let count = path.components().len();
        prop_assert_eq!(path.prefix(count - 1), path.clone());
        prop_assert!(path.get_prefix(count).is_none());
    }

    // Absolute paths start with the separator component; relative ones do not
    #[test]
    fn path_root_component_iff_absolute(path in any_path_strategy()) {
        let starts_with_root = path.components().first() == Some(&Path::root());
        prop_assert_eq!(starts_with_root, path.is_absolute());
    }

    // Each prefix has exactly the leading components
    #[test]
    fn path_prefix_components(path in any_path_strategy(), index in 0..8usize) {
        let components = path.components();
        match path.get_prefix(index) {
            Some(prefix) => prop_assert_eq!(prefix.components(), components[..=index].to_vec()),
            None => prop_assert!(index >= components.len()),
        }
    }

    // Replacing the extension changes only the extension
    #[test]
    fn path_with_extension(path in any_path_strategy(), ext in "[a-z]{1,5}") {
        let changed = path.with_extension(&ext);
        prop_assert_eq!(changed.extension(), ext.as_str());
        prop_assert_eq!(changed.parent(), path.parent());
    }
}
