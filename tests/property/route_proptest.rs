//! Property-based tests for route classification

use proptest::prelude::*;
use sportshub::backend::middleware::{RouteClass, RouteClassifier};

proptest! {
    #[test]
    fn test_protected_prefix_extensions_are_protected(suffix in "[a-z0-9/]{0,20}") {
        let classifier = RouteClassifier::default();
        let path = format!("/admin{}", suffix);
        prop_assert_eq!(classifier.classify(&path), RouteClass::Protected);
    }

    #[test]
    fn test_root_does_not_cover_other_paths(segment in "[a-z]{1,12}") {
        let classifier = RouteClassifier::new(vec!["/".to_string()], vec![]);
        let path = format!("/{}", segment);
        prop_assert_eq!(classifier.classify(&path), RouteClass::Unspecified);
    }

    #[test]
    fn test_public_checked_before_protected(suffix in "[a-z]{0,10}") {
        let classifier = RouteClassifier::new(
            vec!["/shared".to_string()],
            vec!["/shared".to_string()],
        );
        let path = format!("/shared{}", suffix);
        prop_assert_eq!(classifier.classify(&path), RouteClass::Public);
    }
}
