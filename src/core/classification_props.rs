//! Property-based tests for classification, uniqueness and routing codes.

use proptest::prelude::*;

use super::assignment::validate_routing_code;
use super::classifier::Classifier;
use super::taxonomy::{self, BUILTIN_TYPES};
use super::uniqueness::UniquenessValidator;
use crate::types::group::PRIMARY;
use crate::types::ChartError;

/// Strategy to pick one built-in `(type, parent)` entry.
fn builtin_entry() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(BUILTIN_TYPES.to_vec())
}

/// Strategy to generate a name that is neither a built-in type nor a root group.
fn novel_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,8})?".prop_filter("must be unknown", |n| {
        n != PRIMARY && !taxonomy::is_builtin(n) && !taxonomy::is_primary_group(n)
    })
}

/// Strategy to pick a root group.
fn root_group() -> impl Strategy<Value = &'static str> {
    prop::sample::select(taxonomy::PRIMARY_GROUPS.to_vec())
}

/// Strategy to generate a well-formed routing code.
fn routing_code() -> impl Strategy<Value = String> {
    "[A-Za-z]{4}0[A-Za-z0-9]{6}"
}

/// Strategy to pad a string with spaces and flip its case.
fn disguise(name: String) -> impl Strategy<Value = String> {
    (0usize..3, 0usize..3, any::<bool>()).prop_map(move |(left, right, upper)| {
        let cased = if upper {
            name.to_uppercase()
        } else {
            name.to_lowercase()
        };
        format!("{}{}{}", " ".repeat(left), cased, " ".repeat(right))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Built-in types resolve to their table parent whatever the registry holds.
    #[test]
    fn prop_builtin_parent_cannot_be_shadowed(
        (name, parent) in builtin_entry(),
        chosen in "[A-Z][a-z]{3,8}",
    ) {
        let mut classifier = Classifier::new();
        prop_assert!(classifier.register_if_absent(name, Some(chosen.as_str())).is_none());
        prop_assert_eq!(classifier.resolve_parent(name), parent);
    }

    /// Resolution is total: unknown names fall back to Primary.
    #[test]
    fn prop_unknown_type_resolves_to_primary(name in novel_name()) {
        let classifier = Classifier::new();
        prop_assert_eq!(classifier.resolve_parent(&name), PRIMARY);
    }

    /// Registering twice keeps the first parent and one entry.
    #[test]
    fn prop_registration_is_idempotent(
        name in novel_name(),
        first in root_group(),
        second in root_group(),
    ) {
        let mut classifier = Classifier::new();
        prop_assert!(classifier.register_if_absent(&name, Some(first)).is_some());
        prop_assert!(classifier.register_if_absent(&name, Some(second)).is_none());

        prop_assert_eq!(classifier.resolve_parent(&name), first);
        prop_assert_eq!(classifier.registry().len(), 1);
    }

    /// Whatever parent is chosen, a custom type hangs directly off a root.
    #[test]
    fn prop_custom_parent_is_always_a_root(
        name in novel_name(),
        chosen in prop_oneof![
            root_group().prop_map(str::to_string),
            builtin_entry().prop_map(|(n, _)| n.to_string()),
            novel_name(),
        ],
    ) {
        let mut classifier = Classifier::new();
        classifier.register_if_absent(&name, Some(chosen.as_str()));

        let parent = classifier.resolve_parent(&name);
        prop_assert!(parent == PRIMARY || taxonomy::is_primary_group(parent));
    }

    /// Filtering never reorders the unfiltered listing.
    #[test]
    fn prop_filter_preserves_order(filter in "[a-z]{1,3}") {
        let classifier = Classifier::new();
        let all: Vec<String> = classifier
            .list_assignable_types(None)
            .into_iter()
            .map(|t| t.name)
            .collect();
        let filtered: Vec<String> = classifier
            .list_assignable_types(Some(filter.as_str()))
            .into_iter()
            .map(|t| t.name)
            .collect();

        let expected: Vec<String> = all
            .into_iter()
            .filter(|n| n.to_lowercase().contains(&filter))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    /// Any case or padding variant of a stored name is a duplicate.
    #[test]
    fn prop_case_and_padding_variants_collide(
        candidate in "[A-Za-z]{3,12}".prop_flat_map(disguise),
    ) {
        let stored = candidate.trim().to_lowercase();
        let existing = vec![(1u32, stored.as_str())];
        let validator = UniquenessValidator::accounts();

        let is_duplicate = matches!(
            validator.validate(&candidate, existing.clone(), None),
            Err(ChartError::DuplicateName { .. })
        );
        prop_assert!(is_duplicate);
        prop_assert!(validator.validate(&candidate, existing, Some(1)).is_ok());
    }

    /// Well-formed routing codes pass in any case and come back upper-cased.
    #[test]
    fn prop_well_formed_routing_code_accepted(code in routing_code()) {
        let normalized = validate_routing_code(&code);
        prop_assert_eq!(normalized, Ok(Some(code.to_ascii_uppercase())));
    }

    /// Dropping or adding one character always breaks a routing code.
    #[test]
    fn prop_wrong_length_routing_code_rejected(
        code in routing_code(),
        extra in "[A-Z0-9]",
        shorten in any::<bool>(),
    ) {
        let mangled = if shorten {
            code[..code.len() - 1].to_string()
        } else {
            format!("{}{}", code, extra)
        };
        let is_violation = matches!(
            validate_routing_code(&mangled),
            Err(ChartError::FormatViolation { .. })
        );
        prop_assert!(is_violation);
    }
}
