//! Tests for tryable dispatch through the capability registry.
//!
//! An operation declared tryable always resolves: either a specific
//! handler covers the argument types, or the universal fallback answers
//! with a structured NotImplemented failure the caller can probe for.

#![cfg(feature = "capability")]

use std::any::Any;

use attempt::capability::{
    ArgList, CapabilityError, CapabilityOutcome, CapabilityRegistry, CapabilityRegistryBuilder,
    Signature, Slot,
};
use attempt::outcome::Outcome;
use rstest::rstest;

fn boxed<T: Any>(value: T) -> Box<dyn Any> {
    Box::new(value)
}

fn length_registry() -> CapabilityRegistry {
    CapabilityRegistryBuilder::new()
        .declare_tryable("length")
        .register("length", Signature::of::<(String,)>(), |args| {
            let text = args.take::<String>(0).expect("signature-checked");
            Outcome::success(boxed(text.chars().count()))
        })
        .build()
}

// =============================================================================
// Tryable Declaration
// =============================================================================

#[rstest]
fn declared_operation_is_tryable_regardless_of_coverage() {
    let registry = CapabilityRegistryBuilder::new()
        .declare_tryable("length")
        .build();
    assert!(registry.is_tryable("length"));
}

#[rstest]
fn registering_a_handler_implies_tryable() {
    let registry = length_registry();
    assert!(registry.is_tryable("length"));
}

#[rstest]
fn undeclared_operation_is_not_tryable() {
    let registry = length_registry();
    assert!(!registry.is_tryable("width"));
}

// =============================================================================
// Resolution
// =============================================================================

#[rstest]
fn covered_signature_runs_the_specific_handler() {
    let registry = length_registry();
    let mut args = ArgList::of(("four".to_string(),));
    let outcome = registry.invoke("length", &mut args);
    let length = *outcome.unwrap().downcast::<usize>().expect("usize result");
    assert_eq!(length, 4);
}

#[rstest]
fn uncovered_signature_yields_not_implemented_not_a_crash() {
    let registry = length_registry();
    let mut args = ArgList::of((vec![1, 2, 3],));
    let error = registry.invoke("length", &mut args).unwrap_failure();
    assert!(error.is_not_implemented());
    assert_eq!(error.operation().name(), "length");
}

#[rstest]
fn undeclared_operation_yields_unknown_operation_failure() {
    let registry = length_registry();
    let mut args = ArgList::of((1_i32,));
    let error = registry.invoke("width", &mut args).unwrap_failure();
    assert!(!error.is_not_implemented());
    assert!(matches!(error, CapabilityError::UnknownOperation { .. }));
}

#[rstest]
fn more_specific_signature_wins_over_wildcard() {
    let registry = CapabilityRegistryBuilder::new()
        .register("describe", Signature::from_slots(vec![Slot::any()]), |_| {
            Outcome::success(boxed("anything"))
        })
        .register("describe", Signature::of::<(i32,)>(), |_| {
            Outcome::success(boxed("integer"))
        })
        .build();

    let mut args = ArgList::of((7_i32,));
    let outcome = registry.invoke("describe", &mut args);
    let label = *outcome.unwrap().downcast::<&str>().expect("&str result");
    assert_eq!(label, "integer");

    let mut args = ArgList::of(("text".to_string(),));
    let outcome = registry.invoke("describe", &mut args);
    let label = *outcome.unwrap().downcast::<&str>().expect("&str result");
    assert_eq!(label, "anything");
}

#[rstest]
fn not_implemented_failure_describes_the_arguments() {
    let registry = length_registry();
    let mut args = ArgList::of((7_u8,));
    let error = registry.invoke("length", &mut args).unwrap_failure();
    match error {
        CapabilityError::NotImplemented { arguments, .. } => {
            assert_eq!(arguments, "(u8)");
        }
        CapabilityError::UnknownOperation { .. } => panic!("expected NotImplemented"),
    }
}

// =============================================================================
// Probing Scenario: fall back to counting by iteration
// =============================================================================

fn length_or_count(registry: &CapabilityRegistry, values: Vec<i32>) -> CapabilityOutcome {
    let mut args = ArgList::of((values.clone(),));
    registry
        .invoke("length", &mut args)
        .or_else(|error| {
            if error.is_not_implemented() {
                Outcome::success(boxed(values.iter().count()))
            } else {
                Outcome::failure(error)
            }
        })
}

#[rstest]
fn probing_caller_recovers_with_generic_strategy() {
    let registry = length_registry();
    let outcome = length_or_count(&registry, vec![10, 20, 30]);
    let count = *outcome.unwrap().downcast::<usize>().expect("usize result");
    assert_eq!(count, 3);
}
