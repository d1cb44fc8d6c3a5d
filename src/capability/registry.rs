//! Build-then-freeze capability registry.
//!
//! The registry maps `(operation, argument-type signature)` pairs to
//! handlers. Declaring an operation *tryable* installs the universal
//! fallback for it: any call whose argument types no specific handler
//! covers returns `Failure(NotImplemented)` instead of crashing. Feature
//! presence is therefore discoverable purely by attempting the call -
//! there is no separate "has feature X" flag to fall out of sync with
//! the implementation.
//!
//! Registration happens only on [`CapabilityRegistryBuilder`], at
//! program or library initialization; [`build`](CapabilityRegistryBuilder::build)
//! freezes the entries into an immutable [`CapabilityRegistry`], so
//! resolution for a given key never changes afterwards and concurrent
//! lookups need no synchronization.

use std::any::Any;
use std::collections::HashMap;

use static_assertions::assert_impl_all;

use super::args::ArgList;
use super::error::CapabilityError;
use super::signature::{OperationId, Signature};
use crate::outcome::Outcome;

/// The outcome of a registry call: a type-erased success value, or a
/// structured capability failure.
pub type CapabilityOutcome = Outcome<Box<dyn Any>, CapabilityError>;

type Handler = Box<dyn Fn(&mut ArgList) -> CapabilityOutcome + Send + Sync>;

#[derive(Default)]
struct OperationEntry {
    handlers: Vec<(Signature, Handler)>,
}

/// Accumulates operation declarations and handlers, then freezes them
/// into a [`CapabilityRegistry`].
///
/// # Examples
///
/// ```rust
/// use attempt::capability::{ArgList, CapabilityRegistryBuilder, Signature};
/// use attempt::outcome::Outcome;
///
/// let registry = CapabilityRegistryBuilder::new()
///     .declare_tryable("length")
///     .register("length", Signature::of::<(String,)>(), |args| {
///         let text = args.take::<String>(0).expect("signature-checked");
///         Outcome::success(Box::new(text.len()) as Box<dyn std::any::Any>)
///     })
///     .build();
///
/// assert!(registry.is_tryable("length"));
/// ```
#[derive(Default)]
pub struct CapabilityRegistryBuilder {
    operations: HashMap<OperationId, OperationEntry>,
}

impl CapabilityRegistryBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an operation as tryable, installing the universal
    /// fallback for every argument-type signature not otherwise covered.
    pub fn declare_tryable(mut self, operation: impl Into<OperationId>) -> Self {
        self.operations.entry(operation.into()).or_default();
        self
    }

    /// Registers a specific handler for an argument-type signature.
    ///
    /// Registering a handler implies the operation is tryable: a
    /// specific handler cannot exist without the fallback backing it.
    pub fn register<H>(
        mut self,
        operation: impl Into<OperationId>,
        signature: Signature,
        handler: H,
    ) -> Self
    where
        H: Fn(&mut ArgList) -> CapabilityOutcome + Send + Sync + 'static,
    {
        self.operations
            .entry(operation.into())
            .or_default()
            .handlers
            .push((signature, Box::new(handler)));
        self
    }

    /// Freezes the accumulated entries into an immutable registry.
    ///
    /// Handlers for each operation are ordered most-specific-first;
    /// among equal specificity, registration order is preserved.
    pub fn build(self) -> CapabilityRegistry {
        let operations = self
            .operations
            .into_iter()
            .map(|(operation, mut entry)| {
                entry
                    .handlers
                    .sort_by_key(|(signature, _)| std::cmp::Reverse(signature.specificity()));
                (operation, entry)
            })
            .collect();
        CapabilityRegistry { operations }
    }
}

/// An immutable `(operation, signature) -> handler` table with a
/// guaranteed fallback for every declared operation.
///
/// Obtained from [`CapabilityRegistryBuilder::build`]; entries persist,
/// unchanged, for the registry's lifetime.
///
/// # Examples
///
/// ```rust
/// use attempt::capability::{ArgList, CapabilityRegistryBuilder};
///
/// let registry = CapabilityRegistryBuilder::new()
///     .declare_tryable("length")
///     .build();
///
/// // No handler covers (i32), so the fallback answers.
/// let mut args = ArgList::of((7_i32,));
/// let outcome = registry.invoke("length", &mut args);
/// let error = outcome.unwrap_failure();
/// assert!(error.is_not_implemented());
/// ```
pub struct CapabilityRegistry {
    operations: HashMap<OperationId, OperationEntry>,
}

impl CapabilityRegistry {
    /// Reports whether the operation was declared through this registry.
    ///
    /// A property of the declaration, independent of whether any
    /// specific handler covers a given call's argument types.
    #[inline]
    pub fn is_tryable(&self, operation: impl Into<OperationId>) -> bool {
        self.operations.contains_key(&operation.into())
    }

    /// Resolves and calls the handler for the operation and argument
    /// types, most-specific-signature-first.
    ///
    /// Never panics for missing coverage: an uncovered signature of a
    /// declared operation yields `Failure(NotImplemented)`, and an
    /// undeclared operation yields `Failure(UnknownOperation)`.
    pub fn invoke(
        &self,
        operation: impl Into<OperationId>,
        args: &mut ArgList,
    ) -> CapabilityOutcome {
        let operation = operation.into();
        let Some(entry) = self.operations.get(&operation) else {
            return Outcome::failure(CapabilityError::UnknownOperation { operation });
        };
        for (signature, handler) in &entry.handlers {
            if signature.matches(args.type_ids()) {
                return handler(args);
            }
        }
        Outcome::failure(CapabilityError::NotImplemented {
            operation,
            arguments: args.describe(),
        })
    }
}

// Frozen registries are shared across threads without locking.
assert_impl_all!(CapabilityRegistry: Send, Sync);
