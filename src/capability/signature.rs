//! Operation identifiers and argument-type signatures.
//!
//! A registry entry is keyed by an [`OperationId`] plus a [`Signature`]
//! describing the argument types a handler accepts. A signature slot is
//! either an exact type or a wildcard; resolution prefers signatures with
//! more exact slots (see
//! [`CapabilityRegistry`](crate::capability::CapabilityRegistry)).

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// The name of a registered operation.
///
/// A lightweight copyable newtype over a static string, used as the
/// first half of every registry key.
///
/// # Examples
///
/// ```rust
/// use attempt::capability::OperationId;
///
/// let operation = OperationId::new("length");
/// assert_eq!(operation.name(), "length");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OperationId(&'static str);

impl OperationId {
    /// Creates an operation identifier from a static name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the operation name.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for OperationId {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self(name)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// One argument slot of a signature: an exact type or a wildcard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Slot {
    /// Matches exactly one concrete type; carries the type name for
    /// diagnostics.
    Exact(TypeId, &'static str),
    /// Matches any argument type.
    Any,
}

impl Slot {
    /// Creates an exact slot for the type `T`.
    #[inline]
    pub fn of<T: Any>() -> Self {
        Self::Exact(TypeId::of::<T>(), type_name::<T>())
    }

    /// Creates a wildcard slot.
    #[inline]
    pub const fn any() -> Self {
        Self::Any
    }

    #[inline]
    fn matches(self, actual: TypeId) -> bool {
        match self {
            Self::Exact(expected, _) => expected == actual,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(_, name) => formatter.write_str(name),
            Self::Any => formatter.write_str("_"),
        }
    }
}

/// An ordered argument-type signature.
///
/// The specificity of a signature is its number of exact slots; the
/// registry resolves most-specific-first.
///
/// # Examples
///
/// ```rust
/// use attempt::capability::{Signature, Slot};
///
/// let exact = Signature::of::<(i32, String)>();
/// let loose = Signature::from_slots(vec![Slot::of::<i32>(), Slot::any()]);
///
/// assert_eq!(exact.arity(), 2);
/// assert!(exact.specificity() > loose.specificity());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Signature {
    slots: Vec<Slot>,
}

impl Signature {
    /// Creates a signature from explicit slots.
    #[inline]
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Creates the empty (zero-argument) signature.
    #[inline]
    pub const fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an all-exact signature from a tuple of argument types.
    ///
    /// Supported for tuples of up to four types; use
    /// [`Signature::from_slots`] for longer or wildcard-bearing
    /// signatures.
    #[inline]
    pub fn of<Args: SignatureSpec>() -> Self {
        Args::signature()
    }

    /// Returns the number of argument slots.
    #[inline]
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of exact (non-wildcard) slots.
    #[inline]
    pub fn specificity(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Exact(_, _)))
            .count()
    }

    /// Reports whether the signature accepts the given argument types.
    #[inline]
    pub(crate) fn matches(&self, actual: &[TypeId]) -> bool {
        self.slots.len() == actual.len()
            && self
                .slots
                .iter()
                .zip(actual)
                .all(|(slot, type_id)| slot.matches(*type_id))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{slot}")?;
        }
        formatter.write_str(")")
    }
}

/// Tuples of argument types convertible into an all-exact [`Signature`].
pub trait SignatureSpec {
    /// Builds the signature for this tuple of types.
    fn signature() -> Signature;
}

impl SignatureSpec for () {
    #[inline]
    fn signature() -> Signature {
        Signature::empty()
    }
}

impl<A: Any> SignatureSpec for (A,) {
    #[inline]
    fn signature() -> Signature {
        Signature::from_slots(vec![Slot::of::<A>()])
    }
}

impl<A: Any, B: Any> SignatureSpec for (A, B) {
    #[inline]
    fn signature() -> Signature {
        Signature::from_slots(vec![Slot::of::<A>(), Slot::of::<B>()])
    }
}

impl<A: Any, B: Any, C: Any> SignatureSpec for (A, B, C) {
    #[inline]
    fn signature() -> Signature {
        Signature::from_slots(vec![Slot::of::<A>(), Slot::of::<B>(), Slot::of::<C>()])
    }
}

impl<A: Any, B: Any, C: Any, D: Any> SignatureSpec for (A, B, C, D) {
    #[inline]
    fn signature() -> Signature {
        Signature::from_slots(vec![
            Slot::of::<A>(),
            Slot::of::<B>(),
            Slot::of::<C>(),
            Slot::of::<D>(),
        ])
    }
}
