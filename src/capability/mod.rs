//! Capability probing ("tryable" dispatch).
//!
//! Generic code often wants to attempt an operation and react to its
//! absence rather than crash - count elements by iteration when a
//! collection has no length capability, say. This module provides the
//! registry behind that pattern:
//!
//! - [`CapabilityRegistryBuilder`] / [`CapabilityRegistry`]:
//!   build-then-freeze mapping from `(operation, argument-type
//!   signature)` to handlers, with a universal fallback per declared
//!   operation
//! - [`OperationId`], [`Signature`], [`Slot`]: the registry keys
//! - [`ArgList`]: type-erased arguments with recorded types
//! - [`CapabilityError`]: the structured `NotImplemented` /
//!   `UnknownOperation` failure kinds
//!
//! # Examples
//!
//! ```rust
//! use attempt::capability::{ArgList, CapabilityRegistryBuilder, Signature};
//! use attempt::outcome::Outcome;
//!
//! let registry = CapabilityRegistryBuilder::new()
//!     .declare_tryable("length")
//!     .register("length", Signature::of::<(String,)>(), |args| {
//!         let text = args.take::<String>(0).expect("signature-checked");
//!         Outcome::success(Box::new(text.len()) as Box<dyn std::any::Any>)
//!     })
//!     .build();
//!
//! // Covered signature: the real handler answers.
//! let mut args = ArgList::of(("four".to_string(),));
//! assert!(registry.invoke("length", &mut args).is_success());
//!
//! // Uncovered signature: the fallback answers with NotImplemented,
//! // and the caller falls back to a generic strategy.
//! let mut args = ArgList::of((vec![1, 2, 3],));
//! let outcome = registry.invoke("length", &mut args);
//! assert!(outcome.unwrap_failure().is_not_implemented());
//! ```

mod args;
mod error;
mod registry;
mod signature;

pub use args::{ArgList, IntoArgList};
pub use error::CapabilityError;
pub use registry::{CapabilityOutcome, CapabilityRegistry, CapabilityRegistryBuilder};
pub use signature::{OperationId, Signature, SignatureSpec, Slot};
