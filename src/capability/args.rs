//! Type-erased argument lists for registry calls.
//!
//! Handlers receive their arguments through an [`ArgList`]: an ordered,
//! type-erased sequence that records each argument's `TypeId` and type
//! name at insertion. The registry matches the recorded types against
//! handler signatures; handlers recover concrete values with checked
//! downcasts.

use std::any::{Any, TypeId, type_name};

/// An ordered, type-erased argument list.
///
/// # Examples
///
/// ```rust
/// use attempt::capability::ArgList;
///
/// let mut args = ArgList::new().with(3_i32).with("label".to_string());
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get::<i32>(0), Some(&3));
/// assert_eq!(args.take::<String>(1), Some("label".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct ArgList {
    values: Vec<Option<Box<dyn Any>>>,
    type_ids: Vec<TypeId>,
    type_names: Vec<&'static str>,
}

impl ArgList {
    /// Creates an empty argument list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an argument list from a tuple of values.
    ///
    /// Supported for tuples of up to four values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::capability::ArgList;
    ///
    /// let args = ArgList::of((1_i32, "x".to_string()));
    /// assert_eq!(args.len(), 2);
    /// ```
    #[inline]
    pub fn of<Args: IntoArgList>(arguments: Args) -> Self {
        arguments.into_arg_list()
    }

    /// Appends an argument, recording its type.
    #[inline]
    pub fn with<T: Any>(mut self, value: T) -> Self {
        self.type_ids.push(TypeId::of::<T>());
        self.type_names.push(type_name::<T>());
        self.values.push(Some(Box::new(value)));
        self
    }

    /// Returns the number of arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_ids.len()
    }

    /// Returns `true` if the list holds no arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_ids.is_empty()
    }

    /// Returns a reference to the argument at `index`, if it exists, has
    /// type `T`, and has not been taken.
    #[inline]
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values
            .get(index)?
            .as_ref()?
            .downcast_ref::<T>()
    }

    /// Removes and returns the argument at `index`, if it exists, has
    /// type `T`, and has not already been taken.
    ///
    /// Taking does not shift the remaining arguments; their indices and
    /// recorded types stay stable.
    #[inline]
    pub fn take<T: Any>(&mut self, index: usize) -> Option<T> {
        let slot = self.values.get_mut(index)?;
        if slot.as_ref()?.is::<T>() {
            let boxed = slot.take()?;
            boxed.downcast::<T>().ok().map(|value| *value)
        } else {
            None
        }
    }

    /// Returns the recorded argument types, in order.
    #[inline]
    pub(crate) fn type_ids(&self) -> &[TypeId] {
        &self.type_ids
    }

    /// Renders a human-readable description of the argument types, used
    /// in `NotImplemented` failures.
    #[inline]
    pub fn describe(&self) -> String {
        let mut description = String::from("(");
        for (index, name) in self.type_names.iter().enumerate() {
            if index > 0 {
                description.push_str(", ");
            }
            description.push_str(name);
        }
        description.push(')');
        description
    }
}

/// Tuples of values convertible into an [`ArgList`].
pub trait IntoArgList {
    /// Builds the argument list, preserving tuple order.
    fn into_arg_list(self) -> ArgList;
}

impl IntoArgList for () {
    #[inline]
    fn into_arg_list(self) -> ArgList {
        ArgList::new()
    }
}

impl<A: Any> IntoArgList for (A,) {
    #[inline]
    fn into_arg_list(self) -> ArgList {
        ArgList::new().with(self.0)
    }
}

impl<A: Any, B: Any> IntoArgList for (A, B) {
    #[inline]
    fn into_arg_list(self) -> ArgList {
        ArgList::new().with(self.0).with(self.1)
    }
}

impl<A: Any, B: Any, C: Any> IntoArgList for (A, B, C) {
    #[inline]
    fn into_arg_list(self) -> ArgList {
        ArgList::new().with(self.0).with(self.1).with(self.2)
    }
}

impl<A: Any, B: Any, C: Any, D: Any> IntoArgList for (A, B, C, D) {
    #[inline]
    fn into_arg_list(self) -> ArgList {
        ArgList::new()
            .with(self.0)
            .with(self.1)
            .with(self.2)
            .with(self.3)
    }
}
