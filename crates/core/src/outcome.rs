//! Outcome container for Railway-Oriented Programming.
//!
//! A computation that may fail carries its reason in the return type.
//! `Err` propagates through `map`/`chain` exactly as `Absent` does for
//! [`Optional`]; extraction goes through [`fold`](Outcome::fold), which
//! forces both branches to be handled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::optional::Optional;

/// A success value of type `T` or a failure reason of type `E`.
///
/// The reason is a descriptive value, not a caught panic. Instances are
/// immutable; every combinator consumes the receiver and returns a fresh
/// container.
///
/// # Examples
///
/// ```
/// use lift_core::Outcome;
///
/// let checked = Outcome::<i32, &str>::ok(2)
///     .map(|x| x * 10)
///     .chain(|x| {
///         if x > 100 {
///             Outcome::err("too big")
///         } else {
///             Outcome::ok(x)
///         }
///     });
/// assert_eq!(checked, Outcome::Ok(20));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Ok(T),
    /// The computation failed with a reason.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Lift a success value.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Lift a failure reason.
    pub const fn err(reason: E) -> Self {
        Self::Err(reason)
    }

    /// True if the computation succeeded.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// True if the computation failed.
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow both branches without consuming the container.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(reason) => Outcome::Err(reason),
        }
    }

    /// Transform the success value; `Err` passes through untouched.
    ///
    /// The variant is tested before `f` is evaluated, so a closure with
    /// side effects is provably skipped on the failure path.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(reason) => Outcome::Err(reason),
        }
    }

    /// Transform the failure reason; `Ok` passes through untouched.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Outcome<T, F2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(reason) => Outcome::Err(f(reason)),
        }
    }

    /// Transform with an outcome-producing closure, already flattened.
    pub fn chain<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(reason) => Outcome::Err(reason),
        }
    }

    /// Map both branches in a single operation.
    pub fn bimap<U, F2, F, EF>(self, ok_fn: F, err_fn: EF) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> U,
        EF: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_fn(value)),
            Self::Err(reason) => Outcome::Err(err_fn(reason)),
        }
    }

    /// Return the success value, or `default` on failure.
    #[must_use]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Return the success value, or produce one from the reason.
    ///
    /// `default` is not evaluated on the success path.
    #[must_use]
    pub fn get_or_else<F: FnOnce(E) -> T>(self, default: F) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(reason) => default(reason),
        }
    }

    /// Collapse both branches into a single value.
    ///
    /// The only extractor that observes the reason; argument order is
    /// failure handler first.
    pub fn fold<U, FE, FO>(self, on_err: FE, on_ok: FO) -> U
    where
        FE: FnOnce(E) -> U,
        FO: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(reason) => on_err(reason),
        }
    }

    /// Narrow to [`Optional`], discarding the reason.
    ///
    /// Lossy: there is no way back to the reason afterwards. Use
    /// [`into_optional_logged`](Self::into_optional_logged) to keep a
    /// trace of what was dropped.
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Present(value),
            Self::Err(_) => Optional::Absent,
        }
    }

    /// Observe the success value without consuming the container.
    pub fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe the failure reason without consuming the container.
    pub fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Err(ref reason) = self {
            f(reason);
        }
        self
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Narrow to [`Optional`], logging the discarded reason.
    pub fn into_optional_logged(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Present(value),
            Self::Err(reason) => {
                tracing::error!("operation failed: {reason}");
                Optional::Absent
            }
        }
    }

    /// Prefix the reason with a lazily-built context message.
    pub fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, context: F) -> Outcome<T, String> {
        self.map_err(|reason| format!("{}: {}", context(), reason))
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flatten one level of nesting.
    ///
    /// `chain(f)` agrees with `map(f).join()` for every container.
    pub fn join(self) -> Outcome<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(reason) => Outcome::Err(reason),
        }
    }
}
