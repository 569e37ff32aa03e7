//! Optional container: a closed sum type for values that may be absent.
//!
//! Absence is data, not a control-flow fault. Combinators never panic and
//! never invoke a caller-supplied closure once the chain has reached
//! `Absent`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Fallible};
use crate::outcome::Outcome;

/// A value of type `T` that may be absent.
///
/// `Optional` replaces sentinel checks with an explicit closed sum type,
/// so "present but falsy" (an empty string, zero) is distinguished from
/// "absent". Instances are immutable: every combinator consumes the
/// receiver and returns a fresh container.
///
/// # Examples
///
/// ```
/// use lift_core::Optional;
///
/// let greeting = Optional::of("John")
///     .map(str::to_uppercase)
///     .get_or_else(|| "?".to_string());
/// assert_eq!(greeting, "JOHN");
///
/// let fallback: String = Optional::empty()
///     .map(|s: &str| s.to_uppercase())
///     .get_or_else(|| "?".to_string());
/// assert_eq!(fallback, "?");
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// Lift a value into the container.
    ///
    /// Rust values cannot be implicitly null, so this always constructs
    /// `Present`; the host sentinel is handled by
    /// [`from_nullable`](crate::boundary::from_nullable).
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent container.
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// True if a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// True if no value is present.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the contained value without consuming the container.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Transform the contained value; `Absent` passes through untouched.
    ///
    /// The variant is tested before `f` is evaluated, so a closure with
    /// side effects is provably skipped on the absent path.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Transform with a container-producing closure, already flattened.
    pub fn chain<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keep the value only if `pred` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, pred: P) -> Self {
        match self {
            Self::Present(value) => {
                if pred(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Return the contained value, or `default` when absent.
    ///
    /// For an expensive fallback use [`get_or_else`](Self::get_or_else),
    /// which defers evaluation.
    #[must_use]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Return the contained value, or produce a default when absent.
    ///
    /// `default` is not evaluated on the present path.
    #[must_use]
    pub fn get_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Return `self` when present, otherwise the container produced by `f`.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => f(),
        }
    }

    /// Surface absence as a typed failure.
    ///
    /// `make_err` runs only on the absent path.
    pub fn to_outcome<E, F: FnOnce() -> E>(self, make_err: F) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Ok(value),
            Self::Absent => Outcome::Err(make_err()),
        }
    }

    /// Surface absence as the canonical [`Error::Absent`] reason.
    pub fn require(self, context: impl Into<String>) -> Fallible<T> {
        self.to_outcome(|| Error::absent(context))
    }

    /// Observe the contained value without consuming the container.
    pub fn tap_present<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Present(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe absence without consuming the container.
    pub fn tap_absent<F: FnOnce()>(self, f: F) -> Self {
        if self.is_absent() {
            f();
        }
        self
    }
}

impl<T> Optional<Optional<T>> {
    /// Flatten one level of nesting.
    ///
    /// `chain(f)` agrees with `map(f).join()` for every container.
    pub fn join(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_of_is_present() {
        let opt = Optional::of(5);
        assert!(opt.is_present());
        assert!(!opt.is_absent());
    }

    #[test]
    fn test_empty_is_absent() {
        let opt: Optional<i32> = Optional::empty();
        assert!(opt.is_absent());
    }

    #[test]
    fn test_default_is_absent() {
        let opt: Optional<i32> = Optional::default();
        assert_eq!(opt, Optional::Absent);
    }

    #[test]
    fn test_map_transforms_present() {
        let upper = Optional::of("John").map(str::to_uppercase);
        assert_eq!(upper, Optional::Present("JOHN".to_string()));
    }

    #[test]
    fn test_map_skips_closure_when_absent() {
        let mut called = false;
        let opt: Optional<i32> = Optional::empty().map(|v: i32| {
            called = true;
            v + 1
        });
        assert!(!called);
        assert_eq!(opt, Optional::Absent);
    }

    #[test]
    fn test_chain_flattens() {
        let opt = Optional::of(5).chain(|n| {
            if n > 0 {
                Optional::of(n)
            } else {
                Optional::empty()
            }
        });
        assert_eq!(opt, Optional::Present(5));
    }

    #[test]
    fn test_chain_skips_closure_when_absent() {
        let mut called = false;
        let opt: Optional<i32> = Optional::empty().chain(|v| {
            called = true;
            Optional::of(v)
        });
        assert!(!called);
        assert!(opt.is_absent());
    }

    #[test]
    fn test_join_present_present() {
        let nested = Optional::of(Optional::of(7));
        assert_eq!(nested.join(), Optional::Present(7));
    }

    #[test]
    fn test_join_present_absent() {
        let nested: Optional<Optional<i32>> = Optional::of(Optional::empty());
        assert_eq!(nested.join(), Optional::Absent);
    }

    #[test]
    fn test_join_absent() {
        let nested: Optional<Optional<i32>> = Optional::empty();
        assert_eq!(nested.join(), Optional::Absent);
    }

    #[test]
    fn test_get_or_else_defers_default() {
        let mut evaluated = false;
        let value = Optional::of(1).get_or_else(|| {
            evaluated = true;
            0
        });
        assert!(!evaluated);
        assert_eq!(value, 1);
    }

    #[test]
    fn test_get_or_else_on_absent() {
        let value: i32 = Optional::empty().get_or_else(|| 9);
        assert_eq!(value, 9);
    }

    #[test]
    fn test_get_or_eager() {
        assert_eq!(Optional::of(1).get_or(0), 1);
        assert_eq!(Optional::empty().get_or(0), 0);
    }

    #[test]
    fn test_or_else_keeps_present() {
        let opt = Optional::of(1).or_else(|| Optional::of(2));
        assert_eq!(opt, Optional::Present(1));
    }

    #[test]
    fn test_or_else_recovers_absent() {
        let opt = Optional::empty().or_else(|| Optional::of(2));
        assert_eq!(opt, Optional::Present(2));
    }

    #[test]
    fn test_filter_keeps_accepted() {
        let opt = Optional::of(4).filter(|n| n % 2 == 0);
        assert_eq!(opt, Optional::Present(4));
    }

    #[test]
    fn test_filter_drops_rejected() {
        let opt = Optional::of(3).filter(|n| n % 2 == 0);
        assert!(opt.is_absent());
    }

    #[test]
    fn test_present_but_falsy_values_stay_present() {
        assert!(Optional::of("").is_present());
        assert!(Optional::of(0).is_present());
    }

    #[test]
    fn test_to_outcome_on_present() {
        let outcome = Optional::of(5)
            .chain(|n| {
                if n > 0 {
                    Optional::of(n)
                } else {
                    Optional::empty()
                }
            })
            .to_outcome(|| "must be positive");
        assert_eq!(outcome, Outcome::Ok(5));
    }

    #[test]
    fn test_to_outcome_runs_make_err_only_when_absent() {
        let mut called = false;
        let outcome = Optional::of(1).to_outcome(|| {
            called = true;
            "absent"
        });
        assert!(!called);
        assert_eq!(outcome, Outcome::Ok(1));
    }

    #[test]
    fn test_require_attaches_canonical_reason() {
        let outcome: Fallible<i32> = Optional::empty().require("user name");
        assert_eq!(outcome, Outcome::Err(Error::absent("user name")));
    }

    #[test]
    fn test_tap_present_observes_value() {
        let mut observed = 0;
        let opt = Optional::of(42).tap_present(|v| observed = *v);
        assert_eq!(observed, 42);
        assert_eq!(opt, Optional::Present(42));
    }

    #[test]
    fn test_tap_absent_observes_absence() {
        let mut called = false;
        let opt: Optional<i32> = Optional::empty().tap_absent(|| called = true);
        assert!(called);
        assert!(opt.is_absent());
    }

    #[test]
    fn test_as_ref_borrows() {
        let opt = Optional::of(String::from("abc"));
        assert_eq!(opt.as_ref().map(String::len), Optional::Present(3));
        assert!(opt.is_present());
    }

    #[test]
    fn test_display_scenario_present() {
        let greeting = Optional::of("John")
            .map(str::to_uppercase)
            .get_or_else(|| "?".to_string());
        assert_eq!(greeting, "JOHN");
    }

    #[test]
    fn test_display_scenario_absent() {
        let mut map_called = false;
        let greeting: String = Optional::empty()
            .map(|s: String| {
                map_called = true;
                s.to_uppercase()
            })
            .get_or_else(|| "?".to_string());
        assert!(!map_called);
        assert_eq!(greeting, "?");
    }
}
