//! Boundary conversions between host types and containers.
//!
//! The only module where the host missing-sentinel (`Option::None`)
//! appears. Consumers lift raw values once at ingestion and unwrap once at
//! the outward edge; everything in between stays inside the containers.

use either::Either;

use crate::optional::Optional;
use crate::outcome::Outcome;

/// Lift a raw nullable value into [`Optional`].
///
/// Tests the sentinel exactly, never "falsiness": `Some("")` and `Some(0)`
/// lift to `Present`.
pub fn from_nullable<T>(raw: Option<T>) -> Optional<T> {
    match raw {
        Some(value) => Optional::Present(value),
        None => Optional::Absent,
    }
}

/// Hand a container back to non-participating code.
///
/// Inverse of [`from_nullable`]; use only at the outward edge.
#[must_use]
pub fn to_nullable<T>(optional: Optional<T>) -> Option<T> {
    match optional {
        Optional::Present(value) => Some(value),
        Optional::Absent => None,
    }
}

/// Extension trait lifting host options into [`Optional`].
pub trait NullableExt<T> {
    /// Sugar over [`from_nullable`].
    fn lift(self) -> Optional<T>;
}

impl<T> NullableExt<T> for Option<T> {
    fn lift(self) -> Optional<T> {
        from_nullable(self)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(raw: Option<T>) -> Self {
        from_nullable(raw)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        to_nullable(optional)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(reason) => Self::Err(reason),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(reason) => Err(reason),
        }
    }
}

// Either convention: Right is the success branch.
impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Right(value) => Self::Ok(value),
            Either::Left(reason) => Self::Err(reason),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Either<E, T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Either::Right(value),
            Outcome::Err(reason) => Either::Left(reason),
        }
    }
}
