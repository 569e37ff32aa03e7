//! Lawful absence and failure containers.
//!
//! This crate provides two cooperating value types plus one guard utility:
//!
//! - **`Optional<T>`**: a present value or absence, as a closed sum type
//! - **`Outcome<T, E>`**: a success value or a typed failure reason
//! - **`invariant`**: converts a broken precondition into a fatal failure
//!
//! Raw nullable values are lifted once at the boundary, flow through
//! short-circuiting combinators, and are unwrapped once at the opposite
//! edge. Combinators never invoke a closure on a missing or errored value,
//! and the containers satisfy the functor and monad laws (see
//! `tests/container_laws.rs`).
//!
//! # Example
//!
//! ```
//! use lift_core::{from_nullable, Outcome};
//!
//! let raw: Option<&str> = Some("John");
//! let display = from_nullable(raw)
//!     .map(str::to_uppercase)
//!     .to_outcome(|| "no name")
//!     .fold(|e| format!("error: {e}"), |name| name);
//! assert_eq!(display, "JOHN");
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod boundary;
pub mod error;
pub mod invariant;
pub mod optional;
pub mod outcome;

// Re-export main types
pub use boundary::{from_nullable, to_nullable, NullableExt};
pub use error::{Error, Fallible};
pub use invariant::invariant;
pub use optional::Optional;
pub use outcome::Outcome;
