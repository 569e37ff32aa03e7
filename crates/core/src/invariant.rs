//! Assertion guard for broken preconditions.
//!
//! Absence and failure are data ([`Optional::Absent`](crate::Optional),
//! [`Outcome::Err`](crate::Outcome)) and travel by return value. An
//! invariant violation is a different severity: a programmer error that
//! should be impossible when the surrounding code is correct. It is fatal,
//! out-of-band, and never represented in a return type.

/// Abort the current operation unless `condition` holds.
///
/// No-op when the condition is true. On violation the message is logged
/// and the current operation is terminated; ordinary combinators never
/// trigger this. Use it to guard caller-side preconditions, never for
/// expected domain absence.
///
/// # Panics
///
/// Panics with `message` when `condition` is false.
#[track_caller]
pub fn invariant(condition: bool, message: &str) {
    if !condition {
        invariant_failed(message);
    }
}

/// Cold failure path shared by [`invariant`] and [`invariant!`](crate::invariant!).
///
/// # Panics
///
/// Always.
#[cold]
#[inline(never)]
#[track_caller]
#[allow(clippy::panic)]
pub fn invariant_failed(message: &str) -> ! {
    tracing::error!("invariant violated: {message}");
    panic!("invariant violated: {message}");
}

/// Format-args variant of [`invariant`].
///
/// The message is only formatted on the failure path.
#[macro_export]
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            $crate::invariant::invariant_failed(&::std::format!($($arg)+));
        }
    };
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_invariant_holds_silently() {
        invariant(true, "never shown");
    }

    #[test]
    #[should_panic(expected = "invariant violated: container misuse")]
    fn test_invariant_violation_panics_with_message() {
        invariant(false, "container misuse");
    }

    #[test]
    fn test_invariant_macro_holds_without_formatting() {
        let mut formatted = false;
        invariant!(1 + 1 == 2, "{}", {
            formatted = true;
            "never shown"
        });
        assert!(!formatted);
    }

    #[test]
    #[should_panic(expected = "invariant violated: expected 2, got 3")]
    fn test_invariant_macro_formats_on_failure() {
        invariant!(1 + 1 == 3, "expected 2, got {}", 3);
    }
}
