//! Outcome combinators for fallible catalog operations.
//!
//! `std::result::Result` already is the two-variant success/error wrapper
//! this crate models outcomes with, and `map` already guarantees the error
//! path passes through untouched. What std does not supply are the
//! side-effect taps call sites here want (peek at the payload, act, and
//! hand the unchanged result onward) and the "did it work at all" shape
//! for callers that discard the success payload. This module adds those.
//!
//! The `E: std::error::Error` bound keeps error payloads restricted to
//! actual error-classification types rather than arbitrary values.

/// A result whose success payload has been discarded.
pub type EmptyResult<E> = Result<(), E>;

/// Side-effect taps and payload-discarding for `Result`.
pub trait ResultExt<T, E>: Sized {
    /// Runs `action` on the success payload, then returns the result
    /// unchanged. The error variant passes through untouched.
    fn on_success(self, action: impl FnOnce(&T)) -> Self;

    /// Runs `action` on the error payload, then returns the result
    /// unchanged. The success variant passes through untouched.
    fn on_error(self, action: impl FnOnce(&E)) -> Self;

    /// Discards the success payload, keeping the error.
    fn into_empty(self) -> EmptyResult<E>;
}

impl<T, E: std::error::Error> ResultExt<T, E> for Result<T, E> {
    fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Ok(data) = &self {
            action(data);
        }
        self
    }

    fn on_error(self, action: impl FnOnce(&E)) -> Self {
        if let Err(error) = &self {
            action(error);
        }
        self
    }

    fn into_empty(self) -> EmptyResult<E> {
        self.map(|_| ())
    }
}
