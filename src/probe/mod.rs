//! Probing assumptions.
//!
//! A probe is a zero-argument callable that checks something about the
//! environment a test would run in. It signals that the check did not hold
//! either by returning an error or by panicking with a message, which is what
//! `assert!`, `assert_eq!` and friends do.
//!
//! [`assume`] wraps such a callable and normalizes its outcome to
//! `Option<String>`: `None` when the probe held, `Some(message)` when it
//! failed. Only failures carrying a message count as [`AssertionFailure`]s.
//! A panic with any other payload is not an assertion and keeps unwinding.

use std::{
    any::Any,
    borrow::Cow,
    fmt::Display,
    panic::{self, AssertUnwindSafe},
};

use thiserror::Error;

mod hook;

/// A failed assumption check.
///
/// Unlike an arbitrary panic payload, an assertion failure always carries a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: Cow<'static, str>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message.into_owned()
    }

    /// Turn a panic payload into an assertion failure.
    ///
    /// This accepts the payload types produced by `panic!` and the assertion
    /// macros (`&'static str` and `String`). Any other payload is handed back
    /// untouched so it can be resumed.
    pub fn from_panic(
        payload: Box<dyn Any + Send + 'static>,
    ) -> Result<Self, Box<dyn Any + Send + 'static>> {
        payload
            .downcast::<&'static str>()
            .map(|s| Self::new(*s))
            .or_else(|payload| payload.downcast::<String>().map(|s| Self::new(*s)))
    }
}

/// The outcome of a single probe call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult(pub Result<(), AssertionFailure>);

impl From<()> for ProbeResult {
    fn from(_: ()) -> Self {
        Self(Ok(()))
    }
}

impl<E: Display> From<Result<(), E>> for ProbeResult {
    fn from(v: Result<(), E>) -> Self {
        Self(v.map_err(|e| AssertionFailure::new(e.to_string())))
    }
}

/// Something that can be checked to decide whether an assumption holds.
///
/// Implemented for every `Fn() -> T` where `T` converts into a
/// [`ProbeResult`], so plain closures returning `()` or `Result<(), E>` are
/// probes.
pub trait Probe {
    fn probe(&self) -> ProbeResult;
}

impl<F, T> Probe for F
where
    F: Fn() -> T,
    T: Into<ProbeResult>,
{
    fn probe(&self) -> ProbeResult {
        (self)().into()
    }
}

/// Wrap `assertion` into a function that reports whether it holds.
///
/// Every call of the returned function executes `assertion` again and
/// returns `None` if it completed, or the failure message if it returned an
/// error or panicked with a message.
///
/// # Panics
///
/// The returned function resumes panics whose payload is neither a
/// `&'static str` nor a `String`.
pub fn assume<P: Probe>(assertion: P) -> impl Fn() -> Option<String> {
    move || match run(&assertion) {
        Ok(()) => None,
        Err(failure) => Some(failure.into_message()),
    }
}

pub(crate) fn run<P: Probe + ?Sized>(probe: &P) -> Result<(), AssertionFailure> {
    let caught = {
        let _probing = hook::ProbingGuard::enter();
        // Probes must not leave shared state half-updated.
        panic::catch_unwind(AssertUnwindSafe(|| probe.probe()))
    };

    let result = match caught {
        Ok(ProbeResult(result)) => result,
        Err(payload) => match AssertionFailure::from_panic(payload) {
            Ok(failure) => Err(failure),
            Err(payload) => panic::resume_unwind(payload),
        },
    };
    result.inspect_err(|failure| tracing::trace!(%failure, "probe failed"))
}
