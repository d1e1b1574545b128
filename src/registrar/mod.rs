//! Registering tests once an assumption has been decided.
//!
//! A test framework usually offers two primitives: one that registers (or
//! directly runs) a test, and one that records it as skipped. A
//! [`TestRegistrar`] bundles both, so [`Assumed::it`](crate::Assumed::it)
//! can forward to whichever one the decision calls for.
//!
//! The registrar is passed explicitly instead of being looked up from some
//! ambient scope, which keeps the dependency visible wherever tests are
//! declared. Three implementations ship with this crate:
//! - [`Inline`] runs the body immediately and reports skips as labels
//! - [`FnRegistrar`] adapts a pair of plain closures
//! - [`TestSuite`] collects [`Test`](crate::test::Test) descriptors for a host harness

use std::borrow::Cow;

use crate::assumption::SkipLabel;

mod inline;
pub use inline::*;

mod func;
pub use func::*;

mod suite;
pub use suite::*;

/// The pair of primitives used to run or skip a test body of type `Body`.
pub trait TestRegistrar<Body> {
    /// What registering a test yields, for both the run and the skip path.
    type Output;

    /// Register `body` under `name` to be run.
    fn it(&mut self, name: Cow<'static, str>, body: Body) -> Self::Output;

    /// Register `body` as skipped under `label`.
    ///
    /// Implementations must not execute `body`.
    fn skip(&mut self, label: SkipLabel, body: Body) -> Self::Output;
}

impl<Body, R> TestRegistrar<Body> for &mut R
where
    R: TestRegistrar<Body> + ?Sized,
{
    type Output = R::Output;

    fn it(&mut self, name: Cow<'static, str>, body: Body) -> Self::Output {
        (**self).it(name, body)
    }

    fn skip(&mut self, label: SkipLabel, body: Body) -> Self::Output {
        (**self).skip(label, body)
    }
}

/// Whether a body was run or skipped, and what came out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration<T> {
    Ran(T),
    Skipped(Cow<'static, str>),
}

impl<T> Registration<T> {
    pub fn ran(&self) -> bool {
        matches!(self, Registration::Ran(_))
    }

    pub fn skipped(&self) -> bool {
        matches!(self, Registration::Skipped(_))
    }

    pub fn skip_label(&self) -> Option<&str> {
        match self {
            Registration::Skipped(label) => Some(label.as_ref()),
            Registration::Ran(_) => None,
        }
    }

    pub fn into_ran(self) -> Option<T> {
        match self {
            Registration::Ran(value) => Some(value),
            Registration::Skipped(_) => None,
        }
    }
}
