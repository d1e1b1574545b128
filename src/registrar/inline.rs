use std::borrow::Cow;

use crate::{
    assumption::SkipLabel,
    registrar::{Registration, TestRegistrar},
};

/// A [`TestRegistrar`] that runs bodies right away.
///
/// The run path calls the body and returns its value, the skip path drops the
/// body and returns the rendered skip label. This is the registrar
/// [`assuming`](crate::assuming) starts out with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Inline;

impl<Body, T> TestRegistrar<Body> for Inline
where
    Body: FnOnce() -> T,
{
    type Output = Registration<T>;

    fn it(&mut self, _: Cow<'static, str>, body: Body) -> Self::Output {
        Registration::Ran(body())
    }

    fn skip(&mut self, label: SkipLabel, _: Body) -> Self::Output {
        Registration::Skipped(label.into())
    }
}
