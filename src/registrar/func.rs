use std::{borrow::Cow, fmt};

use crate::{assumption::SkipLabel, registrar::TestRegistrar};

/// A [`TestRegistrar`] made from two closures.
///
/// `run` and `skip` are called with the same `(name, body)` shape a test
/// framework's own `it` and `it.skip` primitives use. The skip closure gets
/// the rendered skip label as its name.
pub struct FnRegistrar<Run, Skip> {
    run: Run,
    skip: Skip,
}

impl<Run, Skip> FnRegistrar<Run, Skip> {
    pub fn new(run: Run, skip: Skip) -> Self {
        Self { run, skip }
    }
}

impl<Run, Skip> fmt::Debug for FnRegistrar<Run, Skip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRegistrar").finish_non_exhaustive()
    }
}

impl<Body, R, Run, Skip> TestRegistrar<Body> for FnRegistrar<Run, Skip>
where
    Run: FnMut(Cow<'static, str>, Body) -> R,
    Skip: FnMut(Cow<'static, str>, Body) -> R,
{
    type Output = R;

    fn it(&mut self, name: Cow<'static, str>, body: Body) -> Self::Output {
        (self.run)(name, body)
    }

    fn skip(&mut self, label: SkipLabel, body: Body) -> Self::Output {
        (self.skip)(label.into(), body)
    }
}
