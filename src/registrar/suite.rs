use std::{borrow::Cow, panic::RefUnwindSafe, slice};

use crate::{
    assumption::SkipLabel,
    ignore::IgnoreStatus,
    registrar::TestRegistrar,
    test::{Test, TestMeta, TestResult},
};

/// A [`TestRegistrar`] collecting [`Test`] descriptors.
///
/// Nothing is executed while registering. Run-path tests keep their name and
/// are marked [`IgnoreStatus::Run`]; skipped tests are stored under their skip
/// label and marked ignored, with the skip detail as the reason if there is
/// one. Both paths return the name the test was registered under.
#[derive(Debug, Default)]
pub struct TestSuite {
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn into_tests(self) -> Vec<Test> {
        self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Test> {
        self.tests.iter()
    }

    fn push<Body, T>(&mut self, name: Cow<'static, str>, ignore: IgnoreStatus, body: Body)
    where
        Body: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        self.tests.push(Test::new(TestMeta { name, ignore }, body));
    }
}

impl<'s> IntoIterator for &'s TestSuite {
    type Item = &'s Test;
    type IntoIter = slice::Iter<'s, Test>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Body, T> TestRegistrar<Body> for TestSuite
where
    Body: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
    T: Into<TestResult>,
{
    type Output = Cow<'static, str>;

    fn it(&mut self, name: Cow<'static, str>, body: Body) -> Self::Output {
        self.push(name.clone(), IgnoreStatus::Run, body);
        name
    }

    fn skip(&mut self, label: SkipLabel, body: Body) -> Self::Output {
        let name: Cow<'static, str> = label.to_string().into();
        tracing::debug!(%name, "collecting skipped test");
        self.push(name.clone(), IgnoreStatus::from(label.into_detail()), body);
        name
    }
}
