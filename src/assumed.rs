use std::borrow::Cow;

use crate::{
    assumption::{Assumption, Decision, Evidence},
    registrar::{Inline, TestRegistrar},
};

/// Decide whether a test runs based on `assumption`.
///
/// The assumption is checked right here, before this function returns: a
/// probe runs exactly once, no matter how often [`Assumed::it`] is called
/// later. Use [`Assumed::with_message`] to annotate skips and
/// [`Assumed::with_registrar`] to hand tests to something other than
/// [`Inline`].
///
/// ```
/// use assuming::assuming;
///
/// let mut ran = false;
/// let registration = assuming(false)
///     .with_message("needs a network")
///     .it("fetches the index", || ran = true);
///
/// assert!(!ran);
/// assert_eq!(
///     registration.skip_label(),
///     Some("fetches the index - SKIPPED (needs a network)")
/// );
/// ```
pub fn assuming<'a>(assumption: impl Into<Assumption<'a>>) -> Assumed<Inline> {
    Assumed {
        evidence: assumption.into().evaluate(),
        message: Cow::Borrowed(""),
        registrar: Inline,
    }
}

/// A checked assumption, ready to register tests.
#[derive(Debug, Clone)]
pub struct Assumed<Registrar> {
    evidence: Evidence,
    message: Cow<'static, str>,
    registrar: Registrar,
}

impl<Registrar> Assumed<Registrar> {
    /// Annotate skips with `message` instead of the probe's failure text.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    pub fn with_registrar<WithRegistrar>(
        self,
        registrar: WithRegistrar,
    ) -> Assumed<WithRegistrar> {
        Assumed {
            evidence: self.evidence,
            message: self.message,
            registrar,
        }
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    pub fn decision(&self) -> Decision {
        self.evidence.decide(&self.message)
    }

    /// Run or skip `body`, depending on the assumption.
    ///
    /// If the assumption holds, `name` and `body` go to
    /// [`TestRegistrar::it`] unchanged. Otherwise the registrar's
    /// [`skip`](TestRegistrar::skip) receives the skip label and `body`.
    pub fn it<Body>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        body: Body,
    ) -> Registrar::Output
    where
        Registrar: TestRegistrar<Body>,
    {
        let name = name.into();
        let decision = self.decision();
        if decision.should_run() {
            tracing::debug!(%name, "assumption holds, running test");
            return self.registrar.it(name, body);
        }

        let label = decision.skip_label(name);
        tracing::debug!(%label, "assumption does not hold, skipping test");
        self.registrar.skip(label, body)
    }
}
