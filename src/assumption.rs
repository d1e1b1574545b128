use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use crate::probe::{self, AssertionFailure, Probe};

/// The precondition gating whether a test runs.
///
/// Either a plain boolean or a [`Probe`] that is executed to find out.
pub enum Assumption<'a> {
    Literal(bool),
    Probe(Box<dyn Probe + 'a>),
}

impl fmt::Debug for Assumption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Probe(_) => write!(f, "Probe(...)"),
        }
    }
}

impl From<bool> for Assumption<'_> {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}

impl<'a, P: Probe + 'a> From<P> for Assumption<'a> {
    fn from(value: P) -> Self {
        Self::Probe(Box::new(value))
    }
}

impl Assumption<'_> {
    /// Check the assumption, running the probe exactly once.
    pub fn evaluate(self) -> Evidence {
        match self {
            Self::Literal(true) => Evidence::Holds,
            Self::Literal(false) => Evidence::Rejected,
            Self::Probe(check) => match probe::run(&*check) {
                Ok(()) => Evidence::Holds,
                Err(failure) => Evidence::Failed(failure),
            },
        }
    }
}

/// What checking an [`Assumption`] found out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Holds,
    /// A literal `false`.
    Rejected,
    Failed(AssertionFailure),
}

impl Evidence {
    pub fn holds(&self) -> bool {
        matches!(self, Evidence::Holds)
    }

    /// Decide run or skip, annotating a skip with `message`.
    ///
    /// A non-empty `message` always wins over a probe's failure text. A
    /// rejected literal without a message is skipped without annotation.
    pub fn decide(&self, message: &str) -> Decision {
        let detail = match (self, message.is_empty()) {
            (Evidence::Holds, _) => return Decision::run(),
            (Evidence::Rejected, true) => None,
            (Evidence::Failed(failure), true) => Some(failure.message().to_owned()),
            (Evidence::Rejected | Evidence::Failed(_), false) => Some(message.to_owned()),
        };
        Decision::skip(detail)
    }
}

/// Whether a test runs, and how a skip is annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    should_run: bool,
    detail: Option<String>,
}

impl Decision {
    pub fn run() -> Self {
        Self {
            should_run: true,
            detail: None,
        }
    }

    pub fn skip(detail: Option<String>) -> Self {
        Self {
            should_run: false,
            detail,
        }
    }

    pub fn should_run(&self) -> bool {
        self.should_run
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The suffix appended to a skipped test's name, either empty or `" (<detail>)"`.
    pub fn annotation(&self) -> String {
        match &self.detail {
            Some(detail) => format!(" ({detail})"),
            None => String::new(),
        }
    }

    pub fn skip_label(&self, name: impl Into<Cow<'static, str>>) -> SkipLabel {
        SkipLabel {
            name: name.into(),
            detail: self.detail.clone(),
        }
    }
}

/// The label under which a skipped test is registered.
///
/// Displays as `"<name> - SKIPPED"` followed by `" (<detail>)"` when there is
/// a detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipLabel {
    name: Cow<'static, str>,
    detail: Option<String>,
}

impl SkipLabel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn into_detail(self) -> Option<String> {
        self.detail
    }
}

impl Display for SkipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - SKIPPED", self.name)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

impl From<SkipLabel> for Cow<'static, str> {
    fn from(value: SkipLabel) -> Self {
        Cow::Owned(value.to_string())
    }
}
