use std::borrow::Cow;

/// Whether a collected test is meant to run.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum IgnoreStatus {
    #[default]
    Run,
    Ignore,
    IgnoreWithReason(Cow<'static, str>),
}

impl IgnoreStatus {
    pub fn is_ignored(&self) -> bool {
        !matches!(self, IgnoreStatus::Run)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            IgnoreStatus::IgnoreWithReason(reason) => Some(reason.as_ref()),
            IgnoreStatus::Run | IgnoreStatus::Ignore => None,
        }
    }
}

impl From<bool> for IgnoreStatus {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Ignore,
            false => Self::Run,
        }
    }
}

impl From<&'static str> for IgnoreStatus {
    fn from(value: &'static str) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

impl From<String> for IgnoreStatus {
    fn from(value: String) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

impl From<Option<String>> for IgnoreStatus {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(reason) => reason.into(),
            None => Self::Ignore,
        }
    }
}
