/// Result of ticking a node, action, or condition.
///
/// This is the only signal that crosses a parent/child boundary in a tree; any
/// other data travels through the [`Blackboard`](crate::Blackboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Success,
    Failure,
}

impl Status {
    /// Maps a predicate result onto `Success`/`Failure`. Never `Running`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// `None` while running, otherwise whether the run ended in success.
    pub fn outcome(self) -> Option<bool> {
        match self {
            Status::Running => None,
            Status::Success => Some(true),
            Status::Failure => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
