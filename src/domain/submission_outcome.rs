/// Terminal result of one run of the subscription workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success {
        already_subscribed: bool,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

/// Where a failed submission went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The email never left the process.
    InvalidEmail,
    /// Buttondown answered with an error status.
    Rejected,
    /// Neither endpoint could be reached.
    Network,
}

impl SubmissionOutcome {
    pub fn subscribed() -> Self {
        Self::Success {
            already_subscribed: false,
        }
    }

    pub fn already_subscribed() -> Self {
        Self::Success {
            already_subscribed: true,
        }
    }

    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::InvalidEmail, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::Rejected, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::Network, message)
    }

    fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}
