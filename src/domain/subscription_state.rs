use crate::domain::SubmissionOutcome;
use serde::{Deserialize, Serialize};

/// What the signup form shows. Owned by the caller and driven by the
/// outcomes the workflow hands back, the workflow itself keeps no state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubscriptionState {
    #[default]
    Idle,
    Loading,
    Success {
        already_subscribed: bool,
    },
    Error {
        message: String,
    },
}

impl SubscriptionState {
    /// A new attempt always starts over, whatever the previous result was.
    pub fn begin(self) -> Self {
        Self::Loading
    }

    pub fn resolve(self, outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success { already_subscribed } => {
                Self::Success { already_subscribed }
            }
            SubmissionOutcome::Failure { message, .. } => Self::Error { message },
        }
    }
}
