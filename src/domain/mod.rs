mod candidate_email;
mod submission_outcome;
mod subscription_state;

pub use candidate_email::CandidateEmail;
pub use submission_outcome::{FailureKind, SubmissionOutcome};
pub use subscription_state::SubscriptionState;
