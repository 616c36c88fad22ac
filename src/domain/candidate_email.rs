pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// An email address that passed the landing page's loose syntactic check.
///
/// The check is a heuristic: a trimmed, non-empty string holding both an
/// `@` and a `.`. It neither rejects every malformed address nor accepts
/// every RFC 5322 one, and it is not meant to. The provider has the final say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEmail(String);

impl AsRef<str> for CandidateEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for CandidateEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CandidateEmail::parse(value)
    }
}

impl CandidateEmail {
    pub fn parse(s: String) -> Result<CandidateEmail, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() || !trimmed.contains('@') || !trimmed.contains('.') {
            Err(INVALID_EMAIL_MESSAGE.to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}
