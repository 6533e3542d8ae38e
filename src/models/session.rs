use super::error::ValidationError;
use serde::Serialize;

/// Workspace login, held in memory only and sent with every request.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Checks presence and a syntactic email before anything goes on the wire.
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

// Keeps the password out of console output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Credentials),
}

impl Session {
    pub fn login(credentials: Credentials) -> Self {
        Session::Authenticated(credentials)
    }

    pub fn logout(&self) -> Self {
        Session::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Session::Authenticated(credentials) => Some(credentials),
            Session::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_both_fields() {
        assert_eq!(
            Credentials::parse("", "secret"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            Credentials::parse("a@b.com", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            Credentials::parse("   ", "secret"),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn test_parse_rejects_email_without_at() {
        assert_eq!(
            Credentials::parse("member.comotion", "secret"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_parse_trims_email_only() {
        let credentials = Credentials::parse("  member@comotion.org ", " pw ").unwrap();
        assert_eq!(credentials.email, "member@comotion.org");
        assert_eq!(credentials.password, " pw ");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::parse("member@comotion.org", "hunter2").unwrap();
        let printed = format!("{credentials:?}");
        assert!(printed.contains("member@comotion.org"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_session_transitions() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.credentials().is_none());

        let credentials = Credentials::parse("member@comotion.org", "pw").unwrap();
        let session = Session::login(credentials.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.credentials(), Some(&credentials));

        let session = session.logout();
        assert_eq!(session, Session::Anonymous);
    }
}
