use crate::validation::{validate, Rule, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClientEmail(String);

impl ClientEmail {
    pub fn parse(email: String) -> Result<ClientEmail, ValidationError> {
        validate(&email, "email", &[Rule::Required, Rule::Email])?;

        Ok(Self(email))
    }
}

impl AsRef<str> for ClientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
