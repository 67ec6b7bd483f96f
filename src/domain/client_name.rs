use crate::validation::{validate, Rule, ValidationError};

const MIN_CHAR_LENGTH: usize = 3;
const MAX_CHAR_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClientName(String);

impl ClientName {
    pub fn parse(name: String) -> Result<ClientName, ValidationError> {
        validate(
            &name,
            "name",
            &[
                Rule::Required,
                Rule::MinLength(MIN_CHAR_LENGTH),
                Rule::MaxLength(MAX_CHAR_LENGTH),
                Rule::NoForbiddenChars,
            ],
        )?;

        Ok(Self(name))
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
