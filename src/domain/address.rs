use serde::Deserialize;

use crate::validation::{validate, Rule, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressBody {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip_code: String,
}

impl TryFrom<AddressBody> for Address {
    type Error = ValidationError;

    fn try_from(body: AddressBody) -> Result<Self, Self::Error> {
        let fields = [
            ("address.street", &body.street),
            ("address.number", &body.number),
            ("address.neighborhood", &body.neighborhood),
            ("address.city", &body.city),
            ("address.state", &body.state),
            ("address.country", &body.country),
            ("address.zip_code", &body.zip_code),
        ];

        for (field, value) in fields {
            validate(value, field, &[Rule::Required])?;
        }

        Ok(Address {
            street: body.street,
            number: body.number,
            neighborhood: body.neighborhood,
            city: body.city,
            state: body.state,
            country: body.country,
            zip_code: body.zip_code,
        })
    }
}
