use serde::Deserialize;

use crate::domain::address::{Address, AddressBody};
use crate::domain::client_email::ClientEmail;
use crate::domain::client_name::ClientName;
use crate::validation::ValidationError;

/// A client that passed validation but has not been persisted yet.
pub struct NewClient {
    pub name: ClientName,
    pub email: ClientEmail,
    pub active: bool,
    pub address: Address,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClientBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
    #[serde(default)]
    pub address: AddressBody,
}

fn active_by_default() -> bool {
    true
}

impl TryFrom<NewClientBody> for NewClient {
    type Error = ValidationError;

    // Field order matters: the first invalid field is the one reported
    fn try_from(body: NewClientBody) -> Result<Self, Self::Error> {
        let name = ClientName::parse(body.name)?;
        let email = ClientEmail::parse(body.email)?;
        let address = Address::try_from(body.address)?;

        Ok(NewClient {
            name,
            email,
            active: body.active,
            address,
        })
    }
}
