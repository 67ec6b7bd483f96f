use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::validation::{require_id, validate, Rule, ValidationError};

const MAX_NAME_LENGTH: usize = 256;

pub struct NewSubscription {
    pub client_id: Uuid,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubscriptionBody {
    #[serde(default)]
    pub client_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<NewSubscriptionBody> for NewSubscription {
    type Error = ValidationError;

    fn try_from(body: NewSubscriptionBody) -> Result<Self, Self::Error> {
        require_id(&body.client_id, "client_id")?;
        validate(
            &body.name,
            "name",
            &[Rule::Required, Rule::MaxLength(MAX_NAME_LENGTH)],
        )?;

        Ok(NewSubscription {
            client_id: body.client_id,
            name: body.name,
            active: body.active,
            created_at: body.created_at.unwrap_or_else(Utc::now),
            expires_at: body.expires_at,
            last_updated_at: body.last_updated_at,
        })
    }
}
