use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub first_nickname: Option<String>,
    pub last_nickname: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Contact details supplied by an attendee when registering. The email is
/// raw untrusted input here; the service parses it into a
/// `domain::EmailAddress` before anything is written.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub first_nickname: Option<String>,
    pub last_nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalInfo {
    pub registration_id: Uuid,
    pub diet: String,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPersonalInfo {
    pub diet: String,
    pub allergies: Vec<String>,
}
