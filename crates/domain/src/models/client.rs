//! Client domain models and operation inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A person record identified uniquely by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Input for creating a client together with their first phone number.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewClient {
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub first_name: String,

    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub last_name: String,

    #[validate(custom(function = "shared::validation::validate_email_address"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone_number: String,
}

/// Field subset applied by the update operation. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClientUpdate {
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_email_address"))]
    pub email: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone_number: Option<String>,
}

impl ClientUpdate {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }
}

/// Search filters for the find operation, combined conjunctively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl ClientFilter {
    /// True when no filter field is present.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }

    /// Filter on email alone.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// One row of a find result: a client and at most one joined phone number.
///
/// Clients without a phone appear once with `phone_number` absent; clients
/// with several phones appear once per phone row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}
