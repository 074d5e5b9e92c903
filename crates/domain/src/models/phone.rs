//! Phone number domain model.

use serde::{Deserialize, Serialize};

/// A phone number row owned by exactly one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: i32,
    pub client_id: i32,
    pub number: String,
}
