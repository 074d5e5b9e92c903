//! Client entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the clients table.
#[derive(Debug, Clone, FromRow)]
pub struct ClientEntity {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<ClientEntity> for domain::models::Client {
    fn from(entity: ClientEntity) -> Self {
        Self {
            id: entity.client_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}

/// One row of the clients/phones left join used by the find operation.
///
/// `phone_number` is absent for clients with no phone row.
#[derive(Debug, Clone, FromRow)]
pub struct ClientPhoneRowEntity {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<ClientPhoneRowEntity> for domain::models::ClientRecord {
    fn from(entity: ClientPhoneRowEntity) -> Self {
        Self {
            id: entity.client_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
        }
    }
}
