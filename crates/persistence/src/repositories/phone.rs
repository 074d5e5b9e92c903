//! Phone repository for database operations.

use sqlx::PgPool;

use crate::entities::PhoneEntity;
use crate::metrics::QueryTimer;

/// Repository for phone-related database operations, always scoped to one
/// client.
#[derive(Clone)]
pub struct PhoneRepository {
    pool: PgPool,
}

impl PhoneRepository {
    /// Creates a new PhoneRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find the exact phone row for a client and number.
    pub async fn find_by_client_and_number(
        &self,
        client_id: i32,
        phone_number: &str,
    ) -> Result<Option<PhoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_phone_by_client_and_number");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            SELECT phone_id, client_id, phone_number
            FROM phones
            WHERE client_id = $1 AND phone_number = $2
            ORDER BY phone_id
            LIMIT 1
            "#,
        )
        .bind(client_id)
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all phone rows for a client.
    pub async fn list_for_client(&self, client_id: i32) -> Result<Vec<PhoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_phones_for_client");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            SELECT phone_id, client_id, phone_number
            FROM phones
            WHERE client_id = $1
            ORDER BY phone_id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a phone row for a client.
    pub async fn insert(
        &self,
        client_id: i32,
        phone_number: &str,
    ) -> Result<PhoneEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_phone");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            INSERT INTO phones (client_id, phone_number)
            VALUES ($1, $2)
            RETURNING phone_id, client_id, phone_number
            "#,
        )
        .bind(client_id)
        .bind(phone_number)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete the exact phone row(s) for a client and number.
    ///
    /// Returns how many rows were removed; zero is a no-op, not an error.
    pub async fn delete_by_number(
        &self,
        client_id: i32,
        phone_number: &str,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_phone_by_number");
        let result = sqlx::query(
            r#"
            DELETE FROM phones
            WHERE client_id = $1 AND phone_number = $2
            "#,
        )
        .bind(client_id)
        .bind(phone_number)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Delete every phone row for a client. Returns how many rows were
    /// removed.
    pub async fn delete_all(&self, client_id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_all_phones");
        let result = sqlx::query(
            r#"
            DELETE FROM phones
            WHERE client_id = $1
            "#,
        )
        .bind(client_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: PhoneRepository tests require a database connection and are
    // covered by the integration tests in crates/directory/tests.
}
