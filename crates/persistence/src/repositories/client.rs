//! Client repository for database operations.

use domain::models::{ClientFilter, ClientUpdate};
use sqlx::PgPool;

use crate::entities::{ClientEntity, ClientPhoneRowEntity, PhoneEntity};
use crate::metrics::QueryTimer;
use crate::search;

/// Repository for client-related database operations.
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a client by ID.
    pub async fn find_by_id(&self, client_id: i32) -> Result<Option<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_client_by_id");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT client_id, first_name, last_name, email
            FROM clients
            WHERE client_id = $1
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a client by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_client_by_email");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT client_id, first_name, last_name, email
            FROM clients
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a client and their first phone number atomically.
    ///
    /// The client insert returns the assigned id, which the phone row
    /// references. A duplicate email aborts the transaction before any phone
    /// row exists.
    pub async fn create_with_phone(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<(ClientEntity, PhoneEntity), sqlx::Error> {
        let timer = QueryTimer::new("create_client");

        let mut tx = self.pool.begin().await?;

        let client = sqlx::query_as::<_, ClientEntity>(
            r#"
            INSERT INTO clients (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING client_id, first_name, last_name, email
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        let phone = sqlx::query_as::<_, PhoneEntity>(
            r#"
            INSERT INTO phones (client_id, phone_number)
            VALUES ($1, $2)
            RETURNING phone_id, client_id, phone_number
            "#,
        )
        .bind(client.client_id)
        .bind(phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok((client, phone))
    }

    /// Apply an update to the client with the given id.
    ///
    /// Each present field issues its own UPDATE keyed by the immutable
    /// `client_id`, never by the mutable email value, so changing the email
    /// does not strand the statements that follow it. The phone field
    /// updates the client's earliest phone row in place, or inserts one when
    /// none exists. All statements run in one transaction.
    pub async fn apply_update(
        &self,
        client_id: i32,
        update: &ClientUpdate,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("update_client");
        let mut tx = self.pool.begin().await?;

        if let Some(first_name) = &update.first_name {
            sqlx::query("UPDATE clients SET first_name = $1 WHERE client_id = $2")
                .bind(first_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }
        if let Some(last_name) = &update.last_name {
            sqlx::query("UPDATE clients SET last_name = $1 WHERE client_id = $2")
                .bind(last_name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }
        if let Some(email) = &update.email {
            sqlx::query("UPDATE clients SET email = $1 WHERE client_id = $2")
                .bind(email)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }
        if let Some(phone_number) = &update.phone_number {
            let existing: Option<(i32,)> = sqlx::query_as(
                r#"
                SELECT phone_id
                FROM phones
                WHERE client_id = $1
                ORDER BY phone_id
                LIMIT 1
                "#,
            )
            .bind(client_id)
            .fetch_optional(&mut *tx)
            .await?;

            match existing {
                Some((phone_id,)) => {
                    sqlx::query("UPDATE phones SET phone_number = $1 WHERE phone_id = $2")
                        .bind(phone_number)
                        .bind(phone_id)
                        .execute(&mut *tx)
                        .await?;
                }
                None => {
                    sqlx::query("INSERT INTO phones (client_id, phone_number) VALUES ($1, $2)")
                        .bind(client_id)
                        .bind(phone_number)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Delete a client and every phone row that references them.
    ///
    /// Phones go first to uphold referential integrity without relying on a
    /// cascading-delete constraint; both deletions commit as one unit.
    /// Returns whether a client row was removed.
    pub async fn delete_cascade(&self, client_id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_client");
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM phones WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }

    /// Find clients matching a non-empty filter set.
    ///
    /// Left-joins phones so clients without a phone still appear, with the
    /// phone column absent. Returns one row per (client, phone) pair.
    /// Callers are expected to reject empty filter sets before calling; an
    /// empty filter yields no predicate and matches nothing here rather than
    /// everything.
    pub async fn search(
        &self,
        filter: &ClientFilter,
    ) -> Result<Vec<ClientPhoneRowEntity>, sqlx::Error> {
        let predicate = match search::build_filter(filter) {
            Some(predicate) => predicate,
            None => return Ok(Vec::new()),
        };

        let timer = QueryTimer::new("search_clients");
        let sql = format!(
            r#"
            SELECT c.client_id, c.first_name, c.last_name, c.email, p.phone_number
            FROM clients c
            LEFT JOIN phones p ON p.client_id = c.client_id
            WHERE {}
            ORDER BY c.client_id, p.phone_id
            "#,
            predicate.clause
        );

        let mut query = sqlx::query_as::<_, ClientPhoneRowEntity>(&sql);
        for param in &predicate.params {
            query = query.bind(param);
        }
        let result = query.fetch_all(&self.pool).await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: ClientRepository tests require a database connection and are
    // covered by the integration tests in crates/directory/tests.
}
