//! Schema provisioning for the clients and phones tables.

use sqlx::PgPool;
use tracing::debug;

use crate::metrics::QueryTimer;

/// Drops and recreates the `clients` and `phones` tables.
///
/// `phones` references `clients`, so the dependent table is dropped first
/// and created last. All four statements run in one transaction; a failing
/// statement rolls everything back. Safe to call repeatedly; pre-existing
/// data is discarded by design.
pub async fn initialize_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let timer = QueryTimer::new("initialize_schema");
    let mut tx = pool.begin().await?;

    sqlx::query("DROP TABLE IF EXISTS phones")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS clients")
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE clients (
            client_id SERIAL PRIMARY KEY,
            first_name VARCHAR(40) NOT NULL,
            last_name VARCHAR(40) NOT NULL,
            email VARCHAR(40) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE phones (
            phone_id SERIAL PRIMARY KEY,
            client_id INTEGER REFERENCES clients(client_id),
            phone_number VARCHAR(12)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    timer.record();
    debug!("clients and phones tables recreated");
    Ok(())
}

#[cfg(test)]
mod tests {
    // Note: schema provisioning requires a database connection and is
    // covered by the integration tests in crates/directory/tests.
}
