//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database named by the
//! `TEST_DATABASE_URL` environment variable; when it is unset each test
//! returns early. The schema initializer drops and recreates the shared
//! tables, so tests serialize on a global lock.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use domain::models::NewClient;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

use client_directory::report::RecordingSink;
use client_directory::service::DirectoryService;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Serializes tests that reset the shared schema.
pub async fn db_lock() -> MutexGuard<'static, ()> {
    DB_LOCK.lock().await
}

/// Connect to the test database, or `None` when TEST_DATABASE_URL is unset.
pub async fn try_test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    Some(pool)
}

/// A service over a freshly provisioned two-table schema, reporting into a
/// [`RecordingSink`] that starts empty.
pub async fn fresh_service(pool: PgPool) -> (DirectoryService, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let service = DirectoryService::new(pool, sink.clone());
    service
        .initialize_schema()
        .await
        .expect("failed to provision test schema");
    sink.take();
    (service, sink)
}

pub fn new_client(first: &str, last: &str, email: &str, phone: &str) -> NewClient {
    NewClient {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone_number: phone.to_string(),
    }
}

/// Count rows in the phones table.
pub async fn phone_row_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM phones")
        .fetch_one(pool)
        .await
        .expect("failed to count phone rows");
    count
}

/// Count rows in the clients table.
pub async fn client_row_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await
        .expect("failed to count client rows");
    count
}
