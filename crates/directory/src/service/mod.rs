//! The public operation surface of the client directory.

mod clients;
mod phones;

use std::sync::Arc;

use domain::error::DirectoryError;
use persistence::db::{self, DatabaseConfig};
use persistence::entities::ClientEntity;
use persistence::repositories::{ClientRepository, PhoneRepository};
use persistence::schema;
use sqlx::PgPool;

use crate::report::{Outcome, ReportSink, TracingSink};

/// Library API over the clients/phones store.
///
/// Operations share one connection pool; each checks a connection (or a
/// transaction scope) out for its own duration and releases it on every
/// exit path. Every operation returns a [`DirectoryError`] on failure and
/// additionally reports one human-readable outcome to the configured sink.
#[derive(Clone)]
pub struct DirectoryService {
    clients: ClientRepository,
    phones: PhoneRepository,
    sink: Arc<dyn ReportSink>,
}

impl DirectoryService {
    /// Connects to the store described by `config`, reporting to the
    /// tracing sink.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DirectoryError> {
        let pool = db::create_pool(config).await?;
        Ok(Self::new(pool, Arc::new(TracingSink)))
    }

    /// Builds a service over an existing pool with a custom sink.
    pub fn new(pool: PgPool, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            clients: ClientRepository::new(pool.clone()),
            phones: PhoneRepository::new(pool),
            sink,
        }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        self.clients.pool()
    }

    /// Drops and recreates the clients and phones tables.
    pub async fn initialize_schema(&self) -> Result<(), DirectoryError> {
        const OP: &str = "initialize_schema";
        match schema::initialize_schema(self.pool()).await {
            Ok(()) => {
                self.report(Outcome::success(OP, "clients and phones tables recreated"));
                Ok(())
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    pub(crate) fn report(&self, outcome: Outcome) {
        self.sink.report(&outcome);
    }

    /// Report a failed operation and hand the error back to the caller.
    ///
    /// Lookup misses are informational outcomes, everything else reports as
    /// a failure.
    pub(crate) fn fail(&self, operation: &'static str, err: DirectoryError) -> DirectoryError {
        let outcome = if err.is_not_found() {
            Outcome::info(operation, err.to_string())
        } else {
            Outcome::failure(operation, err.to_string())
        };
        self.report(outcome);
        err
    }

    /// Resolve an email to its client row, reporting the miss when absent.
    ///
    /// Mutations resolve once here and then target the immutable client id,
    /// never the email string, so an email change mid-operation cannot
    /// strand later statements.
    pub(crate) async fn resolve_client(
        &self,
        operation: &'static str,
        email: &str,
    ) -> Result<ClientEntity, DirectoryError> {
        match self.clients.find_by_email(email).await {
            Ok(Some(client)) => Ok(client),
            Ok(None) => Err(self.fail(
                operation,
                DirectoryError::NotFound(format!("no client with email {email}")),
            )),
            Err(err) => Err(self.fail(operation, err.into())),
        }
    }
}
