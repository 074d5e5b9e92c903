//! Client operations: create, update, delete, find.

use domain::error::DirectoryError;
use domain::models::{Client, ClientFilter, ClientRecord, ClientUpdate, NewClient, Phone};
use validator::Validate;

use super::DirectoryService;
use crate::report::Outcome;

impl DirectoryService {
    /// Create a client together with their first phone number.
    ///
    /// Both rows commit as one unit. A duplicate email fails with
    /// `ConstraintViolation` and writes nothing.
    pub async fn create_client(&self, new: NewClient) -> Result<(Client, Phone), DirectoryError> {
        const OP: &str = "create_client";

        if let Err(errors) = new.validate() {
            return Err(self.fail(OP, errors.into()));
        }

        match self
            .clients
            .create_with_phone(&new.first_name, &new.last_name, &new.email, &new.phone_number)
            .await
        {
            Ok((client, phone)) => {
                self.report(Outcome::success(
                    OP,
                    format!(
                        "client {} added with phone {}",
                        client.email, phone.phone_number
                    ),
                ));
                Ok((client.into(), phone.into()))
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    /// Apply a field subset to the client currently holding `email`.
    ///
    /// The client is resolved once by the given email; all writes then
    /// target the resolved id, so including a new email in the subset does
    /// not affect the statements applied after it. Returns the refreshed
    /// client.
    pub async fn update_client(
        &self,
        email: &str,
        update: ClientUpdate,
    ) -> Result<Client, DirectoryError> {
        const OP: &str = "update_client";

        if let Err(errors) = update.validate() {
            return Err(self.fail(OP, errors.into()));
        }

        let client = self.resolve_client(OP, email).await?;
        if update.is_empty() {
            self.report(Outcome::info(OP, format!("nothing to update for {email}")));
            return Ok(client.into());
        }

        if let Err(err) = self.clients.apply_update(client.client_id, &update).await {
            return Err(self.fail(OP, err.into()));
        }

        // Re-read through the immutable id so a changed email is reflected.
        match self.clients.find_by_id(client.client_id).await {
            Ok(Some(updated)) => {
                self.report(Outcome::success(OP, format!("client {email} updated")));
                Ok(updated.into())
            }
            Ok(None) => Err(self.fail(
                OP,
                DirectoryError::UnexpectedFailure(
                    "updated client row could not be re-read".to_string(),
                ),
            )),
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    /// Delete a client and every phone number they own.
    pub async fn delete_client(&self, email: &str) -> Result<(), DirectoryError> {
        const OP: &str = "delete_client";

        let client = self.resolve_client(OP, email).await?;
        match self.clients.delete_cascade(client.client_id).await {
            Ok(_) => {
                self.report(Outcome::success(
                    OP,
                    format!("client {email} and their phones removed"),
                ));
                Ok(())
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    /// Find clients matching at least one filter field.
    ///
    /// An empty filter set is rejected before the store is touched. An empty
    /// result is a successful outcome, not an error.
    pub async fn find_clients(
        &self,
        filter: &ClientFilter,
    ) -> Result<Vec<ClientRecord>, DirectoryError> {
        const OP: &str = "find_clients";

        if filter.is_empty() {
            return Err(self.fail(
                OP,
                DirectoryError::InvalidQuery("at least one search filter is required".to_string()),
            ));
        }

        match self.clients.search(filter).await {
            Ok(rows) => {
                self.report(Outcome::success(OP, format!("{} matching row(s)", rows.len())));
                Ok(rows.into_iter().map(Into::into).collect())
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }
}
