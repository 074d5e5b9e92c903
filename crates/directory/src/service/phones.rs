//! Phone operations scoped to a client.

use domain::error::DirectoryError;
use domain::models::Phone;

use super::DirectoryService;
use crate::report::Outcome;

impl DirectoryService {
    /// Attach a phone number to the client holding `email`.
    ///
    /// An identical number already on file is a no-op reported as "already
    /// exists"; the existing row is returned.
    pub async fn add_phone(&self, email: &str, phone_number: &str) -> Result<Phone, DirectoryError> {
        const OP: &str = "add_phone";

        if let Err(err) = shared::validation::validate_phone_number(phone_number) {
            return Err(self.fail(OP, err.into()));
        }

        let client = self.resolve_client(OP, email).await?;
        match self
            .phones
            .find_by_client_and_number(client.client_id, phone_number)
            .await
        {
            Ok(Some(existing)) => {
                self.report(Outcome::info(
                    OP,
                    format!("phone {phone_number} already exists for {email}"),
                ));
                Ok(existing.into())
            }
            Ok(None) => match self.phones.insert(client.client_id, phone_number).await {
                Ok(phone) => {
                    self.report(Outcome::success(
                        OP,
                        format!("phone {phone_number} added for {email}"),
                    ));
                    Ok(phone.into())
                }
                Err(err) => Err(self.fail(OP, err.into())),
            },
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    /// Remove one phone number from the client holding `email`.
    ///
    /// A number not on file is a no-op reported as "not found". Returns
    /// whether a row was removed.
    pub async fn delete_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<bool, DirectoryError> {
        const OP: &str = "delete_phone";

        let client = self.resolve_client(OP, email).await?;
        match self
            .phones
            .delete_by_number(client.client_id, phone_number)
            .await
        {
            Ok(0) => {
                self.report(Outcome::info(
                    OP,
                    format!("phone {phone_number} not found for {email}"),
                ));
                Ok(false)
            }
            Ok(_) => {
                self.report(Outcome::success(
                    OP,
                    format!("phone {phone_number} removed from {email}"),
                ));
                Ok(true)
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }

    /// Remove every phone number the client holding `email` owns.
    ///
    /// Zero rows is a no-op. Returns how many rows were removed.
    pub async fn delete_all_phones(&self, email: &str) -> Result<u64, DirectoryError> {
        const OP: &str = "delete_all_phones";

        let client = self.resolve_client(OP, email).await?;
        match self.phones.delete_all(client.client_id).await {
            Ok(count) => {
                self.report(Outcome::success(
                    OP,
                    format!("{count} phone row(s) removed for {email}"),
                ));
                Ok(count)
            }
            Err(err) => Err(self.fail(OP, err.into())),
        }
    }
}
