//! Registered client accounts
//!
//! Only contact details are kept here. Credentials and sessions are handled
//! by whatever front end embeds the registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::ClientId;
use domain_items::PartyRef;
use crate::error::RegistryError;

/// A registered campus client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAccount {
    pub client_id: ClientId,
    /// Unique, compared case-insensitively
    pub username: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub registration_date: NaiveDate,
}

impl ClientAccount {
    /// Identity stamped onto the client's reports and claims
    pub fn party_ref(&self) -> PartyRef {
        PartyRef::new(&self.username, &self.name, &self.contact)
    }
}

/// Registration form for a new client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub username: String,
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl NewClient {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into().trim().to_string(),
            name: name.into().trim().to_string(),
            contact: contact.into().trim().to_string(),
            email: email.into().trim().to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.username.is_empty() {
            return Err(RegistryError::invalid_input("username must not be empty"));
        }
        if self.username.chars().any(char::is_whitespace) {
            return Err(RegistryError::invalid_input("username must not contain spaces"));
        }
        if self.name.is_empty() {
            return Err(RegistryError::invalid_input("name must not be empty"));
        }
        Ok(())
    }

    pub(crate) fn into_account(self, client_id: ClientId, registration_date: NaiveDate) -> ClientAccount {
        ClientAccount {
            client_id,
            username: self.username,
            name: self.name,
            contact: self.contact,
            email: self.email,
            registration_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_trims_fields() {
        let form = NewClient::new(" asha ", " Asha Rao ", "555", " a@b.edu ");
        assert_eq!(form.username, "asha");
        assert_eq!(form.name, "Asha Rao");
        assert_eq!(form.email, "a@b.edu");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert!(NewClient::new("", "Asha", "", "").validate().is_err());
        assert!(NewClient::new("asha", " ", "", "").validate().is_err());
        assert!(NewClient::new("asha rao", "Asha", "", "").validate().is_err());
    }
}
