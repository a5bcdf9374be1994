use crate::account::Account;
use crate::shared::entity::{Entity, ID};
use serde::Serialize;

/// A customer record, the storage shape. Serialization matches what the
/// store holds: scalar columns only, the owned `accounts` collection is
/// never part of it (partial update responses use this shape directly).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub address: String,
    pub email_id: String,
    #[serde(skip_serializing)]
    pub accounts: Vec<Account>,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        phone_number: i64,
        address: String,
        email_id: String,
    ) -> Self {
        Self {
            id: Default::default(),
            first_name,
            last_name,
            phone_number,
            address,
            email_id,
            accounts: Vec::new(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id
    }
}
