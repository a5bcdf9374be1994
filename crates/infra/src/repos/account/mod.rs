mod inmemory;

use crate::repos::shared::repo::DeleteResult;
use banka_domain::{Account, ID};
pub use inmemory::InMemoryAccountRepo;

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    async fn save(&self, account: &Account) -> anyhow::Result<Account>;
    async fn find(&self, account_id: &ID) -> Option<Account>;
    /// Accounts owned by the given user, in insertion order.
    async fn find_by_user(&self, user_id: &ID) -> Vec<Account>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}
