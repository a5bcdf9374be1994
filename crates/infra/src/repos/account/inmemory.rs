use super::IAccountRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use banka_domain::{Account, ID};
use std::sync::{Arc, Mutex};

pub struct InMemoryAccountRepo {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl InMemoryAccountRepo {
    pub fn new(accounts: Arc<Mutex<Vec<Account>>>) -> Self {
        Self { accounts }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for InMemoryAccountRepo {
    async fn save(&self, account: &Account) -> anyhow::Result<Account> {
        save(account, &self.accounts);
        Ok(account.clone())
    }

    async fn find(&self, account_id: &ID) -> Option<Account> {
        find(account_id, &self.accounts)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Account> {
        find_by(&self.accounts, |a: &Account| a.user_id == *user_id)
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let deleted = find_and_delete_by(&self.accounts, |a: &Account| a.user_id == *user_id);
        Ok(DeleteResult {
            deleted_count: deleted.len() as i64,
        })
    }
}
