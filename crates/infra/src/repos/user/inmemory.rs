use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use banka_domain::{Account, User, ID};
use std::sync::{Arc, Mutex};

/// The account rows live in the collection shared with
/// `InMemoryAccountRepo`, which is what makes the cascades observable from
/// both repositories. User rows are stored without their accounts and the
/// collection is joined back in on reads.
pub struct InMemoryUserRepo {
    users: Arc<Mutex<Vec<User>>>,
    accounts: Arc<Mutex<Vec<Account>>>,
    user_ids: Arc<IdSequence>,
    account_ids: Arc<IdSequence>,
}

impl InMemoryUserRepo {
    pub fn new(
        users: Arc<Mutex<Vec<User>>>,
        accounts: Arc<Mutex<Vec<Account>>>,
        user_ids: Arc<IdSequence>,
        account_ids: Arc<IdSequence>,
    ) -> Self {
        Self {
            users,
            accounts,
            user_ids,
            account_ids,
        }
    }

    fn attach_accounts(&self, mut user: User) -> User {
        let user_id = user.id;
        user.accounts = find_by(&self.accounts, |a: &Account| a.user_id == user_id);
        user
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<User> {
        let mut row = user.clone();
        row.id = self.user_ids.next();

        let mut account_rows = Vec::with_capacity(user.accounts.len());
        for account in &user.accounts {
            let mut account = account.clone();
            account.id = self.account_ids.next();
            account.user_id = row.id;
            insert(&account, &self.accounts);
            account_rows.push(account);
        }

        row.accounts = Vec::new();
        insert(&row, &self.users);

        row.accounts = account_rows;
        Ok(row)
    }

    async fn save(&self, user: &User) -> anyhow::Result<User> {
        let mut row = user.clone();
        row.accounts = Vec::new();
        save(&row, &self.users);
        Ok(row)
    }

    async fn save_with_accounts(&self, user: &User) -> anyhow::Result<User> {
        let mut row = user.clone();
        row.accounts = Vec::new();
        save(&row, &self.users);

        let mut account_rows = Vec::with_capacity(user.accounts.len());
        for account in &user.accounts {
            let mut account = account.clone();
            account.user_id = row.id;
            if account.id == 0 || find(&account.id, &self.accounts).is_none() {
                account.id = self.account_ids.next();
                insert(&account, &self.accounts);
            } else {
                save(&account, &self.accounts);
            }
            account_rows.push(account);
        }

        // Rows the caller left out of the set are gone after the save.
        let user_id = row.id;
        find_and_delete_by(&self.accounts, |a: &Account| {
            a.user_id == user_id && !account_rows.iter().any(|kept| kept.id == a.id)
        });

        row.accounts = account_rows;
        Ok(row)
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users).map(|user| self.attach_accounts(user))
    }

    async fn find_all(&self) -> Vec<User> {
        find_by(&self.users, |_: &User| true)
            .into_iter()
            .map(|user| self.attach_accounts(user))
            .collect()
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let mut user = delete(user_id, &self.users)?;
        user.accounts = find_and_delete_by(&self.accounts, |a: &Account| a.user_id == *user_id);
        Some(user)
    }
}
