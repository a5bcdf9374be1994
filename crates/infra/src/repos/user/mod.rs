mod inmemory;

use banka_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Assigns ids and inserts the user together with its account rows.
    async fn insert(&self, user: &User) -> anyhow::Result<User>;
    /// Overwrites the scalar columns only, account rows are left untouched.
    async fn save(&self, user: &User) -> anyhow::Result<User>;
    /// Overwrites the scalars and replaces the owned account set in one go:
    /// unknown account ids are inserted with fresh ids, known ids are
    /// updated and rows missing from the set are deleted.
    async fn save_with_accounts(&self, user: &User) -> anyhow::Result<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_all(&self) -> Vec<User>;
    /// Deletes the user and cascades to its account rows.
    async fn delete(&self, user_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::BankaContext;
    use banka_domain::{Account, AccountType, User};

    fn dummy_user() -> User {
        let mut user = User::new(
            "Ada".into(),
            "Lovelace".into(),
            4799999999,
            "London".into(),
            "ada@banka.io".into(),
        );
        user.accounts = vec![
            Account::new(100.0, AccountType::Savings, 0),
            Account::new(2500.0, AccountType::Salaried, 0),
        ];
        user
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_cascades_account_rows() {
        let ctx = BankaContext::create_inmemory();

        let user = ctx.repos.users.insert(&dummy_user()).await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.accounts.len(), 2);
        for account in &user.accounts {
            assert!(account.id > 0);
            assert_eq!(account.user_id, user.id);
        }

        let found = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(found.accounts, user.accounts);
        assert_eq!(
            ctx.repos.accounts.find_by_user(&user.id).await,
            user.accounts
        );
    }

    #[tokio::test]
    async fn save_leaves_account_rows_untouched() {
        let ctx = BankaContext::create_inmemory();

        let mut user = ctx.repos.users.insert(&dummy_user()).await.unwrap();
        user.address = "Paris".into();
        user.accounts = Vec::new();
        ctx.repos.users.save(&user).await.unwrap();

        let found = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(found.address, "Paris");
        assert_eq!(found.accounts.len(), 2);
    }

    #[tokio::test]
    async fn save_with_accounts_replaces_the_owned_set() {
        let ctx = BankaContext::create_inmemory();

        let mut user = ctx.repos.users.insert(&dummy_user()).await.unwrap();
        let kept = user.accounts[0].clone();

        // Keep the first row with a new balance, drop the second, add one.
        user.accounts = vec![
            Account {
                balance: 55.5,
                ..kept.clone()
            },
            Account::new(900.0, AccountType::Salaried, user.id),
        ];
        let saved = ctx.repos.users.save_with_accounts(&user).await.unwrap();

        assert_eq!(saved.accounts.len(), 2);
        assert_eq!(saved.accounts[0].id, kept.id);
        assert_eq!(saved.accounts[0].balance, 55.5);
        assert!(saved.accounts[1].id > kept.id);

        let rows = ctx.repos.accounts.find_by_user(&user.id).await;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| saved.accounts.contains(row)));
    }

    #[tokio::test]
    async fn delete_cascades_to_account_rows() {
        let ctx = BankaContext::create_inmemory();

        let user = ctx.repos.users.insert(&dummy_user()).await.unwrap();
        let deleted = ctx.repos.users.delete(&user.id).await.unwrap();
        assert_eq!(deleted.id, user.id);

        assert!(ctx.repos.users.find(&user.id).await.is_none());
        assert!(ctx.repos.accounts.find_by_user(&user.id).await.is_empty());

        // A second delete finds nothing.
        assert!(ctx.repos.users.delete(&user.id).await.is_none());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let ctx = BankaContext::create_inmemory();

        let first = ctx.repos.users.insert(&dummy_user()).await.unwrap();
        let second = ctx.repos.users.insert(&dummy_user()).await.unwrap();

        let all = ctx.repos.users.find_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }
}
