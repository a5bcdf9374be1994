mod account;
mod shared;
mod user;

use account::InMemoryAccountRepo;
use shared::inmemory_repo::IdSequence;
use std::sync::{Arc, Mutex};
use user::InMemoryUserRepo;

pub use account::IAccountRepo;
pub use shared::repo::DeleteResult;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub accounts: Arc<dyn IAccountRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        // Both repos observe the same account rows so that cascades done
        // through the user repo show up in the account repo and vice versa.
        let users = Arc::new(Mutex::new(Vec::new()));
        let accounts = Arc::new(Mutex::new(Vec::new()));
        let user_ids = Arc::new(IdSequence::new());
        let account_ids = Arc::new(IdSequence::new());

        Self {
            users: Arc::new(InMemoryUserRepo::new(
                users,
                accounts.clone(),
                user_ids,
                account_ids,
            )),
            accounts: Arc::new(InMemoryAccountRepo::new(accounts)),
        }
    }
}
