mod account;
mod shared;
mod user;

pub use account::{Account, AccountType, InvalidAccountType};
pub use shared::entity::{Entity, ID};
pub use user::User;
