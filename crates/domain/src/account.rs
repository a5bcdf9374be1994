use crate::shared::entity::{Entity, ID};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The only account kinds the bank supports. The wire format carries these
/// as the exact lowercase strings `"savings"` and `"salaried"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Salaried,
}

#[derive(Error, Debug)]
pub enum InvalidAccountType {
    #[error("Account type: {0} is not supported")]
    Unsupported(String),
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Savings => write!(f, "savings"),
            Self::Salaried => write!(f, "salaried"),
        }
    }
}

impl FromStr for AccountType {
    type Err = InvalidAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-sensitive on purpose, "Savings" is not a valid wire value.
        match s {
            "savings" => Ok(Self::Savings),
            "salaried" => Ok(Self::Salaried),
            _ => Err(InvalidAccountType::Unsupported(s.to_string())),
        }
    }
}

/// A bank account row. Belongs to exactly one `User` through `user_id`;
/// the back-reference is a storage detail and never leaves the store layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: ID,
    pub balance: f32,
    pub account_type: AccountType,
    pub user_id: ID,
}

impl Account {
    pub fn new(balance: f32, account_type: AccountType, user_id: ID) -> Self {
        Self {
            id: Default::default(),
            balance,
            account_type,
            user_id,
        }
    }
}

impl Entity for Account {
    fn id(&self) -> ID {
        self.id
    }
}
