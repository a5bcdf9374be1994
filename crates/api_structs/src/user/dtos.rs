use banka_domain::{Account, User, ID};
use serde::{Deserialize, Serialize};

fn id_is_unassigned(id: &ID) -> bool {
    *id == 0
}

/// Wire shape of a `User`. Scalars are optional so that PUT payloads can
/// express "keep the stored value" with null. `account` distinguishes
/// three inputs: absent (keep accounts), `[]` (drop all accounts) and a
/// non-empty list (reconcile against the stored set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    #[serde(default, skip_serializing_if = "id_is_unassigned")]
    pub user_id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<AccountDTO>>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            phone_number: Some(user.phone_number),
            address: Some(user.address),
            email_id: Some(user.email_id),
            account: Some(user.accounts.into_iter().map(AccountDTO::new).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    #[serde(default, skip_serializing_if = "id_is_unassigned")]
    pub account_id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl AccountDTO {
    pub fn new(account: Account) -> Self {
        Self {
            account_id: account.id,
            balance: Some(account.balance),
            account_type: Some(account.account_type.to_string()),
        }
    }
}
