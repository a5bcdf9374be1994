mod create_user;
mod delete_user;
mod get_user;
mod get_users;
mod patch_user;
mod update_user;

use actix_web::web;
use banka_api_structs::dtos::AccountDTO;
use banka_domain::{Account, AccountType, InvalidAccountType, ID};
use create_user::create_user_controller;
use delete_user::delete_user_controller;
use get_user::get_user_controller;
use get_users::get_users_controller;
use patch_user::patch_user_controller;
use update_user::update_user_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(get_users_controller));
    cfg.route("/users", web::post().to(create_user_controller));
    cfg.route("/users/{user_id}", web::get().to(get_user_controller));
    cfg.route("/users/{user_id}", web::put().to(update_user_controller));
    cfg.route("/users/{user_id}", web::patch().to(patch_user_controller));
    cfg.route("/users/{user_id}", web::delete().to(delete_user_controller));
}

/// Splits a payload's accounts into the ones carrying a supported type and
/// the rest. A missing `accountType` lands in the not-allowed bucket.
pub(crate) fn partition_by_account_type(
    accounts: Vec<AccountDTO>,
) -> (Vec<AccountDTO>, Vec<AccountDTO>) {
    accounts.into_iter().partition(|acc| {
        acc.account_type
            .as_deref()
            .map(|kind| kind.parse::<AccountType>().is_ok())
            .unwrap_or(false)
    })
}

/// Wire to storage conversion for one account, linked to its owner.
pub(crate) fn account_from_dto(
    dto: &AccountDTO,
    user_id: ID,
) -> Result<Account, InvalidAccountType> {
    let account_type = dto.account_type.as_deref().unwrap_or_default().parse()?;
    Ok(Account {
        id: dto.account_id,
        balance: dto.balance.unwrap_or_default(),
        account_type,
        user_id,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn account(kind: Option<&str>) -> AccountDTO {
        AccountDTO {
            account_id: 0,
            balance: Some(100.0),
            account_type: kind.map(|k| k.to_string()),
        }
    }

    #[test]
    fn it_partitions_accounts_by_supported_type() {
        let accounts = vec![
            account(Some("savings")),
            account(Some("checking")),
            account(Some("salaried")),
            account(Some("Savings")),
            account(None),
        ];
        let (allowed, not_allowed) = partition_by_account_type(accounts);
        assert_eq!(allowed.len(), 2);
        assert_eq!(not_allowed.len(), 3);
    }

    #[test]
    fn it_converts_wire_accounts_to_rows() {
        let row = account_from_dto(&account(Some("salaried")), 7).unwrap();
        assert_eq!(row.user_id, 7);
        assert_eq!(row.account_type, AccountType::Salaried);
        assert_eq!(row.balance, 100.0);

        assert!(account_from_dto(&account(Some("checking")), 7).is_err());
        assert!(account_from_dto(&account(None), 7).is_err());
    }
}
