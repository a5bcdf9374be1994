use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use crate::user::{account_from_dto, partition_by_account_type};
use actix_web::{web, HttpResponse};
use banka_api_structs::dtos::UserDTO;
use banka_api_structs::update_user::*;
use banka_domain::ID;
use banka_infra::BankaContext;

pub async fn update_user_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let mut payload = body.into_inner();

    // An absent or explicitly empty account list skips validation, both
    // carry meaning of their own for the reconciliation below.
    if let Some(accounts) = payload.account.take() {
        if accounts.is_empty() {
            payload.account = Some(accounts);
        } else {
            let (allowed, not_allowed) = partition_by_account_type(accounts);
            if !not_allowed.is_empty() {
                return Err(BankaError::UnsupportedAccountType);
            }
            payload.account = Some(allowed);
        }
    }

    let usecase = UpdateUserUseCase {
        user_id: path_params.user_id,
        payload,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(usecase_res.user))
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct UpdateUserUseCase {
    pub user_id: ID,
    pub payload: UserDTO,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: UserDTO,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
    InvalidAccountType,
    StorageError,
}

impl From<UseCaseError> for BankaError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(id) => Self::UserNotFoundForUpdate(id),
            UseCaseError::InvalidAccountType => Self::UnsupportedAccountType,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateUser";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        let mut user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseError::UserNotFound(self.user_id)),
        };

        // Null scalars mean "keep the stored value".
        let payload = &self.payload;
        if let Some(first_name) = &payload.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &payload.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(phone_number) = payload.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(address) = &payload.address {
            user.address = address.clone();
        }
        if let Some(email_id) = &payload.email_id {
            user.email_id = email_id.clone();
        }

        let existing_accounts = std::mem::take(&mut user.accounts);

        match &payload.account {
            Some(requested) if !requested.is_empty() => {
                let mut final_accounts = Vec::with_capacity(requested.len());
                for dto in requested {
                    match ctx.repos.accounts.find(&dto.account_id).await {
                        Some(mut account) => {
                            // Overwrite the mutable columns only when sent.
                            if let Some(kind) = dto.account_type.as_deref() {
                                account.account_type = kind
                                    .parse()
                                    .map_err(|_| UseCaseError::InvalidAccountType)?;
                            }
                            if let Some(balance) = dto.balance {
                                account.balance = balance;
                            }
                            let account = ctx
                                .repos
                                .accounts
                                .save(&account)
                                .await
                                .map_err(|_| UseCaseError::StorageError)?;
                            final_accounts.push(account);
                        }
                        None => {
                            // Unknown id, becomes a fresh insert on save.
                            let account = account_from_dto(dto, user.id)
                                .map_err(|_| UseCaseError::InvalidAccountType)?;
                            final_accounts.push(account);
                        }
                    }
                }
                // Previously persisted accounts the payload does not
                // mention are carried over rather than dropped.
                for account in existing_accounts {
                    if !final_accounts.iter().any(|kept| kept.id == account.id) {
                        final_accounts.push(account);
                    }
                }
                user.accounts = final_accounts;
            }
            Some(_) => {
                // An explicitly empty list drops every owned account.
                ctx.repos
                    .accounts
                    .delete_by_user(&user.id)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                user.accounts = Vec::new();
            }
            None => {
                user.accounts = ctx.repos.accounts.find_by_user(&user.id).await;
            }
        }

        let user = ctx
            .repos
            .users
            .save_with_accounts(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            user: UserDTO::new(user),
        })
    }
}
