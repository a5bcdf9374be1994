use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use crate::user::{account_from_dto, partition_by_account_type};
use actix_web::{web, HttpResponse};
use banka_api_structs::create_user::*;
use banka_api_structs::dtos::UserDTO;
use banka_domain::User;
use banka_infra::BankaContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let mut payload = body.into_inner();

    let accounts = payload.account.take().unwrap_or_default();
    if accounts.is_empty() {
        return Err(BankaError::AccountsRequired);
    }
    let (allowed, not_allowed) = partition_by_account_type(accounts);
    if !not_allowed.is_empty() {
        return Err(BankaError::UnsupportedAccountType);
    }
    payload.account = Some(allowed);

    let usecase = CreateUserUseCase { payload };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(usecase_res.user))
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub payload: UserDTO,
}

#[derive(Debug)]
pub struct UseCaseRes {
    /// The payload echoed back; store-assigned ids are not re-read.
    pub user: UserDTO,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidAccountType,
    StorageError,
}

impl From<UseCaseError> for BankaError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidAccountType => Self::UnsupportedAccountType,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        let payload = &self.payload;
        let mut user = User::new(
            payload.first_name.clone().unwrap_or_default(),
            payload.last_name.clone().unwrap_or_default(),
            payload.phone_number.unwrap_or_default(),
            payload.address.clone().unwrap_or_default(),
            payload.email_id.clone().unwrap_or_default(),
        );

        for dto in payload.account.iter().flatten() {
            let account =
                account_from_dto(dto, user.id).map_err(|_| UseCaseError::InvalidAccountType)?;
            user.accounts.push(account);
        }

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            user: self.payload.clone(),
        })
    }
}
