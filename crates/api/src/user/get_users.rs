use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use banka_api_structs::dtos::UserDTO;
use banka_api_structs::get_users::*;
use banka_domain::User;
use banka_infra::BankaContext;

pub async fn get_users_controller(
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let usecase = GetUsersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let users: APIResponse = usecase_res.users.into_iter().map(UserDTO::new).collect();
            HttpResponse::Ok().json(users)
        })
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct GetUsersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub users: Vec<User>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BankaError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUsersUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        let users = ctx.repos.users.find_all().await;

        Ok(UseCaseRes { users })
    }
}
