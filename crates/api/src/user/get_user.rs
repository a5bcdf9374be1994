use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use banka_api_structs::dtos::UserDTO;
use banka_api_structs::get_user::*;
use banka_domain::{User, ID};
use banka_infra::BankaContext;

pub async fn get_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let usecase = GetUserUseCase {
        user_id: path_params.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(UserDTO::new(usecase_res.user)))
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct GetUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
}

impl From<UseCaseError> for BankaError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(id) => Self::UserNotFound(id),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseError::UserNotFound(self.user_id)),
        };

        Ok(UseCaseRes { user })
    }
}
