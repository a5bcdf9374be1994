use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use banka_api_structs::delete_user::*;
use banka_domain::{User, ID};
use banka_infra::BankaContext;

pub async fn delete_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let user_id = path_params.user_id;
    let usecase = DeleteUserUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().body(format!("User with id {} deleted successfully.", user_id))
        })
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct DeleteUserUseCase {
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
            UseCaseError::UserNotFound(_) => Self::DeleteNonExistingUser,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        // The store cascades to the owned account rows.
        match ctx.repos.users.delete(&self.user_id).await {
            Some(user) => Ok(UseCaseRes { user }),
            None => Err(UseCaseError::UserNotFound(self.user_id)),
        }
    }
}
