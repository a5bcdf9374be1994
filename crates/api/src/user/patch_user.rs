use crate::error::BankaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use banka_api_structs::dtos::UserDTO;
use banka_api_structs::patch_user::*;
use banka_domain::{User, ID};
use banka_infra::BankaContext;
use serde_json::Value;
use std::collections::HashMap;

pub async fn patch_user_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<BankaContext>,
) -> Result<HttpResponse, BankaError> {
    let usecase = PatchUserUseCase {
        user_id: path_params.user_id,
        fields: body.into_inner(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(usecase_res.user))
        .map_err(BankaError::from)
}

#[derive(Debug)]
pub struct PatchUserUseCase {
    pub user_id: ID,
    pub fields: HashMap<String, Value>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    /// The saved record in its storage shape, so no accounts.
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
    UnknownField(String),
    InvalidFieldValue(String),
    StorageError,
}

impl From<UseCaseError> for BankaError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(id) => Self::UserNotFoundForUpdate(id),
            UseCaseError::UnknownField(field) => Self::UnknownPatchField(field),
            UseCaseError::InvalidFieldValue(field) => Self::InvalidPatchFieldValue(field),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

fn string_value(field: &str, value: &Value) -> Result<String, UseCaseError> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| UseCaseError::InvalidFieldValue(field.to_string()))
}

#[async_trait::async_trait(?Send)]
impl UseCase for PatchUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "PatchUser";

    async fn execute(&mut self, ctx: &BankaContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseError::UserNotFound(self.user_id)),
        };
        let mut dto = UserDTO::new(user);

        // The updatable fields are a closed set; anything else is refused
        // instead of blowing up halfway through a write.
        for (field, value) in &self.fields {
            match field.as_str() {
                "firstName" => dto.first_name = Some(string_value(field, value)?),
                "lastName" => dto.last_name = Some(string_value(field, value)?),
                "phoneNumber" => {
                    let number = value
                        .as_i64()
                        .ok_or_else(|| UseCaseError::InvalidFieldValue(field.clone()))?;
                    dto.phone_number = Some(number);
                }
                "address" => dto.address = Some(string_value(field, value)?),
                "emailId" => dto.email_id = Some(string_value(field, value)?),
                unknown => return Err(UseCaseError::UnknownField(unknown.to_string())),
            }
        }

        // Back to the storage shape; the account rows are not part of a
        // partial update and stay as they are.
        let record = User {
            id: dto.user_id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            phone_number: dto.phone_number.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            email_id: dto.email_id.unwrap_or_default(),
            accounts: Vec::new(),
        };

        let user = ctx
            .repos
            .users
            .save(&record)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { user })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use banka_domain::{Account, AccountType};

    async fn seed_user(ctx: &BankaContext) -> User {
        let mut user = User::new(
            "Ada".into(),
            "Lovelace".into(),
            4799999999,
            "London".into(),
            "ada@banka.io".into(),
        );
        user.accounts = vec![Account::new(100.0, AccountType::Savings, 0)];
        ctx.repos.users.insert(&user).await.unwrap()
    }

    fn fields() -> HashMap<String, Value> {
        let mut fields = HashMap::new();
        fields.insert("address".to_string(), Value::String("USA".to_string()));
        fields.insert("phoneNumber".to_string(), Value::from(4712i64));
        fields
    }

    #[actix_web::test]
    async fn it_is_idempotent_on_the_patched_fields() {
        let ctx = BankaContext::create_inmemory();
        let user = seed_user(&ctx).await;

        for _ in 0..2 {
            let mut usecase = PatchUserUseCase {
                user_id: user.id,
                fields: fields(),
            };
            let res = usecase.execute(&ctx).await.unwrap();
            assert_eq!(res.user.address, "USA");
            assert_eq!(res.user.phone_number, 4712);
            // Untouched fields survive the patch.
            assert_eq!(res.user.first_name, "Ada");
        }

        // Account rows are not part of a partial update.
        assert_eq!(ctx.repos.accounts.find_by_user(&user.id).await.len(), 1);
    }

    #[actix_web::test]
    async fn it_refuses_unknown_fields() {
        let ctx = BankaContext::create_inmemory();
        let user = seed_user(&ctx).await;

        let mut fields = HashMap::new();
        fields.insert("shoeSize".to_string(), Value::from(43));
        let mut usecase = PatchUserUseCase {
            user_id: user.id,
            fields,
        };
        match usecase.execute(&ctx).await {
            Err(UseCaseError::UnknownField(field)) => assert_eq!(field, "shoeSize"),
            other => panic!("Expected unknown field error, got: {:?}", other),
        }

        // The record is untouched.
        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.address, "London");
    }

    #[actix_web::test]
    async fn it_refuses_wrongly_typed_values() {
        let ctx = BankaContext::create_inmemory();
        let user = seed_user(&ctx).await;

        let mut fields = HashMap::new();
        fields.insert(
            "phoneNumber".to_string(),
            Value::String("not-a-number".to_string()),
        );
        let mut usecase = PatchUserUseCase {
            user_id: user.id,
            fields,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidFieldValue(_))
        ));
    }

    #[actix_web::test]
    async fn it_signals_absence() {
        let ctx = BankaContext::create_inmemory();

        let mut usecase = PatchUserUseCase {
            user_id: 42,
            fields: fields(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::UserNotFound(42))
        ));
    }
}
