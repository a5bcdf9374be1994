use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use banka_domain::ID;
use thiserror::Error;

/// Business failures travel as plain text in a 200 response; consumers of
/// this API read the body, not the status code. Unexpected store faults are
/// flattened into the same kind of response at this boundary.
#[derive(Error, Debug)]
pub enum BankaError {
    #[error("Internal server error")]
    InternalError,
    #[error("User not found for this id ::{0}")]
    UserNotFound(ID),
    #[error("The given user for updation was not found !!{0}")]
    UserNotFoundForUpdate(ID),
    #[error("At least one account must be associated with user while creating user.")]
    AccountsRequired,
    #[error(
        "Please check the account type !! We do only support 'savings' and 'salaried' type of accounts."
    )]
    UnsupportedAccountType,
    #[error("User you are trying to delete does not exist !")]
    DeleteNonExistingUser,
    #[error("Unknown field for partial update: `{0}`")]
    UnknownPatchField(String),
    #[error("Invalid value for partial update field: `{0}`")]
    InvalidPatchFieldValue(String),
}

impl actix_web::error::ResponseError for BankaError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(self.to_string())
    }
}
