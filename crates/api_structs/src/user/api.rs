use banka_domain::ID;
use serde::Deserialize;

use crate::dtos::UserDTO;

pub mod get_users {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;
}

pub mod get_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserDTO;
}

pub mod create_user {
    use super::*;

    pub type RequestBody = UserDTO;

    pub type APIResponse = UserDTO;
}

pub mod update_user {
    use super::*;

    pub type RequestBody = UserDTO;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserDTO;
}

pub mod patch_user {
    use super::*;
    use std::collections::HashMap;

    /// Free-form field map, one entry per scalar to overwrite.
    pub type RequestBody = HashMap<String, serde_json::Value>;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }
}

pub mod delete_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }
}
