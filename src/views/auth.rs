use serde::{Deserialize, Serialize};

use crate::models::users;

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub pid: String,
    pub name: String,
    pub is_admin: bool,
}

impl LoginResponse {
    #[must_use]
    pub fn new(user: &users::Model, token: &str, is_admin: bool) -> Self {
        Self {
            token: token.to_string(),
            pid: user.pid.to_string(),
            name: user.name.clone(),
            is_admin,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CurrentResponse {
    pub pid: String,
    pub name: String,
    pub email: String,
    pub want_newsletter: bool,
    pub groups: Vec<String>,
}

impl CurrentResponse {
    #[must_use]
    pub fn new(user: &users::Model, groups: Vec<String>) -> Self {
        Self {
            pid: user.pid.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            want_newsletter: user.want_newsletter,
            groups,
        }
    }
}
