use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /authenticate`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Identity behind the bearer token of the current request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub subject: String,
    pub name: String,
}
