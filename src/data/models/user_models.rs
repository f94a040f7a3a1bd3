use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::auth_models::validate_password_bytes;
use crate::schema::users;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub display_name: &'a str,
}

#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = users)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.display_name.is_none()
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[serde(rename = "id_usuario")]
    #[validate(length(min = 1, max = 30))]
    pub id: String,
    #[serde(rename = "email_usuario")]
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(rename = "senha")]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
    #[serde(rename = "nome_usuario")]
    #[validate(length(min = 1, max = 60))]
    pub display_name: String,
}

/// Fields a client may change on an existing user. The id is not one of them.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(rename = "email_usuario")]
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[serde(rename = "senha")]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_password_bytes")
    )]
    pub password: Option<String>,
    #[serde(rename = "nome_usuario")]
    #[validate(length(min = 1, max = 60))]
    pub display_name: Option<String>,
}

/// Public view of a user; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "id_usuario")]
    pub id: String,
    #[serde(rename = "email_usuario")]
    pub email: String,
    #[serde(rename = "nome_usuario")]
    pub display_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}
