//! User entity <-> model mapper

use pairchat_core::entities::User;
use pairchat_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            account_id: Snowflake::new(model.account_id),
            email: model.email,
            name: model.name,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed view of a User entity for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub account_id: i64,
    pub email: &'a str,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            account_id: user.account_id.into_inner(),
            email: &user.email,
            name: &user.name,
            image_url: user.image_url.as_deref(),
        }
    }
}
