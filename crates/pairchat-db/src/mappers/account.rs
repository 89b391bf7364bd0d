//! Account entity <-> model mapper

use pairchat_core::entities::Account;
use pairchat_core::value_objects::Snowflake;

use crate::models::AccountModel;

/// Convert AccountModel to Account entity
///
/// The password hash stays behind: it is only consulted through
/// `AccountRepository::password_hash`.
impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: Snowflake::new(model.id),
            email: model.email,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity_drops_hash() {
        let model = AccountModel {
            id: 5,
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
        };

        let account = Account::from(model);
        assert_eq!(account.id, Snowflake::new(5));
        assert_eq!(account.email, "a@x.com");
    }
}
