//! Session factory for provisioning bearer tokens in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a session for the user with a unique token.
///
/// The returned session's `token` field is what tests put in the
/// `Authorization: Bearer` header.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    entity::session::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token: ActiveValue::Set(format!("test-token-{}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
