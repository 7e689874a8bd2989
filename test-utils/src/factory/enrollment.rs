//! Enrollment factory for creating test enrollment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an enrollment for the user.
///
/// Each user may hold at most one enrollment; creating a second for the same
/// user violates the unique constraint.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("Enrollee {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
