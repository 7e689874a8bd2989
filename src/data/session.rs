//! Session data repository backing the bearer-token middleware.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct SessionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a bearer token to the owning user's id.
    pub async fn find_user_id_by_token(&self, token: &str) -> Result<Option<i32>, DbErr> {
        let session = entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(session.map(|s| s.user_id))
    }
}
