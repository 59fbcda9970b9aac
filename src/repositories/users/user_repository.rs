//! 사용자 조회 리포지토리
//!
//! 계정 생성/인증은 외부 서비스의 책임이며, 이 리포지토리는 연관 검증에
//! 필요한 조회만 제공합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::models::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 조회 trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>>;

    async fn exists_by_id(&self, user_id: i64) -> AppResult<bool>;
}

/// PostgreSQL 사용자 조회 구현
pub struct PgUserRepository {
    db: Arc<Database>,
}

impl PgUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, email, name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_id(&self, user_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
