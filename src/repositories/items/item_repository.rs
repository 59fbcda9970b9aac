//! 상품 조회 리포지토리

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::models::item::Item;
use crate::errors::errors::{AppError, AppResult};

/// 상품 조회 trait
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, item_id: i64) -> AppResult<Option<Item>>;

    async fn exists_by_id(&self, item_id: i64) -> AppResult<bool>;
}

/// PostgreSQL 상품 조회 구현
pub struct PgItemRepository {
    db: Arc<Database>,
}

impl PgItemRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_by_id(&self, item_id: i64) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT id, name FROM item WHERE id = $1")
            .bind(item_id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_id(&self, item_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM item WHERE id = $1)")
            .bind(item_id)
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
