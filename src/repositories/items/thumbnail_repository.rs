//! 상품 썸네일 리포지토리
//!
//! 상품당 하나의 썸네일 연결을 조회/등록/변경/삭제합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::models::item::ItemThumbnail;
use crate::errors::errors::{AppError, AppResult};

/// 상품 썸네일 리포지토리 trait
#[async_trait]
pub trait ItemThumbnailRepository: Send + Sync {
    async fn find_by_item_id(&self, item_id: i64) -> AppResult<Option<ItemThumbnail>>;

    async fn insert(&self, item_id: i64, attachment_id: i64) -> AppResult<ItemThumbnail>;

    /// 기존 썸네일의 첨부파일을 교체합니다. 변경된 행이 있으면 true.
    async fn update_thumbnail(&self, item_id: i64, attachment_id: i64) -> AppResult<bool>;

    /// 삭제된 행이 있으면 true.
    async fn delete_by_item_id(&self, item_id: i64) -> AppResult<bool>;
}

/// PostgreSQL 상품 썸네일 구현
pub struct PgItemThumbnailRepository {
    db: Arc<Database>,
}

impl PgItemThumbnailRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemThumbnailRepository for PgItemThumbnailRepository {
    async fn find_by_item_id(&self, item_id: i64) -> AppResult<Option<ItemThumbnail>> {
        sqlx::query_as::<_, ItemThumbnail>(
            "SELECT id, attachment_id, item_id FROM item_thumbnail WHERE item_id = $1",
        )
        .bind(item_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, item_id: i64, attachment_id: i64) -> AppResult<ItemThumbnail> {
        // 컬럼 순서와 바인딩 순서를 일치시킨다
        sqlx::query_as::<_, ItemThumbnail>(
            "INSERT INTO item_thumbnail (attachment_id, item_id) VALUES ($1, $2) \
             RETURNING id, attachment_id, item_id",
        )
        .bind(attachment_id)
        .bind(item_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_thumbnail(&self, item_id: i64, attachment_id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE item_thumbnail SET attachment_id = $2 WHERE item_id = $1")
            .bind(item_id)
            .bind(attachment_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_item_id(&self, item_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM item_thumbnail WHERE item_id = $1")
            .bind(item_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
