//! 홈 캐러셀 리포지토리

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::models::item::ItemHomeCarousel;
use crate::errors::errors::{AppError, AppResult};

/// 홈 캐러셀 리포지토리 trait
#[async_trait]
pub trait ItemHomeCarouselRepository: Send + Sync {
    /// 노출 순서(priority 오름차순, 없는 항목은 마지막)대로 전체 목록을
    /// 조회합니다.
    async fn find_all_ordered(&self) -> AppResult<Vec<ItemHomeCarousel>>;

    async fn insert(
        &self,
        item_id: i64,
        attachment_id: i64,
        priority: Option<i32>,
    ) -> AppResult<ItemHomeCarousel>;

    async fn delete(&self, carousel_id: i64) -> AppResult<bool>;
}

/// PostgreSQL 홈 캐러셀 구현
pub struct PgItemHomeCarouselRepository {
    db: Arc<Database>,
}

impl PgItemHomeCarouselRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemHomeCarouselRepository for PgItemHomeCarouselRepository {
    async fn find_all_ordered(&self) -> AppResult<Vec<ItemHomeCarousel>> {
        sqlx::query_as::<_, ItemHomeCarousel>(
            "SELECT id, item_id, attachment_id, priority FROM item_home_carousel \
             ORDER BY priority ASC NULLS LAST, id ASC",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(
        &self,
        item_id: i64,
        attachment_id: i64,
        priority: Option<i32>,
    ) -> AppResult<ItemHomeCarousel> {
        sqlx::query_as::<_, ItemHomeCarousel>(
            "INSERT INTO item_home_carousel (item_id, attachment_id, priority) \
             VALUES ($1, $2, $3) \
             RETURNING id, item_id, attachment_id, priority",
        )
        .bind(item_id)
        .bind(attachment_id)
        .bind(priority)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, carousel_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM item_home_carousel WHERE id = $1")
            .bind(carousel_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
