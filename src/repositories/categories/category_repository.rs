//! 카테고리/서브카테고리 리포지토리

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::models::category::Subcategory;
use crate::errors::errors::{AppError, AppResult};

/// 카테고리 리포지토리 trait
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists_by_id(&self, category_id: i64) -> AppResult<bool>;

    /// 같은 카테고리 안에서 이름으로 서브카테고리를 찾습니다.
    async fn find_subcategory_by_name(
        &self,
        category_id: i64,
        name: &str,
    ) -> AppResult<Option<Subcategory>>;

    async fn insert_subcategory(
        &self,
        category_id: i64,
        name: &str,
        name_kor: &str,
    ) -> AppResult<Subcategory>;
}

/// PostgreSQL 카테고리 리포지토리 구현
pub struct PgCategoryRepository {
    db: Arc<Database>,
}

impl PgCategoryRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn exists_by_id(&self, category_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM category WHERE id = $1)")
            .bind(category_id)
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_subcategory_by_name(
        &self,
        category_id: i64,
        name: &str,
    ) -> AppResult<Option<Subcategory>> {
        sqlx::query_as::<_, Subcategory>(
            "SELECT id, category_id, name, name_kor FROM subcategory \
             WHERE category_id = $1 AND name = $2",
        )
        .bind(category_id)
        .bind(name)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert_subcategory(
        &self,
        category_id: i64,
        name: &str,
        name_kor: &str,
    ) -> AppResult<Subcategory> {
        sqlx::query_as::<_, Subcategory>(
            "INSERT INTO subcategory (category_id, name, name_kor) VALUES ($1, $2, $3) \
             RETURNING id, category_id, name, name_kor",
        )
        .bind(category_id)
        .bind(name)
        .bind(name_kor)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
