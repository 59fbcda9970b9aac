//! 리뷰 리포지토리 구현
//!
//! 리뷰 CRUD와 커서 기반 리뷰 검색을 담당합니다. 검색 경로는 댓글 검색과
//! 동일한 구성(필터 합성 → 정렬 확정 → 읽기 전용 트랜잭션에서 본 쿼리 +
//! 선택적 카운트 쿼리)을 따르되, 카테고리 계층 조인이 필요 없습니다.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use validator::Validate;

use crate::db::Database;
use crate::domain::models::review::Review;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::common::PageResult;

use super::model::{self, NewReview, ReviewFilter, SearchReviewCriteria};

const SELECT_REVIEW: &str = "SELECT review.id, review.user_id, review.item_id, review.star, \
     review.content, review.created_at, review.updated_at FROM review";

const COUNT_REVIEW: &str = "SELECT count(review.id) FROM review";

/// 리뷰 리포지토리 trait
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn save(&self, new_review: NewReview) -> AppResult<Review>;

    async fn find_by_id(&self, review_id: i64) -> AppResult<Option<Review>>;

    async fn find_by_user_and_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> AppResult<Option<Review>>;

    /// 별점과 본문을 수정하고 수정된 리뷰를 반환합니다.
    async fn update_content(
        &self,
        review_id: i64,
        star: i32,
        content: &str,
    ) -> AppResult<Option<Review>>;

    /// 삭제 성공 여부를 반환합니다.
    async fn delete(&self, review_id: i64) -> AppResult<bool>;

    /// 조건에 맞는 리뷰 한 페이지를 조회합니다.
    async fn search_review(
        &self,
        criteria: &SearchReviewCriteria,
    ) -> AppResult<PageResult<Review>>;
}

/// PostgreSQL 리뷰 리포지토리 구현
pub struct PgReviewRepository {
    db: Arc<Database>,
}

impl PgReviewRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn save(&self, new_review: NewReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO review (user_id, item_id, star, content, created_at) \
             VALUES ($1, $2, $3, $4, now()) \
             RETURNING id, user_id, item_id, star, content, created_at, updated_at",
        )
        .bind(new_review.user_id)
        .bind(new_review.item_id)
        .bind(new_review.star)
        .bind(&new_review.content)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, review_id: i64) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT id, user_id, item_id, star, content, created_at, updated_at \
             FROM review WHERE id = $1",
        )
        .bind(review_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_and_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT id, user_id, item_id, star, content, created_at, updated_at \
             FROM review WHERE user_id = $1 AND item_id = $2",
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_content(
        &self,
        review_id: i64,
        star: i32,
        content: &str,
    ) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>(
            "UPDATE review SET star = $2, content = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING id, user_id, item_id, star, content, created_at, updated_at",
        )
        .bind(review_id)
        .bind(star)
        .bind(content)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, review_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM review WHERE id = $1")
            .bind(review_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_review(
        &self,
        criteria: &SearchReviewCriteria,
    ) -> AppResult<PageResult<Review>> {
        criteria
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut filters = model::filters_by_params(criteria);
        if let Some(cursor_filter) = model::filter_by_cursor(criteria)? {
            filters.push(cursor_filter);
        }
        let order_clause = criteria.sort_type.order_clause()?;

        let mut tx = self.db.begin_read_only().await?;

        let mut query = QueryBuilder::new(SELECT_REVIEW);
        push_where(&mut query, &filters);
        query.push(" ");
        query.push(order_clause);
        query.push(" LIMIT ");
        query.push_bind(criteria.size);

        let items: Vec<Review> = query
            .build_query_as()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let total_count = if criteria.with_total_count {
            let mut count_query = QueryBuilder::new(COUNT_REVIEW);
            push_where(&mut count_query, &filters);

            let count: i64 = count_query
                .build_query_scalar()
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Some(count)
        } else {
            None
        };

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let next_search_after = next_search_after(&items, criteria)?;

        Ok(PageResult {
            items,
            next_search_after,
            total_count,
        })
    }
}

fn push_where(query: &mut QueryBuilder<'_, Postgres>, filters: &[ReviewFilter]) {
    for (i, filter) in filters.iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        filter.push_condition(query);
    }
}

/// 가득 찬 페이지일 때만 마지막 행의 정렬 키로 다음 커서를 만듭니다.
fn next_search_after(
    items: &[Review],
    criteria: &SearchReviewCriteria,
) -> AppResult<Option<String>> {
    if items.len() as i64 != criteria.size {
        return Ok(None);
    }

    let last = match items.last() {
        Some(last) => last,
        None => return Ok(None),
    };

    Ok(Some(criteria.sort_type.next_search_after(last)?))
}
