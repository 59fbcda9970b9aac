//! # 댓글 검색 리포지토리
//!
//! 조건 객체 하나로 필터, 조인, 정렬, LIMIT을 하나의 쿼리로 합성해서
//! 실행하고, 요청 시 동일한 필터로 카운트 쿼리를 한 번 더 실행합니다.
//!
//! ## 쿼리 구성
//!
//! 댓글은 카테고리/서브카테고리 필터를 지원하기 위해 항상
//! `item_subcategory → subcategory → category` 계층을 조인합니다.
//! WHERE 절은 [`model::filters_by_params`]가 만든 필터들과 커서 필터의
//! 명시적 AND 결합입니다.
//!
//! ## 실행 보장
//!
//! - 본 쿼리는 `size`개를 초과하는 행을 반환하지 않습니다.
//! - 정렬 타입이 구현되지 않은 경우 어느 쿼리도 실행되기 전에
//!   실패합니다. 본 쿼리만 실행되고 카운트 쿼리가 생략되는 일은 없습니다.
//! - 본 쿼리와 카운트 쿼리는 하나의 읽기 전용 트랜잭션에서 실행되어
//!   동일한 스냅샷을 봅니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use sqlx::{Postgres, QueryBuilder};
use validator::Validate;

use crate::db::Database;
use crate::domain::models::comment::CommentSearch;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::common::PageResult;

use super::model::{self, CommentFilter, SearchCommentCriteria};

/// 댓글 검색 본 쿼리의 SELECT/FROM/JOIN 부분
const SELECT_COMMENT_SEARCH: &str = "SELECT comment.id AS comment_id, comment.content, \
     comment.created_at, comment.updated_at, comment.item_id, comment.user_id \
     FROM comment \
     JOIN item_subcategory ON item_subcategory.item_id = comment.item_id \
     JOIN subcategory ON subcategory.id = item_subcategory.subcategory_id \
     JOIN category ON category.id = subcategory.category_id";

/// 카운트 쿼리: 동일한 FROM/JOIN에 count만 계산 (정렬/LIMIT 없음)
const COUNT_COMMENT_SEARCH: &str = "SELECT count(comment.id) \
     FROM comment \
     JOIN item_subcategory ON item_subcategory.item_id = comment.item_id \
     JOIN subcategory ON subcategory.id = item_subcategory.subcategory_id \
     JOIN category ON category.id = subcategory.category_id";

/// 댓글 검색 리포지토리 trait
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 조건에 맞는 댓글 한 페이지를 조회합니다.
    async fn search_comment(
        &self,
        criteria: &SearchCommentCriteria,
    ) -> AppResult<PageResult<CommentSearch>>;
}

/// PostgreSQL 댓글 검색 리포지토리 구현
pub struct PgCommentRepository {
    db: Arc<Database>,
}

impl PgCommentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn search_comment(
        &self,
        criteria: &SearchCommentCriteria,
    ) -> AppResult<PageResult<CommentSearch>> {
        criteria
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // 필터와 정렬을 먼저 확정한다. 구현되지 않은 정렬 타입은
        // 여기서 실패하므로 쿼리가 부분적으로 실행되는 일이 없다.
        let mut filters = model::filters_by_params(criteria);
        if let Some(cursor_filter) = model::filter_by_cursor(criteria)? {
            filters.push(cursor_filter);
        }
        let order_clause = criteria.sort_type.order_clause()?;

        let mut tx = self.db.begin_read_only().await?;

        let mut query = QueryBuilder::new(SELECT_COMMENT_SEARCH);
        push_where(&mut query, &filters);
        query.push(" ");
        query.push(order_clause);
        query.push(" LIMIT ");
        query.push_bind(criteria.size);

        let items: Vec<CommentSearch> = query
            .build_query_as()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let total_count = if criteria.with_total_count {
            let mut count_query = QueryBuilder::new(COUNT_COMMENT_SEARCH);
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

/// 필터들을 명시적 AND 결합으로 WHERE 절에 추가합니다.
fn push_where(query: &mut QueryBuilder<'_, Postgres>, filters: &[CommentFilter]) {
    for (i, filter) in filters.iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        filter.push_condition(query);
    }
}

/// 다음 페이지 커서를 계산합니다.
///
/// 조회된 행 수가 요청한 size와 같을 때만(가득 찬 페이지) 마지막 행의
/// 정렬 키를 인코딩해서 반환합니다. 모자란 페이지는 데이터 소진을
/// 의미하므로 None을 반환합니다.
fn next_search_after(
    items: &[CommentSearch],
    criteria: &SearchCommentCriteria,
) -> AppResult<Option<String>> {
    if items.len() as i64 != criteria.size {
        return Ok(None);
    }

    // items.len() == size >= 1 이므로 마지막 행은 항상 존재한다
    let last = match items.last() {
        Some(last) => last,
        None => return Ok(None),
    };
    debug!("last element of full page = {:?}", last);

    Ok(Some(criteria.sort_type.next_search_after(last)?))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::repositories::common::SearchAfterEncoder;
    use crate::repositories::comments::model::CommentSortType;

    fn criteria(size: i64) -> SearchCommentCriteria {
        SearchCommentCriteria {
            category_id: None,
            subcategory_id: None,
            user_id: None,
            item_id: None,
            exclude_answered: false,
            size,
            sort_type: CommentSortType::Recent,
            next_search_after: None,
            with_total_count: false,
        }
    }

    fn row(comment_id: i64) -> CommentSearch {
        CommentSearch {
            comment_id,
            content: format!("comment {}", comment_id),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
            item_id: 1,
            user_id: 1,
        }
    }

    #[test]
    fn test_push_where_with_no_filters_adds_nothing() {
        let mut query = QueryBuilder::new(SELECT_COMMENT_SEARCH);
        push_where(&mut query, &[]);
        assert!(!query.sql().contains("WHERE"));
    }

    #[test]
    fn test_push_where_joins_filters_with_and() {
        let mut query = QueryBuilder::<Postgres>::new("SELECT 1 FROM comment");
        push_where(
            &mut query,
            &[
                CommentFilter::CategoryEq(1),
                CommentFilter::UserIdEq(3),
                CommentFilter::WithoutAnswer,
                CommentFilter::IdLt(9),
            ],
        );

        let sql = query.sql().to_string();
        assert!(sql.contains(" WHERE category.id = $1"));
        assert!(sql.contains(" AND comment.user_id = $2"));
        assert!(sql.contains(" AND comment.id NOT IN (SELECT answer.comment_id FROM answer)"));
        assert!(sql.contains(" AND comment.id < $3"));
    }

    #[test]
    fn test_full_primary_query_shape() {
        let criteria = criteria(2);
        let mut filters = model::filters_by_params(&criteria);
        if let Some(f) = model::filter_by_cursor(&criteria).unwrap() {
            filters.push(f);
        }

        let mut query = QueryBuilder::new(SELECT_COMMENT_SEARCH);
        push_where(&mut query, &filters);
        query.push(" ");
        query.push(criteria.sort_type.order_clause().unwrap());
        query.push(" LIMIT ");
        query.push_bind(criteria.size);

        let sql = query.sql().to_string();
        assert!(sql.contains("JOIN item_subcategory ON item_subcategory.item_id = comment.item_id"));
        assert!(sql.contains("JOIN subcategory ON subcategory.id = item_subcategory.subcategory_id"));
        assert!(sql.contains("JOIN category ON category.id = subcategory.category_id"));
        assert!(sql.ends_with("ORDER BY comment.id DESC LIMIT $1"));
    }

    #[test]
    fn test_count_query_has_no_order_or_limit() {
        assert!(!COUNT_COMMENT_SEARCH.contains("ORDER BY"));
        assert!(!COUNT_COMMENT_SEARCH.contains("LIMIT"));
        assert!(COUNT_COMMENT_SEARCH.contains("count(comment.id)"));
    }

    #[test]
    fn test_next_search_after_present_on_full_page() {
        let items = vec![row(10), row(9)];
        let cursor = next_search_after(&items, &criteria(2)).unwrap();

        let decoded = SearchAfterEncoder::decode_single(&cursor.unwrap()).unwrap();
        assert_eq!(decoded, "9");
    }

    #[test]
    fn test_next_search_after_absent_on_short_page() {
        let items = vec![row(10)];
        assert_eq!(next_search_after(&items, &criteria(2)).unwrap(), None);
    }

    #[test]
    fn test_next_search_after_absent_on_empty_page() {
        assert_eq!(next_search_after(&[], &criteria(2)).unwrap(), None);
    }

    #[test]
    fn test_next_search_after_unimplemented_sort_type_fails_loud() {
        let criteria = SearchCommentCriteria {
            sort_type: CommentSortType::Item,
            ..criteria(2)
        };
        let items = vec![row(10), row(9)];

        assert!(matches!(
            next_search_after(&items, &criteria),
            Err(AppError::ValidationError(_))
        ));
    }
}
