//! 리뷰 검색 조건 모델
//!
//! 댓글 검색과 동일한 설계를 따릅니다: 닫힌 정렬 타입 열거형, 필드당
//! 하나의 선택적 필터, 구현되지 않은 정렬 타입에 대한 명시적 실패.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};
use validator::Validate;

use crate::domain::models::review::Review;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::common::SearchAfterEncoder;

/// 리뷰 검색 정렬 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewSortType {
    /// 최신순: 리뷰 id 내림차순
    Recent,
    /// 별점순: 선언만 되어 있고 아직 구현되지 않은 정렬 타입
    Star,
}

impl fmt::Display for ReviewSortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewSortType::Recent => write!(f, "RECENT"),
            ReviewSortType::Star => write!(f, "STAR"),
        }
    }
}

impl ReviewSortType {
    pub fn order_clause(&self) -> AppResult<&'static str> {
        match self {
            ReviewSortType::Recent => Ok("ORDER BY review.id DESC"),
            other => Err(unimplemented_sort_type(other)),
        }
    }

    pub fn cursor_filter(&self, next_search_after: &str) -> AppResult<ReviewFilter> {
        match self {
            ReviewSortType::Recent => {
                let decoded = SearchAfterEncoder::decode_single(next_search_after)?;
                let review_id = decoded.parse::<i64>().map_err(|_| {
                    AppError::ValidationError(format!(
                        "invalid search after cursor. nextSearchAfter = {}",
                        next_search_after
                    ))
                })?;
                Ok(ReviewFilter::IdLt(review_id))
            }
            other => Err(unimplemented_sort_type(other)),
        }
    }

    pub fn next_search_after(&self, last: &Review) -> AppResult<String> {
        match self {
            ReviewSortType::Recent => Ok(SearchAfterEncoder::encode(&[&last.id.to_string()])),
            other => Err(unimplemented_sort_type(other)),
        }
    }
}

fn unimplemented_sort_type(sort_type: &ReviewSortType) -> AppError {
    AppError::ValidationError(format!("unimplemented sort type. sortType = {}", sort_type))
}

/// 리뷰 검색 조건
#[derive(Debug, Clone, Validate)]
pub struct SearchReviewCriteria {
    pub user_id: Option<i64>,
    pub item_id: Option<i64>,
    #[validate(range(min = 1, message = "size는 1 이상이어야 합니다"))]
    pub size: i64,
    pub sort_type: ReviewSortType,
    pub next_search_after: Option<String>,
    pub with_total_count: bool,
}

/// 리뷰 검색 필터 하나
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFilter {
    UserIdEq(i64),
    ItemIdEq(i64),
    IdLt(i64),
}

impl ReviewFilter {
    pub fn push_condition(&self, query: &mut QueryBuilder<'_, Postgres>) {
        match self {
            ReviewFilter::UserIdEq(user_id) => {
                query.push("review.user_id = ");
                query.push_bind(*user_id);
            }
            ReviewFilter::ItemIdEq(item_id) => {
                query.push("review.item_id = ");
                query.push_bind(*item_id);
            }
            ReviewFilter::IdLt(review_id) => {
                query.push("review.id < ");
                query.push_bind(*review_id);
            }
        }
    }
}

/// 저장할 새 리뷰
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: i64,
    pub item_id: i64,
    pub star: i32,
    pub content: String,
}

/// 조건 객체의 선택 필드들로부터 필터 목록을 만듭니다.
pub fn filters_by_params(criteria: &SearchReviewCriteria) -> Vec<ReviewFilter> {
    let mut filters = Vec::new();

    if let Some(user_id) = criteria.user_id {
        filters.push(ReviewFilter::UserIdEq(user_id));
    }
    if let Some(item_id) = criteria.item_id {
        filters.push(ReviewFilter::ItemIdEq(item_id));
    }

    filters
}

/// 커서가 있으면 정렬 타입에 맞는 커서 비교 필터를 만듭니다.
pub fn filter_by_cursor(criteria: &SearchReviewCriteria) -> AppResult<Option<ReviewFilter>> {
    match &criteria.next_search_after {
        None => Ok(None),
        Some(token) => Ok(Some(criteria.sort_type.cursor_filter(token)?)),
    }
}
