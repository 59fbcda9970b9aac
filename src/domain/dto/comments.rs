//! 댓글 검색 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::comment::CommentSearch;
use crate::repositories::comments::model::{CommentSortType, SearchCommentCriteria};

/// 댓글 검색 요청
///
/// 외부 웹 계층에서 요청 파라미터로 전달됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentSearchRequest {
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub user_id: Option<i64>,
    pub item_id: Option<i64>,
    /// 답변이 달린 댓글 제외 여부
    #[serde(default)]
    pub exclude_answered: bool,
    pub sort_type: CommentSortType,
    /// 페이지 크기
    #[validate(range(min = 1, message = "size는 1 이상이어야 합니다"))]
    pub size: i64,
    pub next_search_after: Option<String>,
    #[serde(default)]
    pub with_total_count: bool,
}

impl CommentSearchRequest {
    /// 리포지토리 계층의 검색 조건으로 변환합니다.
    pub fn to_criteria(&self) -> SearchCommentCriteria {
        SearchCommentCriteria {
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            user_id: self.user_id,
            item_id: self.item_id,
            exclude_answered: self.exclude_answered,
            size: self.size,
            sort_type: self.sort_type,
            next_search_after: self.next_search_after.clone(),
            with_total_count: self.with_total_count,
        }
    }
}

/// 댓글 검색 결과 한 행의 응답 표현
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSearchResponse {
    pub comment_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub item_id: i64,
    pub user_id: i64,
}

impl CommentSearchResponse {
    pub fn of(row: CommentSearch) -> Self {
        Self {
            comment_id: row.comment_id,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            item_id: row.item_id,
            user_id: row.user_id,
        }
    }
}
