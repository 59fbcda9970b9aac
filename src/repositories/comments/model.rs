//! 댓글 검색 조건 모델
//!
//! 검색 조건 값 객체(`SearchCommentCriteria`), 정렬 타입 디스패치
//! (`CommentSortType`), 그리고 타입이 있는 필터 값 객체(`CommentFilter`)를
//! 정의합니다.
//!
//! 필터는 조건 필드 하나당 하나씩 독립적으로 만들어지며, 값이 없는 필드는
//! 필터를 만들지 않습니다. 만들어진 필터들은 쿼리 구성 시점에 명시적
//! AND 결합으로 합쳐집니다.
//!
//! 정렬 타입 디스패치는 상태 없는 순수 매칭입니다. 구현되지 않은 정렬
//! 타입은 어떤 경로(ORDER BY 결정, 커서 조건 결정, 다음 커서 계산)에서든
//! 기본 정렬로 대체되지 않고 해당 값을 명시한 클라이언트 에러로
//! 실패합니다.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};
use validator::Validate;

use crate::domain::models::comment::CommentSearch;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::common::SearchAfterEncoder;

/// 댓글 검색 정렬 타입
///
/// 닫힌 열거형입니다. 와이어 표현은 대문자(`"RECENT"`, `"ITEM"`)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommentSortType {
    /// 최신순: 댓글 id 내림차순. 커서 조건은 `comment.id < 디코딩된 id`.
    Recent,
    /// 상품순: 선언만 되어 있고 아직 구현되지 않은 정렬 타입.
    Item,
}

impl fmt::Display for CommentSortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentSortType::Recent => write!(f, "RECENT"),
            CommentSortType::Item => write!(f, "ITEM"),
        }
    }
}

impl CommentSortType {
    /// 본 쿼리에 사용할 ORDER BY 절을 반환합니다.
    ///
    /// RECENT 정렬의 정렬 키는 기본 키 자체이므로 추가 타이브레이크가
    /// 필요하지 않습니다.
    pub fn order_clause(&self) -> AppResult<&'static str> {
        match self {
            CommentSortType::Recent => Ok("ORDER BY comment.id DESC"),
            other => Err(unimplemented_sort_type(other)),
        }
    }

    /// 커서 위치 "이후"의 행만 선택하는 비교 필터를 반환합니다.
    ///
    /// 커서 디코딩 실패와 정렬 키 파싱 실패는 모두 클라이언트 입력
    /// 에러입니다.
    pub fn cursor_filter(&self, next_search_after: &str) -> AppResult<CommentFilter> {
        match self {
            CommentSortType::Recent => {
                let decoded = SearchAfterEncoder::decode_single(next_search_after)?;
                let comment_id = decoded.parse::<i64>().map_err(|_| {
                    AppError::ValidationError(format!(
                        "invalid search after cursor. nextSearchAfter = {}",
                        next_search_after
                    ))
                })?;
                Ok(CommentFilter::IdLt(comment_id))
            }
            other => Err(unimplemented_sort_type(other)),
        }
    }

    /// 페이지 마지막 행의 정렬 키를 다음 커서로 인코딩합니다.
    pub fn next_search_after(&self, last: &CommentSearch) -> AppResult<String> {
        match self {
            CommentSortType::Recent => {
                Ok(SearchAfterEncoder::encode(&[&last.comment_id.to_string()]))
            }
            other => Err(unimplemented_sort_type(other)),
        }
    }
}

fn unimplemented_sort_type(sort_type: &CommentSortType) -> AppError {
    AppError::ValidationError(format!("unimplemented sort type. sortType = {}", sort_type))
}

/// 댓글 검색 조건
///
/// 요청마다 생성되고 쿼리 실행 후 폐기되는 불변 값 객체입니다.
/// 선택 필터 필드들은 None이면 아무 제약도 만들지 않습니다.
#[derive(Debug, Clone, Validate)]
pub struct SearchCommentCriteria {
    /// 카테고리 필터
    pub category_id: Option<i64>,
    /// 서브카테고리 필터
    pub subcategory_id: Option<i64>,
    /// 작성자 필터
    pub user_id: Option<i64>,
    /// 상품 필터
    pub item_id: Option<i64>,
    /// 답변이 달린 댓글 제외 여부
    pub exclude_answered: bool,
    /// 페이지 크기 (1 이상)
    #[validate(range(min = 1, message = "size는 1 이상이어야 합니다"))]
    pub size: i64,
    /// 정렬 타입
    pub sort_type: CommentSortType,
    /// 이전 페이지가 발급한 커서
    pub next_search_after: Option<String>,
    /// 전체 건수 계산 여부
    pub with_total_count: bool,
}

/// 댓글 검색 필터 하나
///
/// 각 변형은 자신의 SQL 조건과 바인딩 값을 `QueryBuilder`에 밀어 넣는
/// 방법을 알고 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentFilter {
    /// 카테고리 일치
    CategoryEq(i64),
    /// 서브카테고리 일치
    SubcategoryEq(i64),
    /// 작성자 일치
    UserIdEq(i64),
    /// 상품 일치
    ItemIdEq(i64),
    /// 답변이 연결되지 않은 댓글만 (answer 테이블에 대한 NOT IN 서브쿼리)
    WithoutAnswer,
    /// 커서 비교: 댓글 id가 디코딩된 커서 값보다 작은 행만
    IdLt(i64),
}

impl CommentFilter {
    /// 이 필터의 SQL 조건을 쿼리 빌더에 추가합니다.
    pub fn push_condition(&self, query: &mut QueryBuilder<'_, Postgres>) {
        match self {
            CommentFilter::CategoryEq(category_id) => {
                query.push("category.id = ");
                query.push_bind(*category_id);
            }
            CommentFilter::SubcategoryEq(subcategory_id) => {
                query.push("item_subcategory.subcategory_id = ");
                query.push_bind(*subcategory_id);
            }
            CommentFilter::UserIdEq(user_id) => {
                query.push("comment.user_id = ");
                query.push_bind(*user_id);
            }
            CommentFilter::ItemIdEq(item_id) => {
                query.push("comment.item_id = ");
                query.push_bind(*item_id);
            }
            CommentFilter::WithoutAnswer => {
                query.push("comment.id NOT IN (SELECT answer.comment_id FROM answer)");
            }
            CommentFilter::IdLt(comment_id) => {
                query.push("comment.id < ");
                query.push_bind(*comment_id);
            }
        }
    }
}

/// 조건 객체의 선택 필드들로부터 필터 목록을 만듭니다.
///
/// 입력의 순수 함수이며, 값이 없는 필드는 필터를 만들지 않습니다.
pub fn filters_by_params(criteria: &SearchCommentCriteria) -> Vec<CommentFilter> {
    let mut filters = Vec::new();

    if let Some(category_id) = criteria.category_id {
        filters.push(CommentFilter::CategoryEq(category_id));
    }
    if let Some(subcategory_id) = criteria.subcategory_id {
        filters.push(CommentFilter::SubcategoryEq(subcategory_id));
    }
    if let Some(user_id) = criteria.user_id {
        filters.push(CommentFilter::UserIdEq(user_id));
    }
    if let Some(item_id) = criteria.item_id {
        filters.push(CommentFilter::ItemIdEq(item_id));
    }
    if criteria.exclude_answered {
        filters.push(CommentFilter::WithoutAnswer);
    }

    filters
}

/// 커서가 있으면 정렬 타입에 맞는 커서 비교 필터를 만듭니다.
pub fn filter_by_cursor(criteria: &SearchCommentCriteria) -> AppResult<Option<CommentFilter>> {
    match &criteria.next_search_after {
        None => Ok(None),
        Some(token) => Ok(Some(criteria.sort_type.cursor_filter(token)?)),
    }
}
