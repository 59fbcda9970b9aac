//! 카테고리 계층 도메인 모델
//!
//! 상품은 `item_subcategory` 링크 테이블을 통해 서브카테고리에 연결되고,
//! 서브카테고리는 카테고리에 속합니다. 검색 경로의 카테고리/서브카테고리
//! 필터는 이 계층을 조인해서 적용됩니다.

use sqlx::FromRow;

/// 최상위 카테고리
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub name_kor: String,
}

/// 서브카테고리
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Subcategory {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub name_kor: String,
}
