//! 리뷰 도메인 모델

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// 상품 리뷰
///
/// 한 사용자는 한 상품에 최대 하나의 리뷰를 가집니다.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    /// 별점 (1~5)
    pub star: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
