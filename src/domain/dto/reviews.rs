//! 리뷰 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::review::Review;
use crate::repositories::reviews::model::{ReviewSortType, SearchReviewCriteria};

/// 리뷰 등록 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateDto {
    pub user_id: Option<i64>,
    pub item_id: Option<i64>,
    /// 별점 (1~5)
    #[validate(range(min = 1, max = 5, message = "star는 1에서 5 사이여야 합니다"))]
    pub star: i32,
    pub content: String,
}

/// 리뷰 수정 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdateDto {
    pub user_id: Option<i64>,
    pub item_id: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "star는 1에서 5 사이여야 합니다"))]
    pub star: i32,
    pub content: String,
}

/// 리뷰 검색 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSearchRequest {
    pub user_id: Option<i64>,
    pub item_id: Option<i64>,
    #[validate(range(min = 1, message = "size는 1 이상이어야 합니다"))]
    pub size: i64,
    pub sort_type: ReviewSortType,
    pub next_search_after: Option<String>,
    #[serde(default)]
    pub with_total_count: bool,
}

impl ReviewSearchRequest {
    pub fn to_criteria(&self) -> SearchReviewCriteria {
        SearchReviewCriteria {
            user_id: self.user_id,
            item_id: self.item_id,
            size: self.size,
            sort_type: self.sort_type,
            next_search_after: self.next_search_after.clone(),
            with_total_count: self.with_total_count,
        }
    }
}

/// 리뷰 응답 표현
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub star: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReviewResponse {
    pub fn of(review: Review) -> Self {
        Self {
            review_id: review.id,
            user_id: review.user_id,
            item_id: review.item_id,
            star: review.star,
            content: review.content,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_out_of_range_is_invalid() {
        let dto = ReviewCreateDto {
            user_id: Some(1),
            item_id: Some(2),
            star: 6,
            content: "too good".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_search_request_to_criteria() {
        let request = ReviewSearchRequest {
            user_id: Some(1),
            item_id: None,
            size: 10,
            sort_type: ReviewSortType::Recent,
            next_search_after: None,
            with_total_count: true,
        };

        let criteria = request.to_criteria();
        assert_eq!(criteria.user_id, Some(1));
        assert_eq!(criteria.size, 10);
        assert!(criteria.with_total_count);
    }
}
