//! # 리뷰 서비스
//!
//! 리뷰의 전체 생명주기(등록, 조회, 수정, 삭제, 검색)를 관리하는
//! 비즈니스 로직을 구현합니다.
//!
//! 모든 쓰기 경로는 사용자와 상품의 존재를 먼저 검증합니다.
//! 한 사용자는 한 상품에 하나의 리뷰만 가지므로 수정/삭제는
//! (userId, itemId) 쌍으로 리뷰를 찾습니다.

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::dto::common::PageResultDto;
use crate::domain::dto::reviews::{
    ReviewCreateDto, ReviewResponse, ReviewSearchRequest, ReviewUpdateDto,
};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::reviews::{NewReview, ReviewRepository};
use crate::services::items::ItemValidator;
use crate::services::users::UserValidator;

/// 리뷰 비즈니스 로직 서비스
pub struct ReviewService {
    review_repository: Arc<dyn ReviewRepository>,
    user_validator: Arc<UserValidator>,
    item_validator: Arc<ItemValidator>,
}

impl ReviewService {
    pub fn new(
        review_repository: Arc<dyn ReviewRepository>,
        user_validator: Arc<UserValidator>,
        item_validator: Arc<ItemValidator>,
    ) -> Self {
        Self {
            review_repository,
            user_validator,
            item_validator,
        }
    }

    /// 새 리뷰를 등록합니다.
    pub async fn register_review(&self, dto: ReviewCreateDto) -> AppResult<ReviewResponse> {
        dto.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user = self.user_validator.validate_and_get(dto.user_id).await?;
        let item = self.item_validator.validate_and_get(dto.item_id).await?;

        let saved = self
            .review_repository
            .save(NewReview {
                user_id: user.id,
                item_id: item.id,
                star: dto.star,
                content: dto.content,
            })
            .await?;

        info!("review registered. reviewId = {}", saved.id);
        Ok(ReviewResponse::of(saved))
    }

    /// 리뷰 id로 조회합니다.
    pub async fn get_review_by_id(&self, review_id: Option<i64>) -> AppResult<ReviewResponse> {
        let review_id = review_id
            .ok_or_else(|| AppError::ValidationError("reviewId is null".to_string()))?;

        let review = self
            .review_repository
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("review not found. reviewId = {}", review_id))
            })?;

        Ok(ReviewResponse::of(review))
    }

    /// 사용자와 상품으로 리뷰를 조회합니다.
    pub async fn get_review_by_user_and_item(
        &self,
        user_id: Option<i64>,
        item_id: Option<i64>,
    ) -> AppResult<ReviewResponse> {
        let user = self.user_validator.validate_and_get(user_id).await?;
        let item = self.item_validator.validate_and_get(item_id).await?;

        let review = self
            .review_repository
            .find_by_user_and_item(user.id, item.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "review not found. userId = {}, itemId = {}",
                    user.id, item.id
                ))
            })?;

        Ok(ReviewResponse::of(review))
    }

    /// 리뷰의 별점과 본문을 수정합니다.
    pub async fn update_review(&self, dto: ReviewUpdateDto) -> AppResult<ReviewResponse> {
        dto.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user = self.user_validator.validate_and_get(dto.user_id).await?;
        let item = self.item_validator.validate_and_get(dto.item_id).await?;

        let review = self
            .review_repository
            .find_by_user_and_item(user.id, item.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "review not found. userId = {}, itemId = {}",
                    user.id, item.id
                ))
            })?;

        let updated = self
            .review_repository
            .update_content(review.id, dto.star, &dto.content)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("review not found. reviewId = {}", review.id))
            })?;

        Ok(ReviewResponse::of(updated))
    }

    /// 리뷰를 삭제합니다.
    pub async fn remove_review(
        &self,
        user_id: Option<i64>,
        item_id: Option<i64>,
    ) -> AppResult<()> {
        let user = self.user_validator.validate_and_get(user_id).await?;
        let item = self.item_validator.validate_and_get(item_id).await?;

        let review = self
            .review_repository
            .find_by_user_and_item(user.id, item.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "review not found. userId = {}, itemId = {}",
                    user.id, item.id
                ))
            })?;

        self.review_repository.delete(review.id).await?;
        info!("review removed. reviewId = {}", review.id);
        Ok(())
    }

    /// 조건에 맞는 리뷰 한 페이지를 검색합니다.
    pub async fn search_reviews(
        &self,
        request: ReviewSearchRequest,
    ) -> AppResult<PageResultDto<ReviewResponse>> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let criteria = request.to_criteria();
        let result = self.review_repository.search_review(&criteria).await?;

        Ok(PageResultDto {
            items: result.items.into_iter().map(ReviewResponse::of).collect(),
            next_search_after: result.next_search_after,
            total_count: result.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::models::item::Item;
    use crate::domain::models::review::Review;
    use crate::domain::models::user::User;
    use crate::repositories::common::PageResult;
    use crate::repositories::items::ItemRepository;
    use crate::repositories::reviews::model::{ReviewSortType, SearchReviewCriteria};
    use crate::repositories::users::UserRepository;

    struct InMemoryUserRepository {
        users: HashMap<i64, User>,
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
            Ok(self.users.get(&user_id).cloned())
        }

        async fn exists_by_id(&self, user_id: i64) -> AppResult<bool> {
            Ok(self.users.contains_key(&user_id))
        }
    }

    struct InMemoryItemRepository {
        items: HashMap<i64, Item>,
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn find_by_id(&self, item_id: i64) -> AppResult<Option<Item>> {
            Ok(self.items.get(&item_id).cloned())
        }

        async fn exists_by_id(&self, item_id: i64) -> AppResult<bool> {
            Ok(self.items.contains_key(&item_id))
        }
    }

    #[derive(Default)]
    struct InMemoryReviewRepository {
        reviews: Mutex<Vec<Review>>,
    }

    #[async_trait]
    impl ReviewRepository for InMemoryReviewRepository {
        async fn save(&self, new_review: NewReview) -> AppResult<Review> {
            let mut reviews = self.reviews.lock().unwrap();
            let review = Review {
                id: reviews.len() as i64 + 1,
                user_id: new_review.user_id,
                item_id: new_review.item_id,
                star: new_review.star,
                content: new_review.content,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                updated_at: None,
            };
            reviews.push(review.clone());
            Ok(review)
        }

        async fn find_by_id(&self, review_id: i64) -> AppResult<Option<Review>> {
            Ok(self
                .reviews
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == review_id)
                .cloned())
        }

        async fn find_by_user_and_item(
            &self,
            user_id: i64,
            item_id: i64,
        ) -> AppResult<Option<Review>> {
            Ok(self
                .reviews
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.user_id == user_id && r.item_id == item_id)
                .cloned())
        }

        async fn update_content(
            &self,
            review_id: i64,
            star: i32,
            content: &str,
        ) -> AppResult<Option<Review>> {
            let mut reviews = self.reviews.lock().unwrap();
            match reviews.iter_mut().find(|r| r.id == review_id) {
                Some(review) => {
                    review.star = star;
                    review.content = content.to_string();
                    review.updated_at =
                        Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
                    Ok(Some(review.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, review_id: i64) -> AppResult<bool> {
            let mut reviews = self.reviews.lock().unwrap();
            let before = reviews.len();
            reviews.retain(|r| r.id != review_id);
            Ok(reviews.len() < before)
        }

        async fn search_review(
            &self,
            criteria: &SearchReviewCriteria,
        ) -> AppResult<PageResult<Review>> {
            let mut items: Vec<Review> = self
                .reviews
                .lock()
                .unwrap()
                .iter()
                .filter(|r| criteria.user_id.is_none_or(|id| r.user_id == id))
                .filter(|r| criteria.item_id.is_none_or(|id| r.item_id == id))
                .cloned()
                .collect();
            items.sort_by_key(|r| std::cmp::Reverse(r.id));
            items.truncate(criteria.size as usize);
            Ok(PageResult {
                items,
                next_search_after: None,
                total_count: None,
            })
        }
    }

    fn service() -> ReviewService {
        let user = User {
            id: 1,
            email: "alice@example.com".to_string(),
            name: "alice".to_string(),
        };
        let item = Item {
            id: 2,
            name: "keyboard".to_string(),
        };

        ReviewService::new(
            Arc::new(InMemoryReviewRepository::default()),
            Arc::new(UserValidator::new(Arc::new(InMemoryUserRepository {
                users: HashMap::from([(1, user)]),
            }))),
            Arc::new(ItemValidator::new(Arc::new(InMemoryItemRepository {
                items: HashMap::from([(2, item)]),
            }))),
        )
    }

    fn create_dto() -> ReviewCreateDto {
        ReviewCreateDto {
            user_id: Some(1),
            item_id: Some(2),
            star: 5,
            content: "good".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_get_review() {
        let service = service();

        let registered = service.register_review(create_dto()).await.unwrap();
        assert_eq!(registered.user_id, 1);
        assert_eq!(registered.item_id, 2);

        let found = service
            .get_review_by_id(Some(registered.review_id))
            .await
            .unwrap();
        assert_eq!(found.content, "good");

        let by_pair = service
            .get_review_by_user_and_item(Some(1), Some(2))
            .await
            .unwrap();
        assert_eq!(by_pair.review_id, registered.review_id);
    }

    #[tokio::test]
    async fn test_register_review_with_unknown_user_fails() {
        let service = service();
        let dto = ReviewCreateDto {
            user_id: Some(99),
            ..create_dto()
        };

        assert!(matches!(
            service.register_review(dto).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_register_review_with_null_user_is_validation_error() {
        let service = service();
        let dto = ReviewCreateDto {
            user_id: None,
            ..create_dto()
        };

        assert!(matches!(
            service.register_review(dto).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_review_is_not_found() {
        let service = service();
        let result = service.get_review_by_id(Some(42)).await;
        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("reviewId = 42")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_review() {
        let service = service();
        service.register_review(create_dto()).await.unwrap();

        let updated = service
            .update_review(ReviewUpdateDto {
                user_id: Some(1),
                item_id: Some(2),
                star: 3,
                content: "changed my mind".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.star, 3);
        assert_eq!(updated.content, "changed my mind");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_review_is_not_found() {
        let service = service();

        let result = service
            .update_review(ReviewUpdateDto {
                user_id: Some(1),
                item_id: Some(2),
                star: 3,
                content: "no review yet".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_review() {
        let service = service();
        service.register_review(create_dto()).await.unwrap();

        service.remove_review(Some(1), Some(2)).await.unwrap();

        assert!(matches!(
            service.get_review_by_user_and_item(Some(1), Some(2)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_search_reviews_maps_to_dto() {
        let service = service();
        service.register_review(create_dto()).await.unwrap();

        let page = service
            .search_reviews(ReviewSearchRequest {
                user_id: Some(1),
                item_id: None,
                size: 10,
                sort_type: ReviewSortType::Recent,
                next_search_after: None,
                with_total_count: false,
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].user_id, 1);
    }
}
