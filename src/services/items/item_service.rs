//! 상품 부가 리소스 서비스
//!
//! 상품 썸네일과 홈 캐러셀을 관리합니다. 상품 본체의 등록/수정은
//! 외부 서비스의 책임입니다.

use std::sync::Arc;

use log::info;

use crate::domain::dto::items::{ItemHomeCarouselResponse, ItemThumbnailResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::items::{ItemHomeCarouselRepository, ItemThumbnailRepository};
use crate::services::items::ItemValidator;

/// 상품 부가 리소스 비즈니스 로직 서비스
pub struct ItemService {
    thumbnail_repository: Arc<dyn ItemThumbnailRepository>,
    carousel_repository: Arc<dyn ItemHomeCarouselRepository>,
    item_validator: Arc<ItemValidator>,
}

impl ItemService {
    pub fn new(
        thumbnail_repository: Arc<dyn ItemThumbnailRepository>,
        carousel_repository: Arc<dyn ItemHomeCarouselRepository>,
        item_validator: Arc<ItemValidator>,
    ) -> Self {
        Self {
            thumbnail_repository,
            carousel_repository,
            item_validator,
        }
    }

    /// 상품 썸네일을 조회합니다. 썸네일이 없으면 None을 반환합니다.
    pub async fn get_thumbnail(
        &self,
        item_id: Option<i64>,
    ) -> AppResult<Option<ItemThumbnailResponse>> {
        let item = self.item_validator.validate_and_get(item_id).await?;

        let thumbnail = self.thumbnail_repository.find_by_item_id(item.id).await?;
        Ok(thumbnail.map(ItemThumbnailResponse::of))
    }

    /// 상품에 새 썸네일을 등록합니다.
    ///
    /// # 에러
    ///
    /// * `ConflictError` - 이미 썸네일이 등록된 상품인 경우
    pub async fn register_thumbnail(
        &self,
        item_id: Option<i64>,
        attachment_id: i64,
    ) -> AppResult<ItemThumbnailResponse> {
        let item = self.item_validator.validate_and_get(item_id).await?;

        if self
            .thumbnail_repository
            .find_by_item_id(item.id)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "thumbnail already exists. itemId = {}",
                item.id
            )));
        }

        let thumbnail = self.thumbnail_repository.insert(item.id, attachment_id).await?;
        info!("thumbnail registered. itemId = {}, attachmentId = {}", item.id, attachment_id);
        Ok(ItemThumbnailResponse::of(thumbnail))
    }

    /// 기존 썸네일의 첨부파일을 교체합니다.
    pub async fn update_thumbnail(
        &self,
        item_id: Option<i64>,
        attachment_id: i64,
    ) -> AppResult<()> {
        let item = self.item_validator.validate_and_get(item_id).await?;

        let updated = self
            .thumbnail_repository
            .update_thumbnail(item.id, attachment_id)
            .await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "thumbnail not found. itemId = {}",
                item.id
            )));
        }
        Ok(())
    }

    /// 상품 썸네일을 삭제합니다. 삭제된 행이 있으면 true를 반환합니다.
    pub async fn remove_thumbnail(&self, item_id: Option<i64>) -> AppResult<bool> {
        let item = self.item_validator.validate_and_get(item_id).await?;
        self.thumbnail_repository.delete_by_item_id(item.id).await
    }

    /// 홈 캐러셀 전체를 노출 순서대로 조회합니다.
    pub async fn get_home_carousels(&self) -> AppResult<Vec<ItemHomeCarouselResponse>> {
        let carousels = self.carousel_repository.find_all_ordered().await?;
        Ok(carousels
            .into_iter()
            .map(ItemHomeCarouselResponse::of)
            .collect())
    }

    /// 홈 캐러셀에 상품을 등록합니다.
    pub async fn register_home_carousel(
        &self,
        item_id: Option<i64>,
        attachment_id: i64,
        priority: Option<i32>,
    ) -> AppResult<ItemHomeCarouselResponse> {
        let item = self.item_validator.validate_and_get(item_id).await?;

        let carousel = self
            .carousel_repository
            .insert(item.id, attachment_id, priority)
            .await?;
        Ok(ItemHomeCarouselResponse::of(carousel))
    }

    /// 홈 캐러셀 항목을 삭제합니다.
    pub async fn remove_home_carousel(&self, carousel_id: i64) -> AppResult<()> {
        let deleted = self.carousel_repository.delete(carousel_id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "carousel not found. carouselId = {}",
                carousel_id
            )));
        }
        Ok(())
    }
}
