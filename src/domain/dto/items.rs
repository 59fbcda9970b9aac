//! 상품 부가 리소스 응답 DTO

use serde::Serialize;

use crate::domain::models::item::{ItemHomeCarousel, ItemThumbnail};

/// 상품 썸네일 응답 표현
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemThumbnailResponse {
    pub thumbnail_id: i64,
    pub attachment_id: i64,
    pub item_id: i64,
}

impl ItemThumbnailResponse {
    pub fn of(thumbnail: ItemThumbnail) -> Self {
        Self {
            thumbnail_id: thumbnail.id,
            attachment_id: thumbnail.attachment_id,
            item_id: thumbnail.item_id,
        }
    }
}

/// 홈 캐러셀 항목 응답 표현
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemHomeCarouselResponse {
    pub carousel_id: i64,
    pub item_id: i64,
    pub attachment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ItemHomeCarouselResponse {
    pub fn of(carousel: ItemHomeCarousel) -> Self {
        Self {
            carousel_id: carousel.id,
            item_id: carousel.item_id,
            attachment_id: carousel.attachment_id,
            priority: carousel.priority,
        }
    }
}
