//! 상품 관련 도메인 모델
//!
//! 상품 본체와 상품 부가 리소스(썸네일, 홈 캐러셀)를 정의합니다.

use sqlx::FromRow;

/// 상품
///
/// 이 크레이트에서는 존재 검증과 연관 조회에 필요한 필드만 다룹니다.
/// 상품 등록/수정 자체는 외부 서비스의 책임입니다.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// 상품 썸네일
///
/// 상품당 하나의 대표 이미지(첨부파일)를 연결합니다.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ItemThumbnail {
    pub id: i64,
    pub attachment_id: i64,
    pub item_id: i64,
}

/// 홈 화면 캐러셀 항목
///
/// 우선순위(priority) 오름차순으로 노출됩니다. 우선순위가 없는 항목은
/// 마지막에 배치됩니다.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ItemHomeCarousel {
    pub id: i64,
    pub item_id: i64,
    pub attachment_id: i64,
    pub priority: Option<i32>,
}
