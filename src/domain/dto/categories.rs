//! 카테고리 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::category::Subcategory;

/// 서브카테고리 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcategoryRequest {
    /// 부모 카테고리 id (필수)
    #[validate(required(message = "categoryId는 필수입니다"))]
    pub category_id: Option<i64>,
    /// 영문 이름
    #[validate(length(min = 1, message = "name은 필수입니다"))]
    pub name: String,
    /// 한글 이름
    #[validate(length(min = 1, message = "nameKor는 필수입니다"))]
    pub name_kor: String,
}

/// 서브카테고리 응답 표현
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryResponse {
    pub subcategory_id: i64,
    pub category_id: i64,
    pub name: String,
    pub name_kor: String,
}

impl SubcategoryResponse {
    pub fn of(subcategory: Subcategory) -> Self {
        Self {
            subcategory_id: subcategory.id,
            category_id: subcategory.category_id,
            name: subcategory.name,
            name_kor: subcategory.name_kor,
        }
    }
}
