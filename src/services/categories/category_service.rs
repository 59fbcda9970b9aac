//! 카테고리 서비스
//!
//! 서브카테고리 등록을 담당합니다. 부모 카테고리는 고정 데이터이므로
//! 여기에서 생성하지 않습니다.

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::dto::categories::{CreateSubcategoryRequest, SubcategoryResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::categories::CategoryRepository;
use crate::utils::string_utils::validate_required_string;

/// 카테고리 비즈니스 로직 서비스
pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repository }
    }

    /// 부모 카테고리 아래에 새 서브카테고리를 등록합니다.
    ///
    /// # 에러
    ///
    /// * `NotFound` - 부모 카테고리가 존재하지 않는 경우
    /// * `ConflictError` - 같은 카테고리에 같은 이름의 서브카테고리가 이미 있는 경우
    pub async fn create_subcategory(
        &self,
        request: CreateSubcategoryRequest,
    ) -> AppResult<SubcategoryResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let category_id = request
            .category_id
            .ok_or_else(|| AppError::ValidationError("categoryId is null".to_string()))?;
        let name = validate_required_string(&request.name, "name")?;
        let name_kor = validate_required_string(&request.name_kor, "nameKor")?;

        if !self.category_repository.exists_by_id(category_id).await? {
            return Err(AppError::NotFound(format!(
                "category not found. categoryId = {}",
                category_id
            )));
        }

        if self
            .category_repository
            .find_subcategory_by_name(category_id, &name)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "subcategory already exists. categoryId = {}, name = {}",
                category_id, name
            )));
        }

        let subcategory = self
            .category_repository
            .insert_subcategory(category_id, &name, &name_kor)
            .await?;

        info!(
            "subcategory created. subcategoryId = {}, categoryId = {}",
            subcategory.id, category_id
        );
        Ok(SubcategoryResponse::of(subcategory))
    }
}
