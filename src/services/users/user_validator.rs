//! 사용자 존재 검증
//!
//! 다른 서비스의 선행 조건으로 사용자 id의 null 여부와 존재 여부를
//! 검증합니다.

use std::sync::Arc;

use crate::domain::models::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 사용자 검증기
pub struct UserValidator {
    user_repository: Arc<dyn UserRepository>,
}

impl UserValidator {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// null 여부와 존재 여부를 검증하고 사용자를 반환합니다.
    pub async fn validate_and_get(&self, user_id: Option<i64>) -> AppResult<User> {
        let user_id = user_id
            .ok_or_else(|| AppError::ValidationError("userId is null".to_string()))?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user not found. userId = {}", user_id)))
    }

    /// 존재 여부만 검증합니다.
    pub async fn validate_exists(&self, user_id: Option<i64>) -> AppResult<()> {
        let user_id = user_id
            .ok_or_else(|| AppError::ValidationError("userId is null".to_string()))?;

        if !self.user_repository.exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "user not found. userId = {}",
                user_id
            )));
        }
        Ok(())
    }
}
