//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 커머스 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//! HTTP 상태 코드 매핑은 이 크레이트를 사용하는 웹 계층의 책임이며,
//! 여기서는 에러의 종류(클라이언트 입력 / 리소스 없음 / 서버)만 구분합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_review(review_id: Option<i64>) -> Result<Review, AppError> {
//!     let review_id = review_id
//!         .ok_or_else(|| AppError::ValidationError("reviewId is null".to_string()))?;
//!
//!     let review = review_repository.find_by_id(review_id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("review not found. reviewId = {}", review_id)))?;
//!
//!     Ok(review)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 어떤 종류의 에러도 다른 종류로 암묵적으로 바뀌지 않습니다.
/// 예를 들어 지원하지 않는 정렬 타입은 기본 정렬로 대체되지 않고
/// 반드시 `ValidationError`로 호출자에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (서버 에러)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (클라이언트 입력 에러)
    ///
    /// 필수 식별자 누락, 잘못된 커서, 지원하지 않는 정렬 타입 등
    /// 요청 자체가 잘못된 경우입니다. 재시도해도 성공하지 않습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let error = AppError::ValidationError("size must be positive".to_string());
        assert_eq!(error.to_string(), "Validation error: size must be positive");
    }

    #[test]
    fn test_not_found_error_message() {
        let error = AppError::NotFound("review not found. reviewId = 1".to_string());
        assert_eq!(error.to_string(), "Not found: review not found. reviewId = 1");
    }

    #[test]
    fn test_database_error_message() {
        let error = AppError::DatabaseError("connection refused".to_string());
        assert_eq!(error.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_lazy() {
        let result: Result<(), &str> = Err("boom");
        let app_result = result.with_context(|| format!("while loading item {}", 7));

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("while loading item 7"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
