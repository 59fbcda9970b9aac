//! 사용자 도메인 모델
//!
//! 계정 관리(가입, 인증, 삭제)는 외부 서비스의 책임이며,
//! 이 크레이트는 존재 검증과 연관 조회에 필요한 필드만 읽습니다.

use sqlx::FromRow;

/// 사용자 (조회 전용)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}
