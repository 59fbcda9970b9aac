//! 데이터 액세스 계층
//!
//! 애그리거트별 리포지토리 trait과 PostgreSQL 구현체를 제공합니다.
//! 서비스 계층은 trait에만 의존하므로 테스트에서 인메모리 구현으로
//! 대체할 수 있습니다.

pub mod categories;
pub mod comments;
pub mod common;
pub mod items;
pub mod reviews;
pub mod users;
