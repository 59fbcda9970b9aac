//! 비즈니스 로직 계층
//!
//! 요청 DTO 검증, 도메인 규칙 적용, 리포지토리 호출, 응답 DTO 변환을
//! 담당합니다. 모든 서비스는 생성자에서 리포지토리 trait을 주입받는
//! 명시적 와이어링을 사용합니다.

pub mod categories;
pub mod comments;
pub mod items;
pub mod reviews;
pub mod users;
