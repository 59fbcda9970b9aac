//! DTO 모듈
//!
//! 외부 웹 계층과 주고받는 요청/응답 구조체를 정의합니다.
//! 요청 DTO는 `validator` derive로 입력값을 검증하고, 응답 DTO는
//! camelCase 와이어 이름으로 직렬화됩니다.

pub mod categories;
pub mod comments;
pub mod common;
pub mod items;
pub mod reviews;
