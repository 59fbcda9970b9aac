//! 리포지토리 공통 모델
//!
//! 커서 기반 페이지네이션의 결과 타입과 search-after 커서 인코더를
//! 제공합니다.

pub mod search_after;

pub use search_after::SearchAfterEncoder;

/// 커서 기반 페이지네이션 결과 한 페이지
///
/// - `items`: 정렬 순서대로 담긴 결과 행 (요청한 size 이하)
/// - `next_search_after`: 다음 페이지 커서. 조회된 행 수가 size보다 적으면
///   데이터가 소진된 것이므로 None 입니다.
/// - `total_count`: 요청 시에만 계산되는 전체 건수. 매 호출마다 카운트
///   쿼리를 실행하지 않기 위해 선택 사항입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub next_search_after: Option<String>,
    pub total_count: Option<i64>,
}
