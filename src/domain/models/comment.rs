//! 댓글(문의) 검색 프로젝션 모델
//!
//! 검색 결과 표시와 다음 커서 계산에 필요한 필드만 담는 읽기 전용
//! 프로젝션입니다. 요청/응답 사이클을 넘어 유지되지 않습니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// 댓글 검색 결과 한 행
///
/// `comment` 테이블에서 조회되는 프로젝션으로, 정렬 키(댓글 id)와
/// 화면 표시용 필드를 포함합니다.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CommentSearch {
    /// 댓글 식별자 (RECENT 정렬의 정렬 키)
    pub comment_id: i64,
    /// 댓글 본문
    pub content: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: Option<DateTime<Utc>>,
    /// 댓글이 달린 상품 id
    pub item_id: i64,
    /// 작성자 id
    pub user_id: i64,
}
