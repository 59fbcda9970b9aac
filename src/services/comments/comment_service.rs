//! # 댓글 검색 서비스
//!
//! 댓글(상품 문의) 검색의 비즈니스 로직을 담당합니다.
//!
//! 요청 DTO를 검증하고 검색 조건으로 변환한 뒤 리포지토리에 위임하며,
//! 결과 행을 응답 DTO로 매핑합니다. 페이지네이션 커서와 전체 건수는
//! 리포지토리가 돌려준 값을 그대로 전달합니다.

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::dto::comments::{CommentSearchRequest, CommentSearchResponse};
use crate::domain::dto::common::PageResultDto;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::comments::CommentRepository;

/// 댓글 검색 비즈니스 로직 서비스
pub struct CommentService {
    comment_repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    /// 리포지토리를 주입받아 서비스를 생성합니다.
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// 조건에 맞는 댓글 한 페이지를 검색합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationError` - size가 1 미만이거나, 커서가 잘못되었거나,
    ///   정렬 타입이 구현되지 않은 경우
    /// * `DatabaseError` - 쿼리 실행 실패
    pub async fn search_comments(
        &self,
        request: CommentSearchRequest,
    ) -> AppResult<PageResultDto<CommentSearchResponse>> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let criteria = request.to_criteria();
        let result = self.comment_repository.search_comment(&criteria).await?;

        info!(
            "comment search: fetched = {}, has_next = {}",
            result.items.len(),
            result.next_search_after.is_some()
        );

        Ok(PageResultDto {
            items: result
                .items
                .into_iter()
                .map(CommentSearchResponse::of)
                .collect(),
            next_search_after: result.next_search_after,
            total_count: result.total_count,
        })
    }
}
