//! 커머스 서비스 백엔드
//!
//! Rust 기반의 커머스 도메인 백엔드 라이브러리입니다.
//! 커서 기반 댓글/리뷰 검색, 동적 조건 조합 쿼리,
//! 그리고 생성자 주입 기반의 서비스 구성을 제공합니다.
//!
//! # Features
//!
//! - **댓글 검색**: 카테고리/서브카테고리/사용자/상품 조건 조합과 미답변 필터
//! - **커서 페이징**: base64 불투명 커서(searchAfter) 기반 무한 스크롤
//! - **리뷰 관리**: 리뷰 등록/조회/수정/삭제와 커서 기반 검색
//! - **상품 리소스**: 썸네일과 홈 캐러셀 관리
//! - **카테고리**: 서브카테고리 등록
//! - **PostgreSQL**: sqlx 기반 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, 동적 쿼리 조합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use commerce_service_backend::db::Database;
//! use commerce_service_backend::repositories::comments::PgCommentRepository;
//! use commerce_service_backend::services::comments::CommentService;
//!
//! let database = Arc::new(Database::new().await?);
//! let comment_repository = Arc::new(PgCommentRepository::new(database));
//! let comment_service = CommentService::new(comment_repository);
//!
//! // 한 페이지 검색 후 nextSearchAfter로 다음 페이지 요청
//! let page = comment_service.search_comments(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
