//! 도메인 모듈
//!
//! 도메인 모델(데이터베이스 행/프로젝션)과 DTO(요청/응답 구조체)를 정의합니다.

pub mod dto;
pub mod models;
