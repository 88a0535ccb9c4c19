//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고,
//! 각 DTO에 적용할 필드 규칙을 함께 선언합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 422 `Invalid JSON`)
//! 2. **필드 검증**: 필수 값, 이메일 형식, 필드 일치 (실패 시 422 `validation error`)

pub mod register_user_request;

pub use register_user_request::{RegisterUserRequest, registration_rules};
