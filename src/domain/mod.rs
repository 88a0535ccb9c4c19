//! # Domain Layer Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── DTOs   - 요청 DTO와 응답 봉투
//!      │
//!      ▼
//! Service Layer (RegistrationService)
//! ```
//!
//! 영속 엔티티는 없습니다. 모든 값은 요청 하나의 수명 동안만 존재합니다.

pub mod dto;

pub use dto::*;
