//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수와 응답 작성기를 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 디코딩, 검증, 응답 봉투 생성          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Validation - 필드 규칙과 메시지 변환             ← Domain Rules
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: `/`, `/register` 엔드포인트
//! - **`responder`**: JSON 응답 봉투 작성 (성공, 일반 에러, 검증 에러)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, `AppError`는
//! `ResponseError` 구현을 통해 `responder`의 에러 응답으로 변환됩니다.

pub mod users;
pub mod responder;
