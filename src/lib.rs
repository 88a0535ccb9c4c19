//! 회원가입 요청 검증 서비스
//!
//! 단일 `POST /register` 요청을 디코딩하고 필드 규칙(필수 값, 이메일 형식,
//! 필드 일치)을 검증한 뒤, 필드별 사람이 읽을 수 있는 메시지를 담은
//! JSON 응답을 돌려주는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **명시적 규칙 선언**: 구조체 태그나 리플렉션 없이 필드별 규칙 목록으로 검증
//! - **메시지 변환**: 규칙 위반을 표시 이름별 메시지 목록으로 변환
//! - **일관된 응답 봉투**: 모든 JSON 응답이 `status` 판별자를 포함
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← `/`, `POST /register`
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 응답 봉투 작성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 디코딩 + 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← 규칙 엔진 + 메시지 변환
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use register_service::services::users::RegistrationService;
//!
//! let service = RegistrationService::new()?;
//! let envelope = service.register(body)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod validation;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
