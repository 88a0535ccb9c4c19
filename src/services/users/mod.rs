//! 사용자 관련 서비스 모듈
//!
//! 회원가입 요청의 디코딩, 검증, 응답 봉투 생성을 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::RegistrationService;
//!
//! let service = RegistrationService::new()?;
//! let envelope = service.register(br#"{"name":"A","email":"a@b.com","password":"x","confirm_password":"x"}"#)?;
//! ```

pub mod registration_service;

pub use registration_service::RegistrationService;
