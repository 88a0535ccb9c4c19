//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 에러 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult` 및 HTTP 응답 매핑

pub mod errors;

pub use errors::*;
