//! # Services Module
//!
//! HTTP 계층과 분리된 요청 처리 로직을 제공합니다.
//!
//! - [`users`] - 회원가입 요청 처리

pub mod users;
