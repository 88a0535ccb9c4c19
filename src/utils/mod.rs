//! 공통 유틸리티 모듈
//!
//! - [`display_terminal`] - 서버 시작 시 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! print_boxed_title("Server starting...");
//! ```

pub mod display_terminal;
