//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 리스닝 호스트와 포트
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정 (모두 선택)
//! export HOST="0.0.0.0"   # 기본값: 0.0.0.0
//! export PORT="3000"      # 기본값: 3000
//!
//! # .env 파일 선택
//! export PROFILE="dev"    # dev → .env.dev, prod → .env.prod, 그 외 → .env
//!
//! # 로깅
//! export RUST_LOG="info,actix_web=debug"
//! ```

pub mod server_config;

pub use server_config::*;
