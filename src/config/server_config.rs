//! 서버 바인딩 설정 관리 모듈
//!
//! 리스닝 주소와 포트를 환경 변수에서 읽습니다.

use std::env;

/// 기본 리스닝 포트
pub const DEFAULT_PORT: u16 = 3000;

/// 기본 바인딩 호스트 (모든 인터페이스)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (숫자가 아니면 기본값 사용)
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
    }

    /// `HttpServer::bind`에 넘길 주소 (`host:port`)
    pub fn bind_address() -> (String, u16) {
        (Self::host(), Self::port())
    }

    fn parse_port(value: Option<&str>) -> u16 {
        value
            .and_then(|port| port.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }
}
