//! # Application Error Handling System
//!
//! 요청 처리 중 발생하는 에러를 한 곳에서 정의하고 HTTP 응답으로 변환합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?` 연산자만으로 일관된 JSON 에러 봉투를 돌려줄 수 있게 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `InvalidJson` | 422 Unprocessable Entity | `{"status":"error","message":"Invalid JSON"}` |
//! | `ValidationError` | 422 Unprocessable Entity | `{"status":"error","message":"validation error","errors":{...}}` |
//!
//! ## 에러 분류
//!
//! 규칙 선언 결함([`RuleDeclarationError`](crate::validation::RuleDeclarationError))은
//! 요청 단위 에러가 아니므로 여기에 포함하지 않습니다. 서버 시작 전에 발견되어
//! 프로세스를 중단시킵니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn register(body: web::Bytes) -> Result<HttpResponse, AppError> {
//!     let input = RegisterUserRequest::from_json(&body)?; // → 422 Invalid JSON
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::handlers::responder;
use crate::validation::ErrorReport;

/// 잘못된 JSON 본문에 대한 고정 메시지
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON";

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 요청 하나에 국한되며, 재시도 없이 즉시 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 JSON으로 디코딩할 수 없음 (422)
    ///
    /// 원인 에러는 로그에만 남기고 클라이언트에는 고정 메시지만 전달합니다.
    #[error("Invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// 필드 검증 실패 (422)
    #[error("Validation error: {} field(s) failed", .0.len())]
    ValidationError(ErrorReport),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// 각 변형을 응답 봉투로 변환합니다.
    ///
    /// 직렬화는 [`responder`]가 담당하므로 직렬화 실패 시에도
    /// 500 평문 응답 하나만 전송됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            AppError::InvalidJson(e) => {
                log::debug!("요청 본문 디코딩 실패: {}", e);
                responder::error_response(self.status_code(), INVALID_JSON_MESSAGE)
            }
            AppError::ValidationError(report) => responder::validation_response(report.clone()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use serde_json::{Value, json};

    fn body_json(response: actix_web::HttpResponse) -> Value {
        let bytes = response.into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_invalid_json_error_response() {
        let decode_error = serde_json::from_str::<Value>("not json").unwrap_err();
        let error = AppError::from(decode_error);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response),
            json!({ "status": "error", "message": "Invalid JSON" })
        );
    }

    #[test]
    fn test_validation_error_response() {
        let mut report = ErrorReport::new();
        report.push("email", "The email should be a valid email");
        let response = AppError::ValidationError(report).error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response),
            json!({
                "status": "error",
                "message": "validation error",
                "errors": { "email": ["The email should be a valid email"] }
            })
        );
    }
}
