//! # Response Writer
//!
//! 응답 봉투를 JSON으로 직렬화하여 `HttpResponse`를 만듭니다.
//!
//! ## 응답 형태
//!
//! | 함수 | HTTP Status | 본문 |
//! |------|-------------|------|
//! | [`success_response`] | 200 | `{"status":"success","message":...,...extra}` |
//! | [`error_response`] | 호출자가 지정 | `{"status":"error","message":...}` |
//! | [`validation_response`] | 422 | `{"status":"error","message":"validation error","errors":{...}}` |
//!
//! 직렬화에 실패하면 원래 응답 대신 500 평문 응답 하나만 반환합니다.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;

use crate::domain::dto::envelope::ResponseEnvelope;
use crate::validation::ErrorReport;

/// 응답 직렬화 실패 시 전송되는 고정 본문
pub const INTERNAL_ERROR_BODY: &str = "An error occurred internally";

/// 성공 응답 (200 OK)
pub fn success_response(envelope: ResponseEnvelope) -> HttpResponse {
    respond(StatusCode::OK, &envelope)
}

/// 일반 에러 응답
///
/// # Arguments
///
/// * `status` - 응답 상태 코드 (예: 잘못된 JSON은 422)
/// * `message` - 클라이언트에 전달할 메시지
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    respond(status, &ResponseEnvelope::error(message))
}

/// 검증 실패 응답 (항상 422 Unprocessable Entity)
pub fn validation_response(errors: ErrorReport) -> HttpResponse {
    respond(
        StatusCode::UNPROCESSABLE_ENTITY,
        &ResponseEnvelope::validation_error(errors),
    )
}

/// 본문을 JSON으로 직렬화하여 지정한 상태 코드로 응답합니다.
///
/// 직렬화가 실패하면 상태 코드와 헤더를 쓰기 전에 500 평문 응답으로 대체하므로
/// 응답은 항상 정확히 하나만 만들어집니다.
pub fn respond<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(json) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(json),
        Err(e) => {
            log::error!("응답 직렬화 실패: {}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(INTERNAL_ERROR_BODY)
        }
    }
}
