//! # 응답 봉투(Envelope) DTO
//!
//! 모든 JSON 응답의 최상위 객체입니다. 항상 `status` 판별자를 포함합니다.
//!
//! ```json
//! { "status": "success", "message": "Email is a@b.com" }
//! { "status": "error", "message": "Invalid JSON" }
//! { "status": "error", "message": "validation error", "errors": { "email": ["..."] } }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::validation::ErrorReport;

/// 검증 실패 응답의 고정 메시지
pub const VALIDATION_ERROR_MESSAGE: &str = "validation error";

/// 봉투가 직접 관리하는 키. 추가 필드로 덮어쓸 수 없습니다.
const RESERVED_KEYS: [&str; 3] = ["status", "message", "errors"];

/// 응답 상태 판별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// JSON 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub status: ResponseStatus,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorReport>,

    /// 성공 응답에 함께 실리는 추가 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            errors: None,
            extra: Map::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            errors: None,
            extra: Map::new(),
        }
    }

    pub fn validation_error(errors: ErrorReport) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            errors: Some(errors),
            extra: Map::new(),
        }
    }

    /// 추가 필드를 붙입니다.
    ///
    /// `status`, `message`, `errors` 키는 무시됩니다.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            log::warn!("예약된 응답 키는 추가 필드로 사용할 수 없습니다: {}", key);
            return self;
        }

        self.extra.insert(key, value.into());
        self
    }
}
