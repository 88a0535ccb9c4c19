//! 회원가입 요청 처리 서비스
//!
//! 요청 본문 디코딩, 필드 검증, 성공 응답 봉투 생성을 담당합니다.
//! HTTP 계층과 분리되어 있어 핸들러 없이도 테스트할 수 있습니다.

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::envelope::ResponseEnvelope;
use crate::domain::dto::users::request::{RegisterUserRequest, registration_rules};
use crate::validation::{RuleDeclarationError, RuleSet, validate_inputs};

/// 회원가입 서비스
///
/// 서버 시작 전에 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
/// 내부 규칙 집합은 생성 이후 변경되지 않으므로 동기화가 필요 없습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let service = RegistrationService::new()?;
/// let envelope = service.register(body)?;
/// assert_eq!(envelope.message, "Email is a@b.com");
/// ```
#[derive(Debug)]
pub struct RegistrationService {
    rules: RuleSet<RegisterUserRequest>,
}

impl RegistrationService {
    /// 회원가입 규칙으로 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// 규칙 선언에 결함이 있으면 `RuleDeclarationError`를 반환합니다.
    /// 호출자(main)는 이 에러를 복구하지 않고 프로세스를 종료해야 합니다.
    pub fn new() -> Result<Self, RuleDeclarationError> {
        Ok(Self::with_rules(registration_rules()?))
    }

    pub fn with_rules(rules: RuleSet<RegisterUserRequest>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet<RegisterUserRequest> {
        &self.rules
    }

    /// 요청 본문을 처리하고 성공 응답 봉투를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidJson` - 본문이 올바른 JSON이 아님 (검증은 수행하지 않음)
    /// * `AppError::ValidationError` - 하나 이상의 필드가 규칙을 위반함
    pub fn register(&self, body: &[u8]) -> AppResult<ResponseEnvelope> {
        let input = RegisterUserRequest::from_json(body)?;

        self.validate_inputs(&input)?;

        log::info!("회원가입 요청 검증 통과: {}", input.email);
        Ok(ResponseEnvelope::success(format!("Email is {}", input.email)))
    }

    /// 디코딩된 요청을 검증합니다.
    pub fn validate_inputs(&self, input: &RegisterUserRequest) -> AppResult<()> {
        validate_inputs(&self.rules, input).map_err(|report| {
            log::debug!(
                "회원가입 요청 검증 실패: {:?}",
                report.fields().collect::<Vec<_>>()
            );
            AppError::ValidationError(report)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::envelope::ResponseStatus;
    use crate::validation::{FieldRule, RuleKind};

    fn service() -> RegistrationService {
        RegistrationService::new().expect("registration rules are well formed")
    }

    #[test]
    fn test_register_valid_body() {
        let body = br#"{"name":"A","email":"a@b.com","password":"secret","confirm_password":"secret"}"#;

        let envelope = service().register(body).unwrap();

        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.message, "Email is a@b.com");
        assert!(envelope.errors.is_none());
    }

    #[test]
    fn test_register_echoes_email_verbatim() {
        let body = br#"{"name":"A","email":"Mixed.Case+tag@Example.COM","password":"p","confirm_password":"p"}"#;

        let envelope = service().register(body).unwrap();

        assert_eq!(envelope.message, "Email is Mixed.Case+tag@Example.COM");
    }

    #[test]
    fn test_register_malformed_body_skips_validation() {
        let result = service().register(b"{");

        assert!(matches!(result, Err(AppError::InvalidJson(_))));
    }

    #[test]
    fn test_register_reports_all_failing_fields() {
        let body = br#"{"email":"a@b.com","password":"secret","confirm_password":"nope"}"#;

        let Err(AppError::ValidationError(report)) = service().register(body) else {
            panic!("Expected ValidationError");
        };

        assert_eq!(report.get("name").unwrap(), ["The name is required"]);
        assert_eq!(
            report.get("confirm_password").unwrap(),
            ["The confirm_password should be equal to the Password"]
        );
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = RuleSet::new(vec![
            FieldRule::new("Name", |input: &RegisterUserRequest| input.name.as_str()).rule(
                RuleKind::Custom {
                    tag: "min",
                    check: |value| value.chars().count() >= 3,
                },
            ),
        ])
        .unwrap();
        let service = RegistrationService::with_rules(rules);

        let Err(AppError::ValidationError(report)) = service.register(br#"{"name":"Al"}"#) else {
            panic!("Expected ValidationError");
        };

        assert_eq!(report.get("name").unwrap(), ["The name is invalid"]);
    }
}
