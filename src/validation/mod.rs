//! # 입력 검증 모듈
//!
//! 요청 DTO를 명시적인 필드 규칙 선언으로 검증하고, 규칙 위반을
//! 필드별 사람이 읽을 수 있는 메시지로 변환합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! RegisterUserRequest
//!        │
//!        ▼
//! RuleSet::violations()   ← 선언 순서대로 규칙 적용
//!        │  Vec<FieldViolation>
//!        ▼
//! translate()             ← 표시 이름 결정 + 메시지 템플릿
//!        │  ErrorReport
//!        ▼
//! AppError::ValidationError → 422 응답
//! ```
//!
//! ## 메시지 템플릿
//!
//! | 규칙 | 메시지 |
//! |------|--------|
//! | `required` | `The {name} is required` |
//! | `email` | `The {name} should be a valid email` |
//! | `eqfield` | `The {name} should be equal to the {param}` |
//! | 그 외 | `The {name} is invalid` |

pub mod rules;
pub mod translator;

pub use rules::*;
pub use translator::*;

/// 입력 값을 검증하고, 위반이 있으면 에러 리포트를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// match validate_inputs(&rules, &request) {
///     Ok(()) => { /* 통과 */ }
///     Err(report) => { /* report.get("email") ... */ }
/// }
/// ```
pub fn validate_inputs<T>(rules: &RuleSet<T>, input: &T) -> Result<(), ErrorReport> {
    let violations = rules.violations(input);
    if violations.is_empty() {
        return Ok(());
    }

    Err(translate(rules, &violations))
}
