//! 규칙 위반 → 사람이 읽을 수 있는 메시지 변환
//!
//! 검증 엔진이 보고한 [`FieldViolation`] 목록을 표시 이름별 메시지 목록
//! ([`ErrorReport`])으로 변환합니다. 상태가 없는 순수 함수입니다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::rules::{FieldViolation, RuleKind, RuleSet};

/// 표시 이름 → 메시지 목록
///
/// JSON으로 직렬화할 때 키는 정렬된 순서로 출력됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport(BTreeMap<String, Vec<String>>);

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드에 메시지를 추가합니다. 같은 필드의 메시지는 추가한 순서를 유지합니다.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 메시지가 있는 필드 수
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// 규칙 종류에 맞는 메시지를 만듭니다.
///
/// `eqfield`의 파라미터는 표시 이름으로 바꾸지 않고 선언 이름 그대로 사용합니다.
pub fn message_for(rule: &RuleKind, name: &str) -> String {
    match rule {
        RuleKind::Required => format!("The {} is required", name),
        RuleKind::Email => format!("The {} should be a valid email", name),
        RuleKind::EqField(param) => format!("The {} should be equal to the {}", name, param),
        RuleKind::Custom { .. } => format!("The {} is invalid", name),
    }
}

/// 위반 목록을 에러 리포트로 변환합니다.
///
/// 규칙 집합에 선언되지 않은 필드의 위반은 선언 이름의 소문자를 표시 이름으로 사용합니다.
pub fn translate<T>(rules: &RuleSet<T>, violations: &[FieldViolation]) -> ErrorReport {
    let mut report = ErrorReport::new();

    for violation in violations {
        let name = match rules.field(violation.field) {
            Some(field) => field.resolved_display_name(),
            None => violation.field.to_lowercase(),
        };

        report.push(name.as_str(), message_for(&violation.rule, &name));
    }

    report
}
