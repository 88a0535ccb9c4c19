//! # 필드 규칙 선언 및 검증 엔진
//!
//! 구조체 태그나 런타임 리플렉션 대신, 필드별 규칙을 명시적인 선언 목록으로
//! 정의하고 애플리케이션 시작 시 한 번 검사한 뒤 불변 값으로 재사용합니다.
//!
//! ## 구성 요소
//!
//! - [`RuleKind`] - 규칙 종류 (닫힌 열거형, `match`로 분기)
//! - [`FieldRule`] - 필드 하나에 대한 선언 (선언 이름, 표시 이름, 값 접근자, 규칙 목록)
//! - [`RuleSet`] - 검사를 통과한 선언 목록 (검증 엔진)
//! - [`FieldViolation`] - 엔진이 보고하는 개별 규칙 위반
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::validation::{FieldRule, RuleKind, RuleSet};
//!
//! let rules = RuleSet::new(vec![
//!     FieldRule::new("Email", |input: &SignupForm| input.email.as_str())
//!         .rule(RuleKind::Required)
//!         .rule(RuleKind::Email),
//! ])?;
//!
//! let violations = rules.violations(&form);
//! ```

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

/// 입력 값에서 필드 문자열을 꺼내는 접근자
pub type FieldAccessor<T> = fn(&T) -> &str;

/// 검증 규칙 종류
///
/// 새 규칙을 추가하면 메시지 템플릿(`translator`)과 검사 로직 모두에서
/// 컴파일러가 누락된 분기를 알려줍니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// 빈 문자열이 아니어야 함
    Required,

    /// 이메일 형식이어야 함
    Email,

    /// 지정한 선언 이름의 필드와 값이 같아야 함
    EqField(&'static str),

    /// 사용자 정의 검사 함수
    ///
    /// 전용 메시지 템플릿이 없으므로 "is invalid" 메시지로 번역됩니다.
    Custom {
        tag: &'static str,
        check: fn(&str) -> bool,
    },
}

impl RuleKind {
    /// 규칙 태그 (`required`, `email`, `eqfield` 또는 사용자 정의 태그)
    pub fn tag(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Email => "email",
            RuleKind::EqField(_) => "eqfield",
            RuleKind::Custom { tag, .. } => *tag,
        }
    }

    /// 규칙 파라미터 (`eqfield`의 비교 대상 필드명)
    pub fn param(&self) -> Option<&'static str> {
        match self {
            RuleKind::EqField(other) => Some(*other),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(param) => write!(f, "{}={}", self.tag(), param),
            None => f.write_str(self.tag()),
        }
    }
}

/// 필드 하나에 대한 규칙 선언
///
/// `name`은 코드상의 선언 이름(예: `ConfirmPassword`)이며, 외부에 노출되는
/// 표시 이름은 `display_name`을 지정하지 않으면 선언 이름의 소문자가 됩니다.
pub struct FieldRule<T> {
    name: &'static str,
    display_name: Option<&'static str>,
    accessor: FieldAccessor<T>,
    rules: Vec<RuleKind>,
}

impl<T> FieldRule<T> {
    pub fn new(name: &'static str, accessor: FieldAccessor<T>) -> Self {
        Self {
            name,
            display_name: None,
            accessor,
            rules: Vec::new(),
        }
    }

    /// 외부 표시 이름을 지정합니다 (JSON 키 등).
    pub fn display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// 규칙을 추가합니다. 규칙은 추가한 순서대로 검사됩니다.
    pub fn rule(mut self, rule: RuleKind) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 표시 이름을 결정합니다.
    ///
    /// 명시적 표시 이름이 있으면 그것을, 없으면 선언 이름의 소문자를 사용합니다.
    pub fn resolved_display_name(&self) -> String {
        match self.display_name {
            Some(display_name) => display_name.to_string(),
            None => self.name.to_lowercase(),
        }
    }

    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }
}

impl<T> fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("rules", &self.rules)
            .finish()
    }
}

/// 검증 엔진이 보고하는 규칙 위반 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// 위반이 발생한 필드의 선언 이름
    pub field: &'static str,
    /// 실패한 규칙
    pub rule: RuleKind,
}

impl FieldViolation {
    pub fn new(field: &'static str, rule: RuleKind) -> Self {
        Self { field, rule }
    }

    pub fn tag(&self) -> &'static str {
        self.rule.tag()
    }

    pub fn param(&self) -> Option<&'static str> {
        self.rule.param()
    }
}

/// 규칙 선언 자체의 결함
///
/// 요청 데이터가 아니라 코드의 선언이 잘못된 경우이므로
/// 서버 시작 전에 발견되어 프로세스를 중단시켜야 합니다.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleDeclarationError {
    #[error("field `{field}` declares `{rule}` but no field named `{target}` is declared")]
    UnknownField {
        field: &'static str,
        rule: String,
        target: &'static str,
    },

    #[error("field `{0}` is declared more than once")]
    DuplicateField(&'static str),
}

/// 검사를 통과한 필드 규칙 목록 (검증 엔진)
///
/// 생성 이후에는 변경되지 않으므로 여러 워커에서 동기화 없이 공유할 수 있습니다.
/// `eqfield` 대상은 생성 시점에 이미 확인되어 있으므로 검증은 실패하지 않습니다.
pub struct RuleSet<T> {
    fields: Vec<FieldRule<T>>,
}

impl<T> RuleSet<T> {
    /// 선언 목록을 검사하고 규칙 집합을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `RuleDeclarationError::DuplicateField` - 같은 선언 이름이 두 번 이상 등장
    /// * `RuleDeclarationError::UnknownField` - `EqField`가 선언되지 않은 필드를 참조
    pub fn new(fields: Vec<FieldRule<T>>) -> Result<Self, RuleDeclarationError> {
        let mut declared = HashSet::new();
        for field in &fields {
            if !declared.insert(field.name) {
                return Err(RuleDeclarationError::DuplicateField(field.name));
            }
        }

        for field in &fields {
            for rule in &field.rules {
                if let RuleKind::EqField(target) = rule {
                    if !declared.contains(target) {
                        return Err(RuleDeclarationError::UnknownField {
                            field: field.name,
                            rule: rule.to_string(),
                            target: *target,
                        });
                    }
                }
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldRule<T>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// 입력 값에 모든 규칙을 적용하고 위반 목록을 반환합니다.
    ///
    /// 필드는 선언 순서대로 검사하며, 한 필드 안에서는 처음 실패한 규칙만
    /// 보고하고 다음 필드로 넘어갑니다.
    pub fn violations(&self, input: &T) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for field in &self.fields {
            let value = (field.accessor)(input);
            if let Some(rule) = field.rules.iter().find(|rule| !self.passes(rule, value, input)) {
                violations.push(FieldViolation::new(field.name, *rule));
            }
        }

        violations
    }

    fn passes(&self, rule: &RuleKind, value: &str, input: &T) -> bool {
        match rule {
            RuleKind::Required => !value.is_empty(),
            RuleKind::Email => value.validate_email(),
            RuleKind::EqField(target) => self
                .field(target)
                .is_some_and(|other| (other.accessor)(input) == value),
            RuleKind::Custom { check, .. } => check(value),
        }
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("fields", &self.fields).finish()
    }
}
