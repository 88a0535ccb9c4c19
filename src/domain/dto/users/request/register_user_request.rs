//! # 회원가입 요청 DTO
//!
//! `POST /register` 요청 본문을 표현하는 구조체와 그 검증 규칙 선언을 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 표시 이름 | 규칙 |
//! |------|-----------|------|
//! | `Name` | `name` | required |
//! | `Email` | `email` | required, email |
//! | `Password` | `password` | required |
//! | `ConfirmPassword` | `confirm_password` | required, eqfield=Password |
//!
//! ## 역직렬화 규칙
//!
//! - 본문의 첫 번째 JSON 값만 읽고 그 뒤의 바이트는 무시합니다.
//! - 본문이 `null`이면 모든 필드가 빈 값인 요청으로 취급합니다.
//! - 키는 대소문자를 구분하지 않습니다 (`Name`, `NAME`, `name` 모두 같은 필드).
//! - 같은 키가 여러 번 나오면 마지막 값을 사용합니다.
//! - 누락된 필드는 빈 문자열이 되고, `null` 값은 이전 값을 바꾸지 않습니다.
//! - `ID` 키는 음이 아닌 정수(또는 `null`)여야 하며, 값은 사용하지 않습니다.
//! - 알 수 없는 필드는 무시합니다.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::validation::{FieldRule, RuleDeclarationError, RuleKind, RuleSet};

/// 회원가입 요청 DTO
///
/// 요청마다 새로 만들어지고 응답 후 버려집니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "secret",
///   "confirm_password": "secret"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// 비밀번호 확인 (`password`와 일치해야 함)
    pub confirm_password: String,
}

impl RegisterUserRequest {
    /// 요청 본문을 디코딩합니다.
    ///
    /// # Errors
    ///
    /// * 본문이 비어 있거나 JSON 문법이 잘못된 경우
    /// * 본문이 객체가 아닌 경우 (예: 배열)
    /// * 필드 타입이 맞지 않는 경우 (예: `"name": 5`, `"ID": "x"`)
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();

        match stream.next() {
            Some(decoded) => Ok(decoded?.unwrap_or_default()),
            // 빈 본문: EOF 에러를 얻기 위해 한 번 더 파싱
            None => serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default),
        }
    }
}

/// 본문 키가 가리키는 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKey {
    Id,
    Name,
    Email,
    Password,
    ConfirmPassword,
    Unknown,
}

impl RequestKey {
    const KNOWN: [(&'static str, RequestKey); 5] = [
        ("ID", RequestKey::Id),
        ("Name", RequestKey::Name),
        ("Email", RequestKey::Email),
        ("Password", RequestKey::Password),
        ("confirm_password", RequestKey::ConfirmPassword),
    ];

    fn parse(key: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map_or(RequestKey::Unknown, |(_, field)| field)
    }
}

struct RegisterUserRequestVisitor;

impl<'de> Visitor<'de> for RegisterUserRequestVisitor {
    type Value = RegisterUserRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a register user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = RegisterUserRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = match RequestKey::parse(&key) {
                RequestKey::Name => &mut request.name,
                RequestKey::Email => &mut request.email,
                RequestKey::Password => &mut request.password,
                RequestKey::ConfirmPassword => &mut request.confirm_password,
                RequestKey::Id => {
                    map.next_value::<Option<u64>>()?;
                    continue;
                }
                RequestKey::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(request)
    }
}

impl<'de> Deserialize<'de> for RegisterUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RegisterUserRequestVisitor)
    }
}

/// 회원가입 요청의 필드 규칙을 선언합니다.
///
/// 서버 시작 시 한 번 호출되며, 선언에 결함이 있으면 에러를 반환합니다.
pub fn registration_rules() -> Result<RuleSet<RegisterUserRequest>, RuleDeclarationError> {
    RuleSet::new(vec![
        FieldRule::new("Name", |input: &RegisterUserRequest| input.name.as_str())
            .rule(RuleKind::Required),
        FieldRule::new("Email", |input: &RegisterUserRequest| input.email.as_str())
            .rule(RuleKind::Required)
            .rule(RuleKind::Email),
        FieldRule::new("Password", |input: &RegisterUserRequest| input.password.as_str())
            .rule(RuleKind::Required),
        FieldRule::new("ConfirmPassword", |input: &RegisterUserRequest| {
            input.confirm_password.as_str()
        })
        .display_name("confirm_password")
        .rule(RuleKind::Required)
        .rule(RuleKind::EqField("Password")),
    ])
}
