//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목과 등록된 라우트, 검증 규칙 목록을 표시합니다.

use crate::validation::RuleSet;

/// 박스 내부 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                Server starting...                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        width = CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 서브 항목 한 줄을 만듭니다
///
/// ```text
///    ├─ POST /register: validate registration
/// ```
pub fn sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 서브 항목을 출력합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", sub_task(name, status));
}

/// 필드 규칙 목록을 표시 이름별 한 줄씩 만듭니다
///
/// ```text
///    ├─ email: required, email
///    ├─ confirm_password: required, eqfield=Password
/// ```
pub fn rule_lines<T>(rules: &RuleSet<T>) -> Vec<String> {
    rules
        .fields()
        .iter()
        .map(|field| {
            let declared = field
                .rules()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            sub_task(&field.resolved_display_name(), &declared)
        })
        .collect()
}

/// 서버 시작 요약을 출력합니다
///
/// 바인딩 주소와 등록된 검증 규칙을 시각적으로 강조된 형태로 출력합니다.
pub fn print_startup_summary<T>(host: &str, port: u16, rules: &RuleSet<T>) {
    println!();
    print_boxed_title("Server starting...");
    print_sub_task("Listening", &format!("http://{}:{}", host, port));
    print_sub_task("Routes", "/ , POST /register");
    println!("   📋 Registration rules:");
    for line in rule_lines(rules) {
        println!("{}", line);
    }
    println!();
}
