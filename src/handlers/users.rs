//! # User Registration HTTP Handlers
//!
//! 회원가입 엔드포인트와 서버 동작 확인용 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | 모든 메서드 | `/` | 동작 확인 (`Hello World!`) | 200 OK |
//! | `POST` | `/register` | 회원가입 요청 검증 | 200 OK / 422 |
//!
//! ## 응답 예제
//!
//! ### 성공 (200 OK)
//! ```json
//! { "message": "Email is a@b.com", "status": "success" }
//! ```
//!
//! ### 잘못된 JSON (422 Unprocessable Entity)
//! ```json
//! { "message": "Invalid JSON", "status": "error" }
//! ```
//!
//! ### 검증 실패 (422 Unprocessable Entity)
//! ```json
//! {
//!   "errors": {
//!     "confirm_password": ["The confirm_password should be equal to the Password"],
//!     "name": ["The name is required"]
//!   },
//!   "message": "validation error",
//!   "status": "error"
//! }
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::core::errors::AppError;
use crate::handlers::responder;
use crate::services::users::registration_service::RegistrationService;

/// 서버 동작 확인 핸들러
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:3000/
/// ```
pub async fn hello_world() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Hello World!")
}

/// 회원가입 핸들러
///
/// 본문의 Content-Type은 검사하지 않고 원시 바이트를 그대로 디코딩합니다.
/// 디코딩 실패와 검증 실패는 `AppError`로 전파되어 422 응답이 됩니다.
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "A",
///   "email": "a@b.com",
///   "password": "secret",
///   "confirm_password": "secret"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/register \
///   -d '{"name":"A","email":"a@b.com","password":"secret","confirm_password":"secret"}'
/// ```
pub async fn register_user(
    body: web::Bytes,
    service: web::Data<RegistrationService>,
) -> Result<HttpResponse, AppError> {
    let envelope = service.register(&body)?;

    Ok(responder::success_response(envelope))
}

#[cfg(test)]
mod tests {
    use crate::routes::configure_all_routes;
    use crate::services::users::registration_service::RegistrationService;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(
                        RegistrationService::new().expect("registration rules"),
                    ))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn register(body: &'static str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/register")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_hello_world() {
        let app = app!();

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(test::read_body(response).await, "Hello World!".as_bytes());
    }

    #[actix_web::test]
    async fn test_register_valid_input() {
        let app = app!();

        let response = test::call_service(
            &app,
            register(r#"{"name":"A","email":"a@b.com","password":"secret","confirm_password":"secret"}"#).to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "status": "success", "message": "Email is a@b.com" }));
    }

    #[actix_web::test]
    async fn test_register_same_request_twice_gives_identical_responses() {
        let app = app!();
        let payload = r#"{"name":"A","email":"a@b.com","password":"secret","confirm_password":"secret"}"#;

        let first = test::call_service(&app, register(payload).to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);
        let first = test::read_body(first).await;

        let second = test::call_service(&app, register(payload).to_request()).await;
        assert_eq!(second.status(), StatusCode::OK);
        let second = test::read_body(second).await;

        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_register_invalid_json() {
        let app = app!();

        for payload in ["", "not json", "{\"name\":", "[\"unterminated\""] {
            let response = test::call_service(&app, register(payload).to_request()).await;

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "payload: {payload:?}");
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body, json!({ "status": "error", "message": "Invalid JSON" }));
        }
    }

    #[actix_web::test]
    async fn test_register_missing_required_fields() {
        let app = app!();

        let response = test::call_service(&app, register("{}").to_request()).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({
                "status": "error",
                "message": "validation error",
                "errors": {
                    "name": ["The name is required"],
                    "email": ["The email is required"],
                    "password": ["The password is required"],
                    "confirm_password": ["The confirm_password is required"]
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_register_invalid_email() {
        let app = app!();

        let response = test::call_service(
            &app,
            register(r#"{"name":"A","email":"not-an-email","password":"secret","confirm_password":"secret"}"#).to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body["errors"],
            json!({ "email": ["The email should be a valid email"] })
        );
    }

    #[actix_web::test]
    async fn test_register_missing_name_and_mismatched_passwords() {
        let app = app!();

        let response = test::call_service(
            &app,
            register(r#"{"email":"a@b.com","password":"secret","confirm_password":"different"}"#).to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body["errors"],
            json!({
                "name": ["The name is required"],
                "confirm_password": ["The confirm_password should be equal to the Password"]
            })
        );
    }

    #[actix_web::test]
    async fn test_register_mixed_case_and_repeated_keys() {
        let app = app!();

        let response = test::call_service(
            &app,
            register(r#"{"Name":"A","EMAIL":"x@y.com","email":"a@b.com","Password":"s","Confirm_Password":"s"}"#)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "status": "success", "message": "Email is a@b.com" }));
    }

    #[actix_web::test]
    async fn test_register_mistyped_id_is_invalid_json() {
        let app = app!();

        let response = test::call_service(
            &app,
            register(r#"{"ID":"1","name":"A","email":"a@b.com","password":"s","confirm_password":"s"}"#)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "status": "error", "message": "Invalid JSON" }));
    }

    #[actix_web::test]
    async fn test_register_rejects_other_methods() {
        let app = app!();

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/register").to_request()).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
