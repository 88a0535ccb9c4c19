//! API 라우트 설정 모듈
//!
//! 동작 확인 엔드포인트와 회원가입 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `/` - 모든 메서드 허용, `Hello World!` 반환
//! - `POST /register` - 회원가입 요청 검증 (다른 메서드는 405)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(RegistrationService::new()?))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, web};

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 회원가입 라우트는 `web::Data<RegistrationService>`가 앱에 등록되어 있어야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Liveness check
    cfg.service(web::resource("/").to(handlers::users::hello_world));

    configure_user_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// `POST` 이외의 메서드는 405 Method Not Allowed로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:3000/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"A","email":"a@b.com","password":"secret","confirm_password":"secret"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/register")
            .route(web::post().to(handlers::users::register_user))
            .default_service(web::to(|| async { HttpResponse::MethodNotAllowed().finish() })),
    );
}
