//! 회원가입 검증 서비스 메인 애플리케이션
//!
//! 검증 규칙을 한 번 구성한 뒤 Actix-web 기반의 HTTP 서버를 구동합니다.

use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use register_service::config::ServerConfig;
use register_service::routes::configure_all_routes;
use register_service::services::users::RegistrationService;
use register_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    // 규칙 선언 결함은 요청 단위로 복구할 수 없으므로 서버 시작 전에 중단
    let service = RegistrationService::new().expect("회원가입 검증 규칙 선언 오류");

    start_http_server(web::Data::new(service)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 검증 서비스는 `web::Data`(내부적으로 `Arc`)로 모든 워커에 공유되며
/// 실행 중에는 변경되지 않습니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<RegistrationService>) -> std::io::Result<()> {
    let (host, port) = ServerConfig::bind_address();

    print_startup_summary(&host, port, service.rules());
    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => {
            // 개발 환경에서는 .env.dev 파일이 없어도 기본값으로 동작
            if dotenv::from_filename(".env.dev").is_err() {
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
