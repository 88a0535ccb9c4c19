//! # Data Transfer Objects (DTO) Module
//!
//! 클라이언트와 서버 간의 데이터 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── envelope.rs         # 모든 JSON 응답의 공통 봉투
//! └── users/
//!     └── request/        # 요청 DTO (클라이언트 → 서버)
//! ```
//!
//! | 역할 | 타입 |
//! |------|------|
//! | HTTP 요청 본문 매핑 | `RegisterUserRequest` |
//! | HTTP 응답 본문 매핑 | `ResponseEnvelope` |
//! | JSON 필드 매핑 | `serde` annotations |

pub mod envelope;
pub mod users;

pub use envelope::*;
pub use users::*;
