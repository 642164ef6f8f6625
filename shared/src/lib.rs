//! GameConnect 공통 라이브러리
//!
//! 어댑터와 호스트 측에서 공유하는 에러 타입, 페이로드 타입,
//! 설정 및 로깅 초기화를 제공합니다.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::GameConnectConfig;
pub use error::{GameConnectError, GameResult};
pub use types::{GooglePlayCredential, Player, PlayerScore, ServerAuthCredential, PLAY_GAMES_PROVIDER_ID};
