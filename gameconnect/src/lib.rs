//! GameConnect 어댑터 라이브러리
//!
//! 크로스 플랫폼 앱 런타임에 게임 서비스 SDK(로그인, 플레이어 정보,
//! 리더보드, 업적, 연합 자격 증명 교환)를 노출하는 브리지 어댑터입니다.

pub mod adapter;
pub mod bridge;
pub mod client;
pub mod intent;
pub mod invocation;
pub mod outcome;

// Re-export commonly used types
pub use adapter::GameConnect;
pub use client::GameServicesClient;
pub use intent::{IntentLauncher, UiIntent};
pub use invocation::{CallResult, Invocation, Payload};
pub use outcome::Outcome;

pub use shared::error::{GameConnectError, GameResult};
pub use shared::types::{GooglePlayCredential, Player, PlayerScore, PLAY_GAMES_PROVIDER_ID};
