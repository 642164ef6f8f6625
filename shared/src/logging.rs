//! 로깅 초기화
//!
//! tracing-subscriber 기반의 구조화된 로그 출력을 설정합니다.

use crate::config::GameConnectConfig;

/// 로깅 시스템 초기화
///
/// RUST_LOG 환경변수가 있으면 우선하고, 없으면 설정의 로그 레벨을 사용합니다.
/// 이미 초기화된 경우에는 무시합니다 (테스트에서 반복 호출 가능).
pub fn init(config: &GameConnectConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
