//! 환경변수 기반 설정
//!
//! .env 파일을 현재/상위 디렉토리에서 탐색해 로드합니다.

use std::env;

use dotenv::dotenv;

/// GameConnect 어댑터 설정
#[derive(Debug, Clone)]
pub struct GameConnectConfig {
    /// 로그 레벨 (tracing EnvFilter 디렉티브)
    pub log_level: String,
}

impl GameConnectConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Self {
        // .env 파일 로드 (현재 디렉토리와 상위 디렉토리에서 찾기)
        let env_paths = vec![".env", "../.env", "../../.env"];
        let mut env_loaded = false;

        for path in env_paths {
            if std::path::Path::new(path).exists() {
                dotenv::from_filename(path).ok();
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            dotenv().ok(); // 기본 .env 파일 시도
        }

        let log_level = env::var("GAMECONNECT_LOG_LEVEL").unwrap_or_else(|_| {
            println!("GAMECONNECT_LOG_LEVEL 환경변수가 없어서 info를 사용합니다.");
            "info".to_string()
        });

        Self { log_level }
    }
}

impl Default for GameConnectConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
