//! 호출자에게 전달되는 페이로드 타입 정의
//!
//! serde rename으로 브리지 와이어 키를 그대로 유지합니다.

use serde::{Deserialize, Serialize};

/// Google Play Games 자격 증명의 providerId 고정값
pub const PLAY_GAMES_PROVIDER_ID: &str = "playgames.google.com";

/// 로그인된 플레이어 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub player_name: String,
}

/// 리더보드에서 조회한 플레이어 총점
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_score: i64,
}

/// 서버 측 인증 코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAuthCredential {
    #[serde(rename = "serverAuthCode")]
    pub server_auth_code: String,
}

/// 연합 인증(Firebase 등)에 전달하는 Google Play Games 자격 증명
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooglePlayCredential {
    pub credential: ServerAuthCredential,
    #[serde(rename = "providerId")]
    pub provider_id: String,
}

impl GooglePlayCredential {
    /// 서버 인증 코드로부터 자격 증명 페이로드 생성
    pub fn from_auth_code(server_auth_code: String) -> Self {
        Self {
            credential: ServerAuthCredential { server_auth_code },
            provider_id: PLAY_GAMES_PROVIDER_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_wire_keys() {
        let cred = GooglePlayCredential::from_auth_code("tok123".into());
        let json = serde_json::to_value(&cred).unwrap();

        assert_eq!(json["credential"]["serverAuthCode"], "tok123");
        assert_eq!(json["providerId"], "playgames.google.com");
    }

    #[test]
    fn test_player_score_wire_key() {
        let score = PlayerScore { player_score: 42 };
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json["player_score"], 42);
    }
}
