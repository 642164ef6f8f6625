//! 인증 게이트 어댑터
//!
//! 브리지 런타임에서 받은 요청을 외부 SDK 클라이언트로 위임하고,
//! 비동기 완료 신호를 resolve/reject 계약으로 번역합니다.
//!
//! 어댑터는 장기 상태를 소유하지 않습니다. 모든 연산은 `&self` 비동기
//! 메서드이고 요청 단위로 독립적이므로 동시에 실행해도 안전합니다.
//! 각 연산은 정확히 하나의 `CallResult`를 값으로 반환합니다.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use shared::error::{GameConnectError, GameResult};
use shared::types::{GooglePlayCredential, PlayerScore};

use crate::client::GameServicesClient;
use crate::intent::IntentLauncher;
use crate::invocation::{CallResult, Invocation, Payload};
use crate::outcome::Outcome;

/// 게임 서비스 브리지 어댑터
pub struct GameConnect {
    client: Arc<dyn GameServicesClient>,
    launcher: Arc<dyn IntentLauncher>,
}

impl GameConnect {
    /// 새 어댑터 생성
    pub fn new(client: Arc<dyn GameServicesClient>, launcher: Arc<dyn IntentLauncher>) -> Self {
        Self { client, launcher }
    }

    /// 사용자 로그인
    ///
    /// 인증 상태를 먼저 확인하고, 이미 인증된 경우 로그인 플로우를
    /// 호출하지 않고 바로 resolve합니다 (멱등 short-circuit).
    pub async fn sign_in(&self) -> CallResult {
        info!("signIn method called");
        self.sign_in_inner().await.into()
    }

    async fn sign_in_inner(&self) -> GameResult<Payload> {
        // 1단계: 인증 상태 조회. 조회 실패는 그대로 reject.
        let authenticated = self.client.is_authenticated().await.into_result()?;

        if authenticated {
            info!("User is already authenticated");
            return Ok(Payload::new());
        }

        // 2단계: 로그인 플로우. 사용자가 거절/취소한 경우는
        // 전송 오류와 구분되는 고정 메시지로 reject한다.
        let granted = self.client.sign_in().await.into_result()?;
        if granted {
            info!("Sign-in completed successful");
            Ok(Payload::new())
        } else {
            info!("Sign-in failed or cancelled");
            Err(GameConnectError::SignInDeclined)
        }
    }

    /// 로그인된 플레이어 정보 조회
    pub async fn fetch_user_information(&self) -> CallResult {
        info!("fetchUserInformation method called");
        self.fetch_user_information_inner().await.into()
    }

    async fn fetch_user_information_inner(&self) -> GameResult<Payload> {
        let player = self.client.current_player().await.into_result()?;
        Ok(to_payload(&player))
    }

    /// 리더보드 화면 표시
    ///
    /// 인텐트 조회에 성공하면 호스트 런처로 넘깁니다. 실패는 로그만 남기고
    /// reject하지 않습니다 (원본 플러그인의 호출자 계약에 실패가 없음).
    pub async fn show_leaderboard_view(&self, call: &Invocation) -> CallResult {
        info!("showLeaderboard has been called");
        let leaderboard_id = match call.require_string("leaderboardID") {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        match self.client.leaderboard_intent(leaderboard_id).await {
            Outcome::Success(intent) => self.launcher.launch(intent),
            Outcome::Failure(msg) => error!("Failed to get leaderboard intent: {msg}"),
            Outcome::Cancelled => error!("Leaderboard intent request was cancelled"),
        }
        CallResult::resolved_empty()
    }

    /// 업적 화면 표시 (실패 처리는 리더보드 화면과 동일)
    pub async fn show_achievements_view(&self) -> CallResult {
        info!("showAchievements has been called");
        match self.client.achievements_intent().await {
            Outcome::Success(intent) => self.launcher.launch(intent),
            Outcome::Failure(msg) => error!("Failed to get achievements intent: {msg}"),
            Outcome::Cancelled => error!("Achievements intent request was cancelled"),
        }
        CallResult::resolved_empty()
    }

    /// 리더보드에 점수 제출 (fire-and-forget)
    pub async fn submit_score(&self, call: &Invocation) -> CallResult {
        info!("submitScore has been called");
        self.submit_score_inner(call).await.into()
    }

    async fn submit_score_inner(&self, call: &Invocation) -> GameResult<Payload> {
        let leaderboard_id = call.require_string("leaderboardID")?;
        let total_score_amount = call.require_i64("totalScoreAmount")?;

        // 낙관적 호출: 결과가 존재하지 않으므로 기다리거나 보고하지 않는다.
        self.client
            .submit_score(leaderboard_id, total_score_amount)
            .await;
        Ok(Payload::new())
    }

    /// 업적 해제 (fire-and-forget)
    pub async fn unlock_achievement(&self, call: &Invocation) -> CallResult {
        info!("unlockAchievement has been called");
        self.unlock_achievement_inner(call).await.into()
    }

    async fn unlock_achievement_inner(&self, call: &Invocation) -> GameResult<Payload> {
        let achievement_id = call.require_string("achievementID")?;
        self.client.unlock_achievement(achievement_id).await;
        Ok(Payload::new())
    }

    /// 업적 진행도 증가 (fire-and-forget)
    pub async fn increment_achievement_progress(&self, call: &Invocation) -> CallResult {
        info!("incrementAchievementProgress has been called");
        self.increment_achievement_progress_inner(call).await.into()
    }

    async fn increment_achievement_progress_inner(&self, call: &Invocation) -> GameResult<Payload> {
        let achievement_id = call.require_string("achievementID")?;
        let points_to_increment = call.require_i64("pointsToIncrement")?;
        self.client
            .increment_achievement(achievement_id, points_to_increment)
            .await;
        Ok(Payload::new())
    }

    /// 리더보드의 플레이어 총점 조회
    ///
    /// 점수 행이 없는 것은 실패가 아니며 0으로 정규화합니다.
    pub async fn get_user_total_score(&self, call: &Invocation) -> CallResult {
        info!("getUserTotalScore has been called");
        self.get_user_total_score_inner(call).await.into()
    }

    async fn get_user_total_score_inner(&self, call: &Invocation) -> GameResult<Payload> {
        let leaderboard_id = call.require_string("leaderboardID")?;

        match self.client.player_leaderboard_score(leaderboard_id).await {
            Outcome::Success(score) => {
                let payload = PlayerScore {
                    player_score: score.unwrap_or(0),
                };
                Ok(to_payload(&payload))
            }
            Outcome::Failure(msg) => {
                error!("Error getting player score: {msg}");
                Err(GameConnectError::External(format!(
                    "Error getting player score: {msg}"
                )))
            }
            Outcome::Cancelled => Err(GameConnectError::Cancelled),
        }
    }

    /// 연합 인증용 Google Play Games 자격 증명 조회
    ///
    /// 인증 게이트 → 파라미터 검증 → 서버 코드 교환 순서로 진행하며,
    /// 각 게이트에서 short-circuit합니다. 순서는 바꿀 수 없습니다:
    /// 미인증 사용자의 serverClientId는 검증조차 하지 않습니다.
    pub async fn get_google_play_credential(&self, call: &Invocation) -> CallResult {
        info!("getGooglePlayCredential has been called");
        self.get_google_play_credential_inner(call).await.into()
    }

    async fn get_google_play_credential_inner(&self, call: &Invocation) -> GameResult<Payload> {
        // 1단계: 인증 상태 조회
        let authenticated = match self.client.is_authenticated().await {
            Outcome::Success(v) => v,
            Outcome::Failure(msg) => {
                error!("Error checking authentication status: {msg}");
                return Err(GameConnectError::External(format!(
                    "Error checking authentication status: {msg}"
                )));
            }
            Outcome::Cancelled => return Err(GameConnectError::Cancelled),
        };

        // 2단계: 인증 게이트
        if !authenticated {
            return Err(GameConnectError::NotAuthenticated);
        }

        // 3단계: 게이트 통과 후에만 파라미터 검증
        let server_client_id = call.get_string("serverClientId").unwrap_or("");
        if server_client_id.is_empty() {
            return Err(GameConnectError::MissingParameter(
                "serverClientId is required for Google Play Games credential".to_string(),
            ));
        }

        // 4단계: 서버 측 코드 교환
        match self
            .client
            .request_server_side_access(server_client_id, false)
            .await
        {
            Outcome::Success(server_auth_code) => {
                Ok(to_payload(&GooglePlayCredential::from_auth_code(
                    server_auth_code,
                )))
            }
            Outcome::Failure(msg) => {
                error!("Failed to get server auth code: {msg}");
                Err(GameConnectError::External(format!(
                    "Failed to get Google Play Games credential: {msg}"
                )))
            }
            Outcome::Cancelled => Err(GameConnectError::Cancelled),
        }
    }
}

/// serde 직렬화 가능한 값을 resolve 페이로드로 변환
fn to_payload<T: Serialize>(value: &T) -> Payload {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Payload::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::Player;

    #[test]
    fn test_to_payload_keeps_wire_keys() {
        let player = Player {
            player_id: "p-1".into(),
            player_name: "아무개".into(),
        };
        let payload = to_payload(&player);

        assert_eq!(payload["player_id"], "p-1");
        assert_eq!(payload["player_name"], "아무개");
    }
}
