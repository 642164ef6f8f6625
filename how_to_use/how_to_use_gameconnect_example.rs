//! GameConnect 어댑터 임베딩 예제
//!
//! 이 예제는 호스트 런타임에 어댑터를 연결하는 방법을 보여줍니다.
//! - SDK 클라이언트 trait 구현 (여기서는 인메모리 가짜 구현)
//! - 호스트 인텐트 런처 연결
//! - 메서드 이름 디스패치로 요청 처리

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use gameconnect::{
    CallResult, GameConnect, GameServicesClient, IntentLauncher, Invocation, Outcome, Payload,
    Player, UiIntent,
};
use shared::config::GameConnectConfig;

/// 항상 로그인된 세션을 흉내내는 인메모리 클라이언트
struct FakePlayGamesClient;

#[async_trait]
impl GameServicesClient for FakePlayGamesClient {
    async fn is_authenticated(&self) -> Outcome<bool> {
        Outcome::Success(true)
    }

    async fn sign_in(&self) -> Outcome<bool> {
        Outcome::Success(true)
    }

    async fn current_player(&self) -> Outcome<Player> {
        Outcome::Success(Player {
            player_id: "demo-player".into(),
            player_name: "데모 플레이어".into(),
        })
    }

    async fn leaderboard_intent(&self, leaderboard_id: &str) -> Outcome<UiIntent> {
        Outcome::Success(UiIntent::new("leaderboard").with_extra("leaderboardID", leaderboard_id))
    }

    async fn achievements_intent(&self) -> Outcome<UiIntent> {
        Outcome::Success(UiIntent::new("achievements"))
    }

    async fn submit_score(&self, leaderboard_id: &str, total_score_amount: i64) {
        info!("점수 제출: {leaderboard_id} ← {total_score_amount}");
    }

    async fn unlock_achievement(&self, achievement_id: &str) {
        info!("업적 해제: {achievement_id}");
    }

    async fn increment_achievement(&self, achievement_id: &str, points_to_increment: i64) {
        info!("업적 진행: {achievement_id} +{points_to_increment}");
    }

    async fn player_leaderboard_score(&self, _leaderboard_id: &str) -> Outcome<Option<i64>> {
        Outcome::Success(Some(1500))
    }

    async fn request_server_side_access(
        &self,
        _server_client_id: &str,
        _force_refresh: bool,
    ) -> Outcome<String> {
        Outcome::Success("demo-auth-code".into())
    }
}

/// 인텐트를 콘솔에 출력하는 런처
struct ConsoleLauncher;

impl IntentLauncher for ConsoleLauncher {
    fn launch(&self, intent: UiIntent) {
        println!("인텐트 실행: {} ({:?})", intent.target, intent.extras);
    }
}

fn call_params(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}

#[tokio::main]
async fn main() {
    let config = GameConnectConfig::from_env();
    shared::logging::init(&config);

    let adapter = GameConnect::new(Arc::new(FakePlayGamesClient), Arc::new(ConsoleLauncher));

    // 로그인 (이미 인증되어 있으므로 short-circuit)
    let result = adapter.handle(Invocation::without_params("signIn")).await;
    println!("signIn → {result:?}");

    // 플레이어 정보
    let result = adapter
        .handle(Invocation::without_params("fetchUserInformation"))
        .await;
    println!("fetchUserInformation → {result:?}");

    // 점수 제출 (fire-and-forget)
    let call = Invocation::new(
        "submitScore",
        call_params(json!({"leaderboardID": "lb-weekly", "totalScoreAmount": 2048})),
    );
    println!("submitScore → {:?}", adapter.handle(call).await);

    // 연합 인증 자격 증명
    let call = Invocation::new(
        "getGooglePlayCredential",
        call_params(json!({"serverClientId": "demo-client-id"})),
    );
    match adapter.handle(call).await {
        CallResult::Resolved(payload) => println!("credential → {payload:?}"),
        CallResult::Rejected(msg) => println!("credential 거부 → {msg}"),
    }
}
