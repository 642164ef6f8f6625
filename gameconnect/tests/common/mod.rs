//! 테스트 공용 모의 구현
//!
//! 시나리오별 완료 신호를 미리 심어두고, 어떤 SDK 기능이 몇 번
//! 호출되었는지 기록하는 모의 클라이언트/런처입니다.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use gameconnect::{
    GameConnect, GameServicesClient, IntentLauncher, Outcome, Payload, Player, UiIntent,
};

/// 호출 기록을 남기는 모의 SDK 클라이언트
pub struct MockClient {
    auth: Outcome<bool>,
    sign_in: Outcome<bool>,
    player: Outcome<Player>,
    leaderboard_intent: Outcome<UiIntent>,
    achievements_intent: Outcome<UiIntent>,
    score: Outcome<Option<i64>>,
    server_access: Outcome<String>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            auth: Outcome::Success(false),
            sign_in: Outcome::Success(true),
            player: Outcome::Success(Player {
                player_id: "p-1".into(),
                player_name: "테스트플레이어".into(),
            }),
            leaderboard_intent: Outcome::Success(UiIntent::new("leaderboard")),
            achievements_intent: Outcome::Success(UiIntent::new("achievements")),
            score: Outcome::Success(Some(0)),
            server_access: Outcome::Success("auth-code".into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_auth(mut self, outcome: Outcome<bool>) -> Self {
        self.auth = outcome;
        self
    }

    pub fn with_sign_in(mut self, outcome: Outcome<bool>) -> Self {
        self.sign_in = outcome;
        self
    }

    pub fn with_player(mut self, outcome: Outcome<Player>) -> Self {
        self.player = outcome;
        self
    }

    pub fn with_leaderboard_intent(mut self, outcome: Outcome<UiIntent>) -> Self {
        self.leaderboard_intent = outcome;
        self
    }

    pub fn with_achievements_intent(mut self, outcome: Outcome<UiIntent>) -> Self {
        self.achievements_intent = outcome;
        self
    }

    pub fn with_score(mut self, outcome: Outcome<Option<i64>>) -> Self {
        self.score = outcome;
        self
    }

    pub fn with_server_access(mut self, outcome: Outcome<String>) -> Self {
        self.server_access = outcome;
        self
    }

    fn record(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }

    /// 기록된 호출 전체
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// 특정 기능의 호출 횟수
    pub fn count(&self, capability: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.starts_with(capability))
            .count()
    }
}

#[async_trait]
impl GameServicesClient for MockClient {
    async fn is_authenticated(&self) -> Outcome<bool> {
        self.record("is_authenticated".into());
        self.auth.clone()
    }

    async fn sign_in(&self) -> Outcome<bool> {
        self.record("sign_in".into());
        self.sign_in.clone()
    }

    async fn current_player(&self) -> Outcome<Player> {
        self.record("current_player".into());
        self.player.clone()
    }

    async fn leaderboard_intent(&self, leaderboard_id: &str) -> Outcome<UiIntent> {
        self.record(format!("leaderboard_intent:{leaderboard_id}"));
        self.leaderboard_intent.clone()
    }

    async fn achievements_intent(&self) -> Outcome<UiIntent> {
        self.record("achievements_intent".into());
        self.achievements_intent.clone()
    }

    async fn submit_score(&self, leaderboard_id: &str, total_score_amount: i64) {
        self.record(format!("submit_score:{leaderboard_id}:{total_score_amount}"));
    }

    async fn unlock_achievement(&self, achievement_id: &str) {
        self.record(format!("unlock_achievement:{achievement_id}"));
    }

    async fn increment_achievement(&self, achievement_id: &str, points_to_increment: i64) {
        self.record(format!(
            "increment_achievement:{achievement_id}:{points_to_increment}"
        ));
    }

    async fn player_leaderboard_score(&self, leaderboard_id: &str) -> Outcome<Option<i64>> {
        self.record(format!("player_leaderboard_score:{leaderboard_id}"));
        self.score.clone()
    }

    async fn request_server_side_access(
        &self,
        server_client_id: &str,
        force_refresh: bool,
    ) -> Outcome<String> {
        self.record(format!(
            "request_server_side_access:{server_client_id}:{force_refresh}"
        ));
        self.server_access.clone()
    }
}

/// 전달받은 인텐트를 기록하는 모의 런처
pub struct RecordingLauncher {
    launched: Mutex<Vec<UiIntent>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn launched(&self) -> Vec<UiIntent> {
        self.launched.lock().unwrap().clone()
    }
}

impl IntentLauncher for RecordingLauncher {
    fn launch(&self, intent: UiIntent) {
        self.launched.lock().unwrap().push(intent);
    }
}

/// 모의 클라이언트로 어댑터 구성
pub fn adapter_with(client: MockClient) -> (GameConnect, Arc<MockClient>, Arc<RecordingLauncher>) {
    shared::logging::init(&shared::config::GameConnectConfig::default());

    let client = Arc::new(client);
    let launcher = Arc::new(RecordingLauncher::new());
    let adapter = GameConnect::new(client.clone(), launcher.clone());
    (adapter, client, launcher)
}

/// json! 객체를 Invocation 파라미터 맵으로 변환
pub fn params(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => panic!("파라미터는 JSON 객체여야 함"),
    }
}
