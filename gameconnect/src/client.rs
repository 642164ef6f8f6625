//! 외부 게임 서비스 SDK seam
//!
//! 모든 서비스는 trait으로 정의합니다:
//! - 의존성 주입
//! - 모의 구현으로 손쉬운 테스트
//! - 컴포넌트 간 느슨한 결합

use async_trait::async_trait;

use shared::types::Player;

use crate::intent::UiIntent;
use crate::outcome::Outcome;

/// 게임 서비스 SDK 클라이언트 trait
///
/// 네트워크 호출, 토큰 저장, UI 플로우는 전부 구현체 소유입니다.
/// 반환값이 없는 세 개의 변경 호출은 fire-and-forget이며,
/// 시그니처 자체가 "보고할 결과가 존재하지 않음"을 드러냅니다.
#[async_trait]
pub trait GameServicesClient: Send + Sync {
    /// 현재 세션 인증 여부 조회
    ///
    /// 세션은 호출 사이에 바뀔 수 있으므로 게이트 연산마다 새로 조회합니다.
    async fn is_authenticated(&self) -> Outcome<bool>;

    /// 로그인 UI 플로우 실행
    ///
    /// `Success(false)`는 사용자가 거절/취소한 정상 결과이고,
    /// `Failure`는 전송/SDK 오류입니다.
    async fn sign_in(&self) -> Outcome<bool>;

    /// 로그인된 플레이어 조회
    async fn current_player(&self) -> Outcome<Player>;

    /// 리더보드 화면 인텐트 조회
    async fn leaderboard_intent(&self, leaderboard_id: &str) -> Outcome<UiIntent>;

    /// 업적 화면 인텐트 조회
    async fn achievements_intent(&self) -> Outcome<UiIntent>;

    /// 점수 제출 (fire-and-forget)
    async fn submit_score(&self, leaderboard_id: &str, total_score_amount: i64);

    /// 업적 해제 (fire-and-forget)
    async fn unlock_achievement(&self, achievement_id: &str);

    /// 업적 진행도 증가 (fire-and-forget)
    async fn increment_achievement(&self, achievement_id: &str, points_to_increment: i64);

    /// 현재 플레이어의 리더보드 총점 조회
    ///
    /// `None`은 점수 행이 없는 경우이며 실패가 아닙니다.
    async fn player_leaderboard_score(&self, leaderboard_id: &str) -> Outcome<Option<i64>>;

    /// 연합 인증용 서버 측 액세스 코드 교환
    async fn request_server_side_access(
        &self,
        server_client_id: &str,
        force_refresh: bool,
    ) -> Outcome<String>;
}
