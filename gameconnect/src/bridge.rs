//! 브리지 런타임이 호출하는 메서드 이름 디스패치 표면

use tracing::warn;

use crate::adapter::GameConnect;
use crate::invocation::{CallResult, Invocation};

impl GameConnect {
    /// 요청 한 건을 메서드 이름으로 디스패치
    ///
    /// 요청당 정확히 하나의 `CallResult`를 반환합니다.
    pub async fn handle(&self, call: Invocation) -> CallResult {
        match call.method() {
            "signIn" => self.sign_in().await,
            "fetchUserInformation" => self.fetch_user_information().await,
            "showLeaderboardView" => self.show_leaderboard_view(&call).await,
            "submitScore" => self.submit_score(&call).await,
            "showAchievementsView" => self.show_achievements_view().await,
            "unlockAchievement" => self.unlock_achievement(&call).await,
            "incrementAchievementProgress" => self.increment_achievement_progress(&call).await,
            "getUserTotalScore" => self.get_user_total_score(&call).await,
            "getGooglePlayCredential" => self.get_google_play_credential(&call).await,
            other => {
                warn!("unknown method requested: {other}");
                CallResult::Rejected(format!("unknown method: {other}"))
            }
        }
    }
}
