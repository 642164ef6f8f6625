//! 호스트 UI 인텐트 연동
//!
//! 어댑터는 인텐트 내용을 해석하지 않고 호스트 런처에 그대로 넘깁니다.

use std::collections::HashMap;

/// 표시할 화면을 가리키는 불투명 디스플레이 인텐트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiIntent {
    /// 대상 화면 식별자 (예: "leaderboard", "achievements")
    pub target: String,
    /// 플랫폼별 추가 데이터
    pub extras: HashMap<String, String>,
}

impl UiIntent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extras: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// 호스트 액티비티 런처 seam
///
/// 임베딩 환경이 구현을 제공합니다. 어댑터 관점에서는 실패하지 않습니다.
pub trait IntentLauncher: Send + Sync {
    fn launch(&self, intent: UiIntent);
}
