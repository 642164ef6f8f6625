//! GameConnect 에러 타입 정의
//!
//! 어댑터에서 발생하는 모든 에러를 체계적으로 관리합니다.
//! 각 에러의 Display 문자열이 그대로 호출자에게 reject 메시지로 전달됩니다.

use thiserror::Error;

/// 어댑터 공통 에러 타입
///
/// 네 가지 분류: 입력값 검증, 인증 게이트, 외부 호출 실패, 사용자 취소.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameConnectError {
    // 입력값 검증 에러 (외부 호출 전에 감지)
    #[error("{0}")]
    MissingParameter(String),

    // 인증 게이트 에러
    #[error("User is not authenticated with Google Play Games")]
    NotAuthenticated,

    // 로그인 UI를 사용자가 거절/취소한 경우 (전송 오류와 구분되는 정상 결과)
    #[error("sign-in failed or cancelled")]
    SignInDeclined,

    // 외부 SDK 호출이 취소 신호로 완료된 경우
    #[error("operation was cancelled")]
    Cancelled,

    // 외부 SDK 호출 실패 (메시지를 그대로 전달)
    #[error("{0}")]
    External(String),
}

impl GameConnectError {
    /// 필수 파라미터 누락 에러 생성
    pub fn missing(param: &str) -> Self {
        GameConnectError::MissingParameter(format!("{param} is required"))
    }
}

// 편의를 위한 타입 별칭
pub type GameResult<T> = Result<T, GameConnectError>;
