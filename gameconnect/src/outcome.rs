//! 외부 SDK 완료 신호 통합
//!
//! 성공/실패/취소라는 서로 다른 완료 신호를 하나의 tagged union으로 묶고,
//! 호출자 계약으로의 변환을 한 곳에서만 수행합니다.

use shared::error::{GameConnectError, GameResult};

/// 외부 비동기 호출 한 건의 완료 신호
///
/// 값으로 소비되므로 같은 신호가 두 번 관찰될 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 호출 성공
    Success(T),
    /// 전송/SDK 오류 (메시지 포함)
    Failure(String),
    /// 취소 가능한 UI 플로우가 취소됨
    Cancelled,
}

impl<T> Outcome<T> {
    /// 완료 신호를 Result로 변환
    ///
    /// 취소는 실패로 분류됩니다. 조용히 버려지는 경우는 없습니다.
    pub fn into_result(self) -> GameResult<T> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(msg) => Err(GameConnectError::External(msg)),
            Outcome::Cancelled => Err(GameConnectError::Cancelled),
        }
    }
}
