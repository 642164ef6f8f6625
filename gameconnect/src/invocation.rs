//! 브리지 호출 계약
//!
//! 호출자는 메서드 이름과 이름 있는 파라미터로 요청하고,
//! 정확히 하나의 resolve 또는 reject로 응답을 받습니다.

use serde_json::{Map, Value};

use shared::error::{GameConnectError, GameResult};

/// resolve 페이로드 (이름 있는 필드 → 스칼라/중첩 객체)
pub type Payload = Map<String, Value>;

/// 호출자가 보낸 요청 한 건
///
/// 생성 후 변경되지 않으며, 해당 호출 동안만 살아있습니다.
#[derive(Debug, Clone)]
pub struct Invocation {
    method: String,
    params: Payload,
}

impl Invocation {
    /// 메서드 이름과 파라미터로 요청 생성
    pub fn new(method: impl Into<String>, params: Payload) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// 파라미터 없는 요청 생성
    pub fn without_params(method: impl Into<String>) -> Self {
        Self::new(method, Payload::new())
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// 문자열 파라미터 조회
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    /// 정수 파라미터 조회
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.params.get(key).and_then(Value::as_i64)
    }

    /// 필수 문자열 파라미터 조회 (누락 시 검증 에러)
    pub fn require_string(&self, key: &str) -> GameResult<&str> {
        self.get_string(key)
            .ok_or_else(|| GameConnectError::missing(key))
    }

    /// 필수 정수 파라미터 조회 (누락 시 검증 에러)
    pub fn require_i64(&self, key: &str) -> GameResult<i64> {
        self.get_i64(key)
            .ok_or_else(|| GameConnectError::missing(key))
    }
}

/// 호출자 계약의 종단 상태
///
/// 호출당 정확히 한 번 값으로 반환되므로 이중 resolve가 표현 불가능합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// 성공 (빈 맵 == 페이로드 없음)
    Resolved(Payload),
    /// 실패 (사람이 읽을 수 있는 메시지)
    Rejected(String),
}

impl CallResult {
    /// 페이로드 없는 resolve
    pub fn resolved_empty() -> Self {
        CallResult::Resolved(Payload::new())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CallResult::Resolved(_))
    }
}

impl From<GameConnectError> for CallResult {
    fn from(err: GameConnectError) -> Self {
        CallResult::Rejected(err.to_string())
    }
}

// 연산 내부 결과 → 호출자 계약 (단일 변환 지점)
impl From<GameResult<Payload>> for CallResult {
    fn from(result: GameResult<Payload>) -> Self {
        match result {
            Ok(payload) => CallResult::Resolved(payload),
            Err(err) => CallResult::Rejected(err.to_string()),
        }
    }
}
