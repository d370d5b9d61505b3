//! 종료 신호 포트.
//!
//! 루프는 반복당 한 번 이 포트를 폴링한다. 반복 중간 취소는 없다 —
//! 시작된 반복은 항상 끝까지 실행된다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 종료 신호 — 협조적 취소 인터페이스
pub trait StopSignal: Send + Sync {
    /// 종료가 요청되었는지
    fn should_stop(&self) -> bool;
}

/// 공유 플래그 기반 종료 신호
///
/// Ctrl-C 핸들러나 타이머 태스크가 `request_stop`을 호출하면
/// 루프가 다음 반복 시작 시점에 정리 종료한다.
#[derive(Debug, Clone, Default)]
pub struct FlagStopSignal {
    flag: Arc<AtomicBool>,
}

impl FlagStopSignal {
    /// 새 종료 신호 생성 (초기값: 미요청)
    pub fn new() -> Self {
        Self::default()
    }

    /// 종료 요청
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl StopSignal for FlagStopSignal {
    fn should_stop(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
