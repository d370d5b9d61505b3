//! 처리율 측정과 텔레메트리 싱크 구현.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::info;

use gyeonyang_core::ports::telemetry::TelemetrySink;

/// 처리율 측정기 — 보고 주기마다 `frames / elapsed_seconds` 계산
///
/// 루프가 반복마다 `tick`을 호출한다. 구간 경과 시간이 보고 주기 이상이면
/// FPS를 반환하고 카운터와 구간 시작점을 즉시 초기화한다.
#[derive(Debug)]
pub struct ThroughputMeter {
    /// 보고 주기
    interval: Duration,
    /// 현재 구간에 누적된 프레임 수
    frames: u64,
    /// 현재 구간 시작 시각
    window_start: Instant,
}

impl ThroughputMeter {
    /// 새 측정기 생성 (구간 시작 = 지금)
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// 구간 시작점을 지정해 생성 (테스트용)
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            frames: 0,
            window_start: start,
        }
    }

    /// 프레임 한 장 반영. 보고 주기가 찼으면 `Some(fps)` 반환.
    ///
    /// 경과 0인 구간은 보고하지 않는다 (0 나눗셈 방지).
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;

        let elapsed = now.duration_since(self.window_start);
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }

    /// 현재 구간에 누적된 프레임 수
    pub fn pending_frames(&self) -> u64 {
        self.frames
    }
}

// ============================================================
// 텔레메트리 싱크 구현
// ============================================================

/// 처리율을 tracing 로그로 내보내는 싱크
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTelemetrySink;

impl TelemetrySink for LogTelemetrySink {
    fn report_fps(&mut self, fps: f64) {
        info!("처리율: {fps:.1} fps");
    }
}

/// 보고된 값을 메모리에 모으는 싱크 (테스트/검사용)
///
/// Clone해 두면 엔진에 넘긴 뒤에도 수집된 값을 읽을 수 있다.
#[derive(Debug, Clone, Default)]
pub struct MemoryTelemetrySink {
    values: Arc<Mutex<Vec<f64>>>,
}

impl MemoryTelemetrySink {
    /// 새 메모리 싱크 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 보고된 값 복사본
    pub fn values(&self) -> Vec<f64> {
        self.values.lock().unwrap().clone()
    }
}

impl TelemetrySink for MemoryTelemetrySink {
    fn report_fps(&mut self, fps: f64) {
        self.values.lock().unwrap().push(fps);
    }
}
