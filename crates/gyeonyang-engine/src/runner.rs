//! 추적 제어 루프.
//!
//! 캡처 → 추론 → 선택 → 판정 → 조작 → 측정을 한 반복으로 묶어 종료 신호까지
//! 반복한다. 단일 스레드 동기 실행이며, 반복 간에 살아남는 상태는 처리율
//! 누적값뿐이다.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use gyeonyang_core::config::TrackingConfig;
use gyeonyang_core::error::CoreError;
use gyeonyang_core::models::geometry::Point;
use gyeonyang_core::models::target::RawDetection;
use gyeonyang_core::ports::detector::ObjectDetector;
use gyeonyang_core::ports::frame_source::FrameSource;
use gyeonyang_core::ports::pointer::PointerDriver;
use gyeonyang_core::ports::stop::StopSignal;
use gyeonyang_core::ports::telemetry::TelemetrySink;

use crate::policy::{self, EngagementDebounce};
use crate::selector;
use crate::telemetry::ThroughputMeter;

/// 추적 엔진 — 제어 루프 소유자
///
/// 포트 다섯 개와 고정 상수(설정)를 생성 시점에 주입받는다.
/// 캡처 리소스의 해제는 `FrameSource` 구현체의 Drop이 보장한다.
pub struct TrackingEngine {
    config: TrackingConfig,
    frames: Box<dyn FrameSource>,
    detector: Box<dyn ObjectDetector>,
    pointer: Box<dyn PointerDriver>,
    stop: Arc<dyn StopSignal>,
    telemetry: Box<dyn TelemetrySink>,
}

impl std::fmt::Debug for TrackingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TrackingEngine {
    /// 새 추적 엔진 생성
    ///
    /// 설정 불변식(기준점 유한, 정밀도 0 이상)을 검증한다.
    pub fn new(
        config: TrackingConfig,
        frames: Box<dyn FrameSource>,
        detector: Box<dyn ObjectDetector>,
        pointer: Box<dyn PointerDriver>,
        stop: Arc<dyn StopSignal>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            config,
            frames,
            detector,
            pointer,
            stop,
            telemetry,
        })
    }

    /// 추적 루프 실행 (블로킹)
    ///
    /// 종료 신호가 설정될 때까지 반복한다. 반복 단위 실패(캡처 일시 실패,
    /// 잘못된 배치)는 해당 반복의 판정/조작만 건너뛰고 루프는 계속된다.
    /// `CaptureFatal`만 루프를 끝내며, 그 경우 에러를 그대로 반환한다.
    pub fn run(&mut self) -> Result<(), CoreError> {
        let reference = self.config.reference();
        let allowed: HashSet<i64> = self.config.allowed_labels.iter().copied().collect();
        let dwell = self.config.dwell();
        let mut debounce = (self.config.debounce_frames > 0)
            .then(|| EngagementDebounce::new(self.config.debounce_frames));
        let mut meter = ThroughputMeter::new(self.config.report_interval());

        info!(
            detector = self.detector.name(),
            platform = self.pointer.platform(),
            region = ?self.frames.region(),
            "추적 루프 시작"
        );

        loop {
            // 종료 신호는 반복당 한 번만 폴링한다
            if self.stop.should_stop() {
                info!("종료 신호 수신, 루프 종료");
                break;
            }

            // 1. 프레임 획득
            let frame = match self.frames.grab() {
                Ok(frame) => Some(frame),
                Err(e) if e.is_fatal() => {
                    error!("캡처 리소스 소실, 루프 종료: {e}");
                    return Err(e);
                }
                Err(e) => {
                    warn!("프레임 획득 실패, 이번 반복 건너뜀: {e}");
                    None
                }
            };

            // 2~3. 추론 → 선택 → 판정 → 조작
            if let Some(frame) = frame {
                match self.detector.infer(&frame) {
                    Ok(batch) => {
                        self.engage(&batch, reference, &allowed, dwell, debounce.as_mut())
                    }
                    Err(e) => warn!("감지 배치 오류, 이번 반복 건너뜀: {e}"),
                }
            }

            // 4. 텔레메트리
            if let Some(fps) = meter.tick(Instant::now()) {
                self.telemetry.report_fps(fps);
            }
        }

        Ok(())
    }

    /// 한 배치에 대한 선택 → 판정 → 조작
    ///
    /// 타겟이 없으면 아무 명령도 내리지 않는다. 포인터 명령 실패는
    /// best-effort로 로깅만 한다.
    fn engage(
        &mut self,
        batch: &[RawDetection],
        reference: Point,
        allowed: &HashSet<i64>,
        dwell: Duration,
        debounce: Option<&mut EngagementDebounce>,
    ) {
        let targets = selector::filter_by_label(batch, allowed);
        if targets.is_empty() {
            if let Some(d) = debounce {
                d.reset();
            }
            return;
        }

        let ranked = selector::rank_by_distance(targets, reference);
        let target = &ranked[0];

        if let Err(e) = self.pointer.move_to(target.x, target.y) {
            warn!("포인터 이동 실패 (무시): {e}");
        }

        let engaged = policy::is_engaged(reference, target, self.config.precision);
        let fire = match debounce {
            Some(d) => d.observe(engaged),
            None => engaged,
        };

        if fire {
            debug!(x = target.x, y = target.y, label = target.label, "타겟 적중, 클릭");
            self.actuate(dwell);
        }
    }

    /// 누름 → 유지 → 놓음
    ///
    /// 누름이 실패해도 놓음은 시도한다 (버튼이 눌린 채 남지 않도록).
    fn actuate(&mut self, dwell: Duration) {
        if let Err(e) = self.pointer.press() {
            warn!("버튼 누름 실패 (무시): {e}");
        }
        thread::sleep(dwell);
        if let Err(e) = self.pointer.release() {
            warn!("버튼 놓음 실패 (무시): {e}");
        }
    }
}
