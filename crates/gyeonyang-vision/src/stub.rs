//! 테스트/데모용 스텁 구현.
//!
//! 실제 감지 엔진은 외부 협력자다 — `ObjectDetector` 포트를 구현해 연결한다.
//! 여기서는 배선 기본값(`NullDetector`), 배치 재생기(`ScriptedDetector`),
//! 그리고 캡처 장치 없이 루프를 돌리기 위한 `BlankFrameSource`를 제공한다.

use std::collections::VecDeque;

use chrono::Utc;
use tracing::debug;

use gyeonyang_core::error::CoreError;
use gyeonyang_core::models::frame::{Frame, Region};
use gyeonyang_core::models::target::RawDetection;
use gyeonyang_core::ports::detector::ObjectDetector;
use gyeonyang_core::ports::frame_source::FrameSource;

// ============================================================
// NullDetector — 배선 기본값
// ============================================================

/// Null 감지기 — 항상 빈 배치 반환
///
/// 실제 모델 어댑터가 연결되기 전의 기본값. 루프는 돌지만 아무 타겟도
/// 선택되지 않는다.
pub struct NullDetector;

impl ObjectDetector for NullDetector {
    fn infer(&mut self, _frame: &Frame) -> Result<Vec<RawDetection>, CoreError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================
// ScriptedDetector — 데모/테스트용
// ============================================================

/// 스크립트 감지기 — 준비된 배치 시퀀스 재생
///
/// 데모 모드와 테스트에서 사용. 시퀀스 소진 후에는 빈 배치를 반환한다.
pub struct ScriptedDetector {
    batches: VecDeque<Vec<RawDetection>>,
}

impl ScriptedDetector {
    /// 재생할 배치 시퀀스로 감지기 생성
    pub fn new(batches: Vec<Vec<RawDetection>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }

    /// 남은 배치 수
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl ObjectDetector for ScriptedDetector {
    fn infer(&mut self, _frame: &Frame) -> Result<Vec<RawDetection>, CoreError> {
        let batch = self.batches.pop_front().unwrap_or_default();
        debug!(records = batch.len(), remaining = self.batches.len(), "스크립트 배치 재생");
        Ok(batch)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ============================================================
// BlankFrameSource — 캡처 장치 없는 환경용
// ============================================================

/// 빈 프레임 소스 — 매번 0으로 채워진 RGBA 프레임 반환
///
/// 헤드리스 데모/테스트에서 실제 캡처 장치 대신 사용한다.
pub struct BlankFrameSource {
    region: Region,
}

impl BlankFrameSource {
    /// 지정 영역 크기의 빈 프레임 소스 생성
    pub fn new(region: Region) -> Self {
        Self { region }
    }
}

impl FrameSource for BlankFrameSource {
    fn grab(&mut self) -> Result<Frame, CoreError> {
        Ok(Frame {
            width: self.region.width,
            height: self.region.height,
            channels: 4,
            data: vec![0; self.region.width as usize * self.region.height as usize * 4],
            captured_at: Utc::now(),
        })
    }

    fn region(&self) -> Region {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        BlankFrameSource::new(Region {
            x: 0,
            y: 0,
            width: 8,
            height: 8,
        })
        .grab()
        .unwrap()
    }

    #[test]
    fn null_detector_always_empty() {
        let mut detector = NullDetector;
        assert!(detector.infer(&frame()).unwrap().is_empty());
        assert!(detector.infer(&frame()).unwrap().is_empty());
        assert_eq!(detector.name(), "null");
    }

    #[test]
    fn scripted_detector_replays_in_order() {
        let mut detector = ScriptedDetector::new(vec![
            vec![vec![1.0, 2.0, 3.0, 4.0, 0.5, 2.0]],
            vec![],
        ]);
        assert_eq!(detector.remaining(), 2);

        let first = detector.infer(&frame()).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0][5], 2.0);

        assert!(detector.infer(&frame()).unwrap().is_empty());
        assert_eq!(detector.remaining(), 0);
    }

    #[test]
    fn scripted_detector_empty_after_exhaustion() {
        let mut detector = ScriptedDetector::new(vec![vec![vec![
            1.0, 2.0, 3.0, 4.0, 0.5, 2.0,
        ]]]);
        detector.infer(&frame()).unwrap();
        assert!(detector.infer(&frame()).unwrap().is_empty());
    }

    #[test]
    fn blank_frame_source_produces_well_formed_frames() {
        let mut source = BlankFrameSource::new(Region {
            x: 0,
            y: 0,
            width: 16,
            height: 9,
        });
        let frame = source.grab().unwrap();
        assert_eq!(frame.width, 16);
        assert_eq!(frame.height, 9);
        assert!(frame.is_well_formed());
    }
}
