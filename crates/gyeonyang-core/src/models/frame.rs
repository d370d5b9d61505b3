//! 프레임과 캡처 영역 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 캡처 대상 화면 영역 (모니터 내 픽셀 오프셋 + 크기)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// 좌상단 x 오프셋
    pub x: u32,
    /// 좌상단 y 오프셋
    pub y: u32,
    /// 너비 (픽셀)
    pub width: u32,
    /// 높이 (픽셀)
    pub height: u32,
}

/// 캡처된 프레임 한 장
///
/// 행 우선 `height × width × channels` 8비트 인터리브 버퍼.
/// 한 반복 안에서만 살아 있고 반복 종료와 함께 버려진다.
#[derive(Debug, Clone)]
pub struct Frame {
    /// 너비 (픽셀)
    pub width: u32,
    /// 높이 (픽셀)
    pub height: u32,
    /// 픽셀당 채널 수 (RGBA = 4)
    pub channels: u8,
    /// 픽셀 버퍼
    pub data: Vec<u8>,
    /// 캡처 시각
    pub captured_at: DateTime<Utc>,
}

impl Frame {
    /// 해상도/채널 수와 버퍼 길이가 일치하는지
    pub fn is_well_formed(&self) -> bool {
        self.data.len()
            == self.width as usize * self.height as usize * usize::from(self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_frame() {
        let frame = Frame {
            width: 4,
            height: 2,
            channels: 4,
            data: vec![0; 32],
            captured_at: Utc::now(),
        };
        assert!(frame.is_well_formed());
    }

    #[test]
    fn truncated_buffer_is_malformed() {
        let frame = Frame {
            width: 4,
            height: 2,
            channels: 4,
            data: vec![0; 31],
            captured_at: Utc::now(),
        };
        assert!(!frame.is_well_formed());
    }
}
