//! 스크린 캡처 어댑터.
//!
//! `FrameSource` 포트 구현. xcap 기반 모니터 캡처 + 고정 영역 크롭.

use chrono::Utc;
use image::DynamicImage;
use tracing::debug;
use xcap::Monitor;

use gyeonyang_core::error::CoreError;
use gyeonyang_core::models::frame::{Frame, Region};
use gyeonyang_core::ports::frame_source::FrameSource;

/// RGBA 채널 수
const RGBA_CHANNELS: u8 = 4;

/// xcap 기반 프레임 소스 — `FrameSource` 포트 구현
///
/// 모니터는 생성 시 한 번 선택되고 캡처 영역은 루프 시작 전에 고정된다.
/// 생성 실패(모니터 없음)는 영구 실패, 개별 grab 실패는 일시 실패로 매핑한다.
/// 캡처 리소스는 이 구조체의 수명에 묶인다.
pub struct XcapFrameSource {
    monitor: Monitor,
    region: Region,
}

impl XcapFrameSource {
    /// 모니터 인덱스와 선택적 캡처 영역으로 프레임 소스 생성
    ///
    /// `region`이 None이면 모니터 전체를 캡처한다. 영역이 모니터 범위를
    /// 벗어나면 설정 에러다.
    pub fn new(monitor_index: usize, region: Option<Region>) -> Result<Self, CoreError> {
        let monitors = Monitor::all()
            .map_err(|e| CoreError::CaptureFatal(format!("모니터 목록 조회 실패: {e}")))?;

        let monitor = monitors.into_iter().nth(monitor_index).ok_or_else(|| {
            CoreError::CaptureFatal(format!("모니터 인덱스 {monitor_index} 없음"))
        })?;

        let full = Region {
            x: 0,
            y: 0,
            width: monitor
                .width()
                .map_err(|e| CoreError::CaptureFatal(format!("모니터 너비 조회 실패: {e}")))?,
            height: monitor
                .height()
                .map_err(|e| CoreError::CaptureFatal(format!("모니터 높이 조회 실패: {e}")))?,
        };

        let region = match region {
            Some(requested) => validate_region(requested, full)?,
            None => full,
        };

        debug!(monitor_index, ?region, "캡처 리소스 획득");

        Ok(Self { monitor, region })
    }

    /// 사용 가능한 모니터 수
    pub fn monitor_count() -> Result<usize, CoreError> {
        Monitor::all()
            .map(|m| m.len())
            .map_err(|e| CoreError::CaptureFatal(format!("모니터 목록 조회 실패: {e}")))
    }
}

impl FrameSource for XcapFrameSource {
    fn grab(&mut self) -> Result<Frame, CoreError> {
        let image = self
            .monitor
            .capture_image()
            .map_err(|e| CoreError::CaptureUnavailable(format!("스크린 캡처 실패: {e}")))?;

        let full = DynamicImage::ImageRgba8(image);
        let cropped = full.crop_imm(
            self.region.x,
            self.region.y,
            self.region.width,
            self.region.height,
        );
        let rgba = cropped.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Frame {
            width,
            height,
            channels: RGBA_CHANNELS,
            data: rgba.into_raw(),
            captured_at: Utc::now(),
        })
    }

    fn region(&self) -> Region {
        self.region
    }
}

/// 요청 영역이 모니터 범위 안에 있는지 검증
fn validate_region(requested: Region, full: Region) -> Result<Region, CoreError> {
    let fits_width = requested
        .x
        .checked_add(requested.width)
        .is_some_and(|right| right <= full.width);
    let fits_height = requested
        .y
        .checked_add(requested.height)
        .is_some_and(|bottom| bottom <= full.height);

    if requested.width == 0 || requested.height == 0 || !fits_width || !fits_height {
        return Err(CoreError::Config(format!(
            "캡처 영역이 모니터 범위를 벗어남: {requested:?} (모니터 {}x{})",
            full.width, full.height
        )));
    }

    Ok(requested)
}
