//! 타겟 모델.
//!
//! 감지 엔진이 내보낸 원시 레코드 하나를 구조화된 타겟으로 변환한다.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::geometry::Point;

/// 감지 엔진의 원시 감지 레코드
///
/// `[x_center, y_center, width, height, confidence, label]` 순서의 숫자 배열.
/// 여섯 번째 이후 필드는 엔진별 부가 정보로 취급하고 해석하지 않는다.
pub type RawDetection = Vec<f32>;

/// 원시 레코드가 가져야 하는 최소 필드 수
pub const RAW_DETECTION_FIELDS: usize = 6;

/// 한 프레임에서 감지된 타겟 하나
///
/// 원시 감지 레코드 1건에 대한 불변 뷰. 프레임마다 새로 만들어지고 프레임
/// 종료와 함께 버려진다 (프레임 간 identity/추적 없음).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// 중심 x 좌표 (픽셀)
    pub x: f64,
    /// 중심 y 좌표 (픽셀)
    pub y: f64,
    /// 바운딩 박스 너비
    pub w: f64,
    /// 바운딩 박스 높이
    pub h: f64,
    /// 감지 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
    /// 클래스 레이블
    pub label: i64,
    /// 원본 레코드 (추적성 확보용, 판정 로직에서는 사용하지 않음)
    pub raw: RawDetection,
}

impl Target {
    /// 원시 감지 레코드에서 타겟 생성
    ///
    /// 필드가 여섯 개 미만이거나 필수 필드 중 유한 숫자가 아닌 값이 있으면
    /// `InvalidDetection`을 반환한다. 레이블은 정수로 절사한다.
    pub fn from_raw(raw: &[f32]) -> Result<Self, CoreError> {
        if raw.len() < RAW_DETECTION_FIELDS {
            return Err(CoreError::InvalidDetection(format!(
                "필드 {}개, 최소 {}개 필요",
                raw.len(),
                RAW_DETECTION_FIELDS
            )));
        }

        for (idx, value) in raw.iter().take(RAW_DETECTION_FIELDS).enumerate() {
            if !value.is_finite() {
                return Err(CoreError::InvalidDetection(format!(
                    "필드 {idx} 값이 유한하지 않음: {value}"
                )));
            }
        }

        Ok(Self {
            x: f64::from(raw[0]),
            y: f64::from(raw[1]),
            w: f64::from(raw[2]),
            h: f64::from(raw[3]),
            confidence: f64::from(raw[4]),
            label: raw[5] as i64,
            raw: raw.to_vec(),
        })
    }

    /// 타겟 중심 좌표
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
