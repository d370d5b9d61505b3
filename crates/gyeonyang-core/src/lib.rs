//! # gyeonyang-core
//!
//! GYEONYANG 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (좌표, 타겟, 프레임)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::target::Target;

    #[test]
    fn target_serde_roundtrip() {
        let target = Target::from_raw(&[955.0, 540.0, 24.0, 48.0, 0.92, 2.0]).unwrap();

        let json = serde_json::to_string(&target).unwrap();
        let deserialized: Target = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.label, 2);
        assert_eq!(deserialized.x, 955.0);
        assert!(deserialized.confidence > 0.9);
        assert_eq!(deserialized.raw.len(), 6);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.capture.monitor_index, 0);
        assert!(config.capture.region.is_none());
        assert_eq!(config.tracking.reference_x, 960.0);
        assert_eq!(config.tracking.reference_y, 540.0);
        assert!(config.tracking.allowed_labels.is_empty());
        assert_eq!(config.tracking.precision, 10.0);
        assert_eq!(config.tracking.dwell_ms, 100);
        assert_eq!(config.tracking.report_interval_ms, 1_000);
        assert_eq!(config.tracking.debounce_frames, 0);
        assert!(config.input.dry_run);
    }
}
