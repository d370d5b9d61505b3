//! 설정 및 DI 와이어링 통합 테스트.
//!
//! AppConfig → 어댑터/엔진 생성 검증.

use std::sync::Arc;

use gyeonyang_automation::pointer::{create_platform_pointer_driver, NoOpPointerDriver};
use gyeonyang_core::config::AppConfig;
use gyeonyang_core::models::frame::Region;
use gyeonyang_core::ports::stop::FlagStopSignal;
use gyeonyang_engine::runner::TrackingEngine;
use gyeonyang_engine::telemetry::LogTelemetrySink;
use gyeonyang_vision::stub::{BlankFrameSource, NullDetector, ScriptedDetector};

#[test]
fn config_defaults_are_valid() {
    let config = AppConfig::default_config();

    // 캡처 설정
    assert_eq!(config.capture.monitor_index, 0);
    assert!(config.capture.region.is_none());

    // 추적 설정
    assert!(config.tracking.validate().is_ok());
    assert!(config.tracking.precision > 0.0);
    assert!(config.tracking.report_interval_ms > 0);
    assert!(config.tracking.allowed_labels.is_empty());

    // 입력 설정 — 기본값은 dry-run
    assert!(config.input.dry_run);
}

#[test]
fn config_duration_conversions() {
    let config = AppConfig::default_config();

    let dwell = config.tracking.dwell();
    assert_eq!(dwell.as_millis(), config.tracking.dwell_ms as u128);

    let interval = config.tracking.report_interval();
    assert_eq!(
        interval.as_millis(),
        config.tracking.report_interval_ms as u128
    );
}

#[test]
fn engine_wires_from_default_config() {
    let config = AppConfig::default_config();

    let frames = BlankFrameSource::new(Region {
        x: 0,
        y: 0,
        width: 64,
        height: 64,
    });
    let stop = FlagStopSignal::new();

    let engine = TrackingEngine::new(
        config.tracking.clone(),
        Box::new(frames),
        Box::new(NullDetector),
        Box::new(NoOpPointerDriver),
        Arc::new(stop),
        Box::new(LogTelemetrySink),
    );

    assert!(engine.is_ok());
}

#[test]
fn factory_respects_dry_run() {
    let driver = create_platform_pointer_driver(true);
    assert_eq!(driver.platform(), "noop");
}

#[test]
fn scripted_detector_instantiates() {
    let detector = ScriptedDetector::new(vec![vec![vec![10.0, 10.0, 2.0, 2.0, 0.9, 2.0]]]);
    assert_eq!(detector.remaining(), 1);
}

#[test]
fn config_serde_roundtrip() {
    let config = AppConfig::default_config();

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: AppConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(
        deserialized.tracking.precision,
        config.tracking.precision
    );
    assert_eq!(deserialized.input.dry_run, config.input.dry_run);
}
