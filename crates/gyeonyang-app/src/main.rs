//! GYEONYANG 실행 바이너리.
//!
//! 설정 로드 → 어댑터 배선 → 추적 루프 실행 → Ctrl-C 정리 종료.
//! 루프 자체는 동기이며, tokio는 신호/타이머 처리에만 쓴다.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gyeonyang_automation::pointer::create_platform_pointer_driver;
use gyeonyang_core::config::{AppConfig, TrackingConfig};
use gyeonyang_core::config_manager::ConfigManager;
use gyeonyang_core::models::frame::Region;
use gyeonyang_core::ports::detector::ObjectDetector;
use gyeonyang_core::ports::frame_source::FrameSource;
use gyeonyang_core::ports::stop::FlagStopSignal;
use gyeonyang_engine::runner::TrackingEngine;
use gyeonyang_engine::telemetry::LogTelemetrySink;
use gyeonyang_vision::capture::XcapFrameSource;
use gyeonyang_vision::stub::{BlankFrameSource, NullDetector, ScriptedDetector};

/// 데모 모드의 가상 캡처 영역
const DEMO_REGION: Region = Region {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

/// 데모 모드 기본 실행 시간 (초)
const DEMO_DURATION_SECS: u64 = 3;

#[derive(Debug, Parser)]
#[command(name = "gyeonyang", about = "화면 타겟 추적 에이전트", version)]
struct Cli {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 포인터 조작 없이 로깅만 (NoOp 드라이버 강제)
    #[arg(long)]
    dry_run: bool,

    /// 캡처 장치 없이 스크립트 감지기로 전체 루프 재생
    #[arg(long)]
    demo: bool,

    /// 캡처할 모니터 인덱스 (설정값 오버라이드)
    #[arg(long)]
    monitor: Option<usize>,

    /// 지정 시간(초) 후 자동 종료
    #[arg(long)]
    duration_secs: Option<u64>,

    /// 상세 로그 (debug 레벨)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    info!("설정 파일: {}", manager.config_path().display());

    let mut config = manager.get();
    apply_cli_overrides(&mut config, &cli);

    // 종료 신호: Ctrl-C 또는 --duration-secs
    let stop = FlagStopSignal::new();
    let duration_secs = cli
        .duration_secs
        .or(cli.demo.then_some(DEMO_DURATION_SECS));
    spawn_stop_tasks(stop.clone(), duration_secs);

    // 어댑터 배선
    let frames: Box<dyn FrameSource> = if cli.demo {
        Box::new(BlankFrameSource::new(DEMO_REGION))
    } else {
        Box::new(
            XcapFrameSource::new(config.capture.monitor_index, config.capture.region)
                .context("캡처 리소스 획득 실패")?,
        )
    };

    let (detector, tracking) = build_detector(&config, cli.demo);
    let pointer = create_platform_pointer_driver(config.input.dry_run);
    let telemetry = Box::new(LogTelemetrySink);

    let mut engine = TrackingEngine::new(
        tracking,
        frames,
        detector,
        pointer,
        Arc::new(stop),
        telemetry,
    )
    .context("추적 엔진 생성 실패")?;

    info!("GYEONYANG 시작 (종료: Ctrl-C)");
    tokio::task::spawn_blocking(move || engine.run())
        .await
        .context("추적 루프 태스크 join 실패")??;

    info!("정상 종료");
    Ok(())
}

/// 로깅 초기화 — RUST_LOG가 있으면 그 값, 없으면 verbose 여부로 레벨 결정
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// CLI 플래그를 설정에 반영
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(idx) = cli.monitor {
        config.capture.monitor_index = idx;
    }
    // dry-run은 켜는 방향으로만 오버라이드한다
    if cli.dry_run || cli.demo {
        config.input.dry_run = true;
    }
}

/// 감지기와 추적 설정 배선
///
/// 데모 모드는 기준점으로 접근하는 타겟 시퀀스를 재생한다. 일반 모드의
/// 기본값은 `NullDetector`다 — 실제 감지 엔진은 `ObjectDetector` 포트를
/// 구현해 연결한다.
fn build_detector(config: &AppConfig, demo: bool) -> (Box<dyn ObjectDetector>, TrackingConfig) {
    let mut tracking = config.tracking.clone();

    if demo {
        if tracking.allowed_labels.is_empty() {
            tracking.allowed_labels = vec![2];
        }
        let label = tracking.allowed_labels[0] as f32;
        let (rx, ry) = (tracking.reference_x as f32, tracking.reference_y as f32);

        // 기준점을 향해 접근하는 타겟 + 매 프레임 섞이는 무관 클래스
        let approach = [400.0_f32, 200.0, 80.0, 30.0, 8.0, 3.0];
        let batches = approach
            .iter()
            .map(|offset| {
                vec![
                    vec![rx + offset, ry, 24.0, 48.0, 0.9, label],
                    vec![120.0, 90.0, 24.0, 48.0, 0.4, label + 5.0],
                ]
            })
            .collect();

        return (Box::new(ScriptedDetector::new(batches)), tracking);
    }

    if tracking.allowed_labels.is_empty() {
        warn!("허용 레이블이 비어 있음 — 아무 타겟도 선택되지 않는다");
    }
    (Box::new(NullDetector), tracking)
}

/// 종료 신호 태스크 배선 (Ctrl-C, 선택적 타이머)
fn spawn_stop_tasks(stop: FlagStopSignal, duration_secs: Option<u64>) {
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl-C 수신");
                stop.request_stop();
            }
        });
    }

    if let Some(secs) = duration_secs {
        let stop = stop.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            info!("지정 시간 {secs}초 경과");
            stop.request_stop();
        });
    }
}
