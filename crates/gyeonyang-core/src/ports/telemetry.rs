//! 텔레메트리 싱크 포트.
//!
//! 주기적 처리율(FPS) 값을 받는 단방향 인터페이스. 응답은 없다.

/// 텔레메트리 싱크 — 처리율 보고 인터페이스
///
/// 구현체: `LogTelemetrySink` (tracing 로그), `MemoryTelemetrySink` (테스트/검사용)
pub trait TelemetrySink: Send {
    /// 보고 주기 동안의 평균 처리율 보고 (frames / elapsed_seconds)
    fn report_fps(&mut self, fps: f64);
}
