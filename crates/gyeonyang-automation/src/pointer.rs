//! 포인터 드라이버 구현.
//!
//! `NoOpPointerDriver` (dry-run/테스트용)와 `EnigoPointerDriver` (실제 입력,
//! `enigo` feature)를 제공한다.

use tracing::debug;

use gyeonyang_core::error::CoreError;
use gyeonyang_core::ports::pointer::PointerDriver;

// ============================================================
// NoOpPointerDriver — dry-run/테스트용
// ============================================================

/// No-Op 포인터 드라이버 — 모든 명령을 로깅만 하고 실행하지 않음
///
/// dry-run 모드, 테스트, 로깅 전용 모드에서 사용.
pub struct NoOpPointerDriver;

impl PointerDriver for NoOpPointerDriver {
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), CoreError> {
        debug!(x, y, "[NoOp] 포인터 이동");
        Ok(())
    }

    fn press(&mut self) -> Result<(), CoreError> {
        debug!("[NoOp] 버튼 누름");
        Ok(())
    }

    fn release(&mut self) -> Result<(), CoreError> {
        debug!("[NoOp] 버튼 놓음");
        Ok(())
    }

    fn platform(&self) -> &str {
        "noop"
    }
}

// ============================================================
// EnigoPointerDriver — 실제 마우스 입력
// ============================================================

/// 실제 마우스 입력 드라이버 (enigo 기반)
///
/// macOS: Accessibility 권한 필요
/// Windows: UIAccess 또는 관리자 권한 필요
/// Linux: X11 또는 Wayland + uinput 권한 필요
#[cfg(feature = "enigo")]
pub struct EnigoPointerDriver {
    /// enigo 인스턴스 (포트가 &mut self라 잠금 불필요)
    enigo: enigo::Enigo,
}

#[cfg(feature = "enigo")]
impl EnigoPointerDriver {
    /// 새 EnigoPointerDriver 생성
    pub fn new() -> Result<Self, CoreError> {
        let settings = enigo::Settings::default();
        let enigo = enigo::Enigo::new(&settings)
            .map_err(|e| CoreError::Input(format!("입력 드라이버 초기화 실패: {e}")))?;
        Ok(Self { enigo })
    }
}

#[cfg(feature = "enigo")]
impl PointerDriver for EnigoPointerDriver {
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!(x, y, "[Enigo] 포인터 이동");
        self.enigo
            .move_mouse(x.round() as i32, y.round() as i32, enigo::Coordinate::Abs)
            .map_err(|e| CoreError::Input(format!("포인터 이동 실패: {e}")))?;
        Ok(())
    }

    fn press(&mut self) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!("[Enigo] 버튼 누름");
        self.enigo
            .button(enigo::Button::Left, enigo::Direction::Press)
            .map_err(|e| CoreError::Input(format!("버튼 누름 실패: {e}")))?;
        Ok(())
    }

    fn release(&mut self) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!("[Enigo] 버튼 놓음");
        self.enigo
            .button(enigo::Button::Left, enigo::Direction::Release)
            .map_err(|e| CoreError::Input(format!("버튼 놓음 실패: {e}")))?;
        Ok(())
    }

    fn platform(&self) -> &str {
        #[cfg(target_os = "macos")]
        {
            "macos"
        }
        #[cfg(target_os = "windows")]
        {
            "windows"
        }
        #[cfg(target_os = "linux")]
        {
            "linux"
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            "unknown"
        }
    }
}

// ============================================================
// 드라이버 팩토리
// ============================================================

/// 플랫폼별 포인터 드라이버 생성 팩토리
///
/// `dry_run`이면 무조건 NoOp. 아니면 `enigo` feature 활성화 시 실제
/// 드라이버를 시도하고, 초기화 실패 시 NoOp으로 폴백한다.
pub fn create_platform_pointer_driver(dry_run: bool) -> Box<dyn PointerDriver> {
    if dry_run {
        tracing::info!("dry-run 모드, NoOp 포인터 드라이버 사용");
        return Box::new(NoOpPointerDriver);
    }

    #[cfg(feature = "enigo")]
    {
        match EnigoPointerDriver::new() {
            Ok(driver) => {
                tracing::info!("실제 포인터 드라이버 (enigo) 초기화 완료");
                return Box::new(driver);
            }
            Err(e) => {
                tracing::warn!("enigo 초기화 실패, NoOp 폴백: {e}");
            }
        }
    }

    #[cfg(not(feature = "enigo"))]
    tracing::warn!("enigo feature 비활성, NoOp 포인터 드라이버 사용");

    Box::new(NoOpPointerDriver)
}

// ============================================================
// 테스트
// ============================================================
