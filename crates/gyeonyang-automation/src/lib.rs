//! # gyeonyang-automation
//!
//! 포인터 조작 크레이트.
//! `PointerDriver` 포트의 실제 구현(enigo feature)과 dry-run용 NoOp 구현,
//! 플랫폼별 드라이버 팩토리를 제공한다.

pub mod pointer;
