//! 도메인 데이터 모델.

pub mod frame;
pub mod geometry;
pub mod target;
