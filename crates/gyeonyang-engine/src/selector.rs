//! 타겟 선택.
//!
//! 레이블 필터링과 기준점 거리 정렬을 분리해 두어, 다른 선택 전략
//! (예: 신뢰도 우선)으로 교체할 때 필터 로직을 건드리지 않는다.

use std::collections::HashSet;

use tracing::debug;

use gyeonyang_core::models::geometry::Point;
use gyeonyang_core::models::target::{RawDetection, Target};

/// 허용 레이블에 해당하는 감지만 타겟으로 변환
///
/// 허용 목록 밖 레이블은 조용히 버린다 — 대부분의 프레임에는 무관한
/// 클래스가 섞여 있으므로 에러가 아니다. 잘못된 레코드는 해당 레코드만
/// 버리고 같은 배치의 나머지는 계속 처리한다. 입력 순서는 유지된다.
pub fn filter_by_label(batch: &[RawDetection], allowed: &HashSet<i64>) -> Vec<Target> {
    batch
        .iter()
        .filter_map(|raw| match Target::from_raw(raw) {
            Ok(target) if allowed.contains(&target.label) => Some(target),
            Ok(_) => None,
            Err(e) => {
                debug!("감지 레코드 버림: {e}");
                None
            }
        })
        .collect()
}

/// 기준점과의 거리 오름차순 정렬
///
/// 안정 정렬: 같은 거리는 입력 순서를 유지한다 (판정 결정성 보장).
/// 빈 입력은 빈 출력이다.
pub fn rank_by_distance(mut targets: Vec<Target>, reference: Point) -> Vec<Target> {
    targets.sort_by(|a, b| {
        reference
            .distance_to(a.position())
            .total_cmp(&reference.distance_to(b.position()))
    });
    targets
}
