//! 附加标签布局
//!
//! 电荷、氢原子数等小标签放在原子旁边：先选一个离已有键最远的方向，
//! 再用保持间隙的矩形旋转把标签矩形放到该方向上。

use crate::bond::DrawConfig;
use crate::math::{BoundingBox2, Point2, Vector2, EPSILON};
use crate::rect::rotate_rectangle_around_point;
use serde::{Deserialize, Serialize};

/// 待放置的标签（以文字包围盒的半宽、半高描述）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachedLabel {
    pub half_size: Vector2,
}

impl AttachedLabel {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            half_size: Vector2::new(width / 2.0, height / 2.0),
        }
    }
}

/// 候选方向的最小步长（度）
pub const MIN_ANGLE_STEP_DEG: f64 = 0.1;

/// 两个角度（度）之间的最小夹角，范围 `[0, 180]`
fn angular_distance(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// 以 `step_deg` 为步长的候选方向中，离所有键方向最远的一个（度）
///
/// 方向角与 [`crate::point::rotate_point_around_another`] 一致：0° 指向 +x。
/// 没有键时返回 0°；并列时取角度最小的候选。
/// 步长非正或小于 [`MIN_ANGLE_STEP_DEG`] 时按 [`MIN_ANGLE_STEP_DEG`] 计算。
pub fn find_free_label_angle(anchor: &Point2, bonded: &[Point2], step_deg: f64) -> f64 {
    let bond_angles: Vec<f64> = bonded
        .iter()
        .filter(|p| (*p - anchor).norm() > EPSILON)
        .map(|p| (p.y - anchor.y).atan2(p.x - anchor.x).to_degrees())
        .collect();
    if bond_angles.is_empty() {
        return 0.0;
    }

    let step_deg = if step_deg.is_finite() {
        step_deg.max(MIN_ANGLE_STEP_DEG)
    } else {
        MIN_ANGLE_STEP_DEG
    };
    let count = ((360.0 / step_deg).floor() as usize).max(1);
    let mut best = (0.0, f64::MIN);
    for k in 0..count {
        let candidate = k as f64 * step_deg;
        let clearance = bond_angles
            .iter()
            .map(|a| angular_distance(candidate, *a))
            .fold(f64::MAX, f64::min);
        if clearance > best.1 + EPSILON {
            best = (candidate, clearance);
        }
    }
    best.0
}

/// 把标签矩形放在 `anchor` 的 `angle_deg` 方向上，最近的边或角与 `anchor` 相距 `clearance`
pub fn place_attached_label(
    anchor: &Point2,
    half_size: &Vector2,
    angle_deg: f64,
    clearance: f64,
) -> BoundingBox2 {
    let start = anchor + Vector2::new(clearance + half_size.x, 0.0);
    let center = rotate_rectangle_around_point(
        &start, half_size, anchor, angle_deg, clearance, false, false,
    );
    BoundingBox2::from_center(center, *half_size)
}

/// 有标签时返回其放置位置，没有标签时返回 None
pub fn place_optional_label(
    anchor: &Point2,
    label: Option<&AttachedLabel>,
    bonded: &[Point2],
    cfg: &DrawConfig,
) -> Option<BoundingBox2> {
    let label = label?;
    let angle = find_free_label_angle(anchor, bonded, cfg.label_angle_step_deg);
    Some(place_attached_label(
        anchor,
        &label.half_size,
        angle,
        cfg.label_clearance,
    ))
}
