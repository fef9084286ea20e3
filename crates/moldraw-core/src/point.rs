//! 点图元
//!
//! 中点、绕点旋转、最近点选择、沿方向移动以及点与点之间的相对位置。

use crate::math::{to_radians, Point2, Vector2, EPSILON};
use crate::position::RelativePosition;
use crate::vector::{normalize, vector_from_line};
use nalgebra as na;

/// 线段中点
#[inline]
pub fn find_edge_midpoint(a: &Point2, b: &Point2) -> Point2 {
    na::center(a, b)
}

/// 将 `p` 绕 `pivot` 旋转 `angle`
///
/// `is_radian` 为假时 `angle` 按角度解释。正角度在 y 向下的屏幕坐标中表现为顺时针。
pub fn rotate_point_around_another(
    p: &Point2,
    pivot: &Point2,
    angle: f64,
    is_radian: bool,
) -> Point2 {
    let (sin, cos) = to_radians(angle, is_radian).sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point2::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

/// 候选点中离 `reference` 最近的一个；列表为空时返回 None
pub fn get_closest_point(reference: &Point2, candidates: &[Point2]) -> Option<Point2> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a - reference).norm_squared();
            let db = (b - reference).norm_squared();
            da.total_cmp(&db)
        })
}

/// 从 `from` 朝 `to` 移动 `distance`；两点重合时原地不动
pub fn move_point_towards_another(from: &Point2, to: &Point2, distance: f64) -> Point2 {
    from + normalize(&vector_from_line(from, to)) * distance
}

/// 沿两点方向逐步前进的游标
#[derive(Debug, Clone, Copy)]
pub struct Movement {
    current: Point2,
    direction: Vector2,
    travelled: f64,
}

impl Movement {
    /// 前进 `distance` 并返回新位置
    pub fn forward(&mut self, distance: f64) -> Point2 {
        self.current += self.direction * distance;
        self.travelled += distance;
        self.current
    }

    pub fn current(&self) -> Point2 {
        self.current
    }

    /// 已前进的总距离
    pub fn travelled(&self) -> f64 {
        self.travelled
    }
}

/// 创建从 `a` 出发朝 `b` 前进的游标
pub fn create_movement_between_two_points(a: &Point2, b: &Point2) -> Movement {
    Movement {
        current: *a,
        direction: normalize(&vector_from_line(a, b)),
        travelled: 0.0,
    }
}

/// 两点坐标在 `epsilon` 内相等
#[inline]
pub fn coords_almost_equal(a: &Point2, b: &Point2, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

/// `point` 相对于 `reference` 的位置（y 向下：y 更小为 above）
pub fn get_relative_position_point_point(reference: &Point2, point: &Point2) -> RelativePosition {
    let dx = point.x - reference.x;
    let dy = point.y - reference.y;
    RelativePosition::from_flags(dy > EPSILON, dy < -EPSILON, dx < -EPSILON, dx > EPSILON)
}

/// 在 `origin` 的 `position` 方向上距离为 `distance` 的点
///
/// 对角方向沿 45° 放置，距离仍为 `distance`；inside 返回 `origin`。
pub fn get_point_by_relative_position(
    origin: &Point2,
    position: RelativePosition,
    distance: f64,
) -> Point2 {
    let (sx, sy) = position.direction_signs();
    origin + normalize(&Vector2::new(sx, sy)) * distance
}
