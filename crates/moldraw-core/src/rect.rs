//! 轴对齐矩形工具
//!
//! - 点相对矩形的位置、矩形上的最近点
//! - 按相对位置取边或角
//! - 保持间隙的"绕点旋转矩形"：用于把标签（电荷、氢原子数等）放在原子旁边

use crate::line::{create_linear_function_by_two_points, find_circle_line_intersections};
use crate::math::{points_approx_eq, BoundingBox2, Point2, Vector2, EPSILON};
use crate::point::rotate_point_around_another;
use crate::position::RelativePosition;
use crate::vector::{find_parallel_line, normalize};
use tracing::{debug, trace};

/// `point` 相对矩形的位置；在矩形内（含边界）时为 inside
pub fn get_relative_position_point_rectangle(
    point: &Point2,
    rect: &BoundingBox2,
) -> RelativePosition {
    RelativePosition::from_flags(
        point.y > rect.max.y,
        point.y < rect.min.y,
        point.x < rect.min.x,
        point.x > rect.max.x,
    )
}

/// 矩形边界上离 `point` 最近的点
///
/// 外部的点取各轴截断；内部的点投影到最近的一条边。
pub fn get_closest_point_on_rectangle(point: &Point2, rect: &BoundingBox2) -> Point2 {
    if !rect.contains(point) {
        return Point2::new(
            point.x.clamp(rect.min.x, rect.max.x),
            point.y.clamp(rect.min.y, rect.max.y),
        );
    }

    let candidates = [
        (point.x - rect.min.x, Point2::new(rect.min.x, point.y)),
        (rect.max.x - point.x, Point2::new(rect.max.x, point.y)),
        (point.y - rect.min.y, Point2::new(point.x, rect.min.y)),
        (rect.max.y - point.y, Point2::new(point.x, rect.max.y)),
    ];
    candidates
        .iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| *p)
        .unwrap_or(*point)
}

/// 按轴向位置取矩形的一条边（起点、终点按 x 或 y 升序）
///
/// 对角位置或 inside 返回 None。
pub fn get_rectangle_edge_by_position(
    rect: &BoundingBox2,
    position: RelativePosition,
) -> Option<(Point2, Point2)> {
    if !position.is_axis() {
        return None;
    }
    let edge = if position.is_above() {
        (rect.min, Point2::new(rect.max.x, rect.min.y))
    } else if position.is_below() {
        (Point2::new(rect.min.x, rect.max.y), rect.max)
    } else if position.is_left() {
        (rect.min, Point2::new(rect.min.x, rect.max.y))
    } else {
        (Point2::new(rect.max.x, rect.min.y), rect.max)
    };
    Some(edge)
}

/// 按对角位置取矩形的一个角；非对角位置返回 None
pub fn get_rectangle_corner_by_position(
    rect: &BoundingBox2,
    position: RelativePosition,
) -> Option<Point2> {
    if !position.is_diagonal() {
        return None;
    }
    let x = if position.is_left() { rect.min.x } else { rect.max.x };
    let y = if position.is_above() { rect.min.y } else { rect.max.y };
    Some(Point2::new(x, y))
}

/// 点到矩形的距离；在内部时为到最近边的距离
pub fn distance_point_rectangle(point: &Point2, rect: &BoundingBox2) -> f64 {
    (get_closest_point_on_rectangle(point, rect) - point).norm()
}

/// 绕 `origin` 旋转矩形并保持间隙
///
/// 1. 先把矩形中点 `mid` 绕 `origin` 旋转 `angle`；
/// 2. 再沿 `origin → 旋转后中点` 的射线平移矩形，使矩形最近的边或角到
///    `origin` 的距离恰好为 `target_dist`。
///
/// `pivot_inside` 为假时 `origin` 最终位于矩形外部，为真时位于内部。
/// 宽或高为零、或旋转后中点与 `origin` 重合时直接返回旋转后的中点；
/// 内部情形找不到合法位置（例如 `target_dist` 不小于半宽/半高）时同样回退。
pub fn rotate_rectangle_around_point(
    mid: &Point2,
    half_extents: &Vector2,
    origin: &Point2,
    angle: f64,
    target_dist: f64,
    pivot_inside: bool,
    is_radian: bool,
) -> Point2 {
    let rotated_mid = rotate_point_around_another(mid, origin, angle, is_radian);
    if half_extents.x.abs() < EPSILON
        || half_extents.y.abs() < EPSILON
        || points_approx_eq(&rotated_mid, origin)
    {
        return rotated_mid;
    }

    let dir = normalize(&(rotated_mid - origin));
    let half = half_extents.abs();
    let placed = if pivot_inside {
        place_around_inner_pivot(origin, &dir, &half, target_dist)
    } else {
        Some(place_around_outer_pivot(origin, &dir, &half, target_dist))
    };

    placed.unwrap_or_else(|| {
        debug!(
            ?rotated_mid,
            target_dist, pivot_inside, "no valid rectangle placement, using rotated midpoint"
        );
        rotated_mid
    })
}

/// `origin` 在矩形外：最近的要素可能是一条边，也可能是一个角
fn place_around_outer_pivot(
    origin: &Point2,
    dir: &Vector2,
    half: &Vector2,
    target_dist: f64,
) -> Point2 {
    let ax = dir.x.abs();
    let ay = dir.y.abs();

    // 左/右边先到达目标距离，且此时 y 方向仍有重叠
    if ax > EPSILON {
        let t = (half.x + target_dist) / ax;
        if ay * t <= half.y + EPSILON {
            trace!(t, "rectangle lands on a vertical edge");
            return origin + dir * t;
        }
    }
    // 上/下边
    if ay > EPSILON {
        let t = (half.y + target_dist) / ay;
        if ax * t <= half.x + EPSILON {
            trace!(t, "rectangle lands on a horizontal edge");
            return origin + dir * t;
        }
    }

    // 角：最近角沿平行于移动方向的直线运动，与半径为 target_dist 的圆求交
    let corner_offset = Vector2::new(-dir.x.signum() * half.x, -dir.y.signum() * half.y);
    let through = origin + dir;
    let (p, q) = find_parallel_line(origin, &through, &corner_offset);
    let hits = create_linear_function_by_two_points(&p, &q)
        .map(|line| find_circle_line_intersections(target_dist, origin, &line))
        .unwrap_or_default();

    let corner = hits
        .into_iter()
        .max_by(|a, b| (a - origin).dot(dir).total_cmp(&(b - origin).dot(dir)));
    match corner {
        Some(corner) => {
            trace!(?corner, "rectangle lands on a corner");
            corner - corner_offset
        }
        None => {
            // 仅在数值极端情况下出现：退回到沿对角方向的解析解
            let tx = (half.x + target_dist) / ax.max(EPSILON);
            let ty = (half.y + target_dist) / ay.max(EPSILON);
            let t = tx.max(ty);
            origin + dir * t
        }
    }
}

/// `origin` 在矩形内：依次尝试让四条边之一到 `origin` 的距离为 `target_dist`，
/// 取沿射线平移量最小的合法位置
fn place_around_inner_pivot(
    origin: &Point2,
    dir: &Vector2,
    half: &Vector2,
    target_dist: f64,
) -> Option<Point2> {
    let mut best: Option<f64> = None;

    for position in RelativePosition::AXES {
        let (sx, sy) = position.direction_signs();
        // 该边所在的轴分量，以及边相对 origin 的目标坐标偏移
        let (component, half_axis, sign) = if sx != 0.0 {
            (dir.x, half.x, sx)
        } else {
            (dir.y, half.y, sy)
        };
        if component.abs() < EPSILON {
            continue;
        }
        // 边位于 origin + sign·target_dist，中心位于边 - sign·half_axis
        let t = (sign * target_dist - sign * half_axis) / component;
        if t < -EPSILON {
            continue;
        }
        let center = origin + dir * t;
        let rect = BoundingBox2::from_center(center, *half);
        let inside = origin.x > rect.min.x
            && origin.x < rect.max.x
            && origin.y > rect.min.y
            && origin.y < rect.max.y;
        if !inside {
            continue;
        }
        let clearance = distance_point_rectangle(origin, &rect);
        if (clearance - target_dist).abs() > 1e-7 {
            continue;
        }
        trace!(%position, t, "inner placement candidate");
        if best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    }

    best.map(|t| origin + dir * t)
}
