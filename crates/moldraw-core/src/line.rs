//! 直线与线段图元
//!
//! 包括：
//! - 线段单位法向量
//! - 点在线段上 / 线段相交判断
//! - 直线方程（斜截式，竖直线单独表示）及直线–直线、直线–圆求交
//! - 按端点间隙缩短线段
//! - 点相对直线的方位

use crate::math::{Point2, Vector2, EPSILON};
use crate::vector::{normalize, vector_from_line};
use serde::{Deserialize, Serialize};

/// 点在线段上判断使用的容差
pub const ON_SEGMENT_TOLERANCE: f64 = 1e-6;

/// 直线方程
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LinearFunction {
    /// `y = m·x + b`
    Sloped { m: f64, b: f64 },
    /// `x = x`
    Vertical { x: f64 },
}

impl LinearFunction {
    /// 在给定 x 处求 y，竖直线返回 None
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            LinearFunction::Sloped { m, b } => Some(m * x + b),
            LinearFunction::Vertical { .. } => None,
        }
    }
}

/// 线段 `a → b` 的两个单位法向量
///
/// 固定顺序：第一个是方向向量逆时针旋转 90°（`(-dy, dx)`），第二个与之相反。
/// 线段长度为零时返回 None。
pub fn find_unit_normals(a: &Point2, b: &Point2) -> Option<[Vector2; 2]> {
    let dir = vector_from_line(a, b);
    if dir.norm() < EPSILON {
        return None;
    }
    let n = normalize(&Vector2::new(-dir.y, dir.x));
    Some([n, -n])
}

/// 点到线段的距离
pub fn distance_point_to_segment(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    let v = b - a;
    let w = p - a;

    let c1 = w.dot(&v);
    if c1 <= 0.0 {
        return (p - a).norm();
    }

    let c2 = v.dot(&v);
    if c2 <= c1 {
        return (p - b).norm();
    }

    let t = c1 / c2;
    (p - (a + v * t)).norm()
}

/// 检查点是否在线段 `a-b` 上（带浮点容差）
pub fn check_point_on_line_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    distance_point_to_segment(a, b, p) <= ON_SEGMENT_TOLERANCE
}

#[inline]
fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[inline]
fn orientation(o: &Point2, a: &Point2, b: &Point2) -> i8 {
    let c = cross(o, a, b);
    if c.abs() < EPSILON {
        0
    } else if c > 0.0 {
        1
    } else {
        -1
    }
}

/// 点 `p` 是否落在 `a-b` 的坐标范围内（已知三点共线）
#[inline]
fn within_span(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x <= a.x.max(b.x) + EPSILON
        && p.x >= a.x.min(b.x) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
}

/// 两条线段 `a-b` 与 `c-d` 是否相交或接触
///
/// 共线时按重叠区间判断。
pub fn check_two_line_segments_interact(
    a: &Point2,
    b: &Point2,
    c: &Point2,
    d: &Point2,
) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && within_span(a, b, c))
        || (o2 == 0 && within_span(a, b, d))
        || (o3 == 0 && within_span(c, d, a))
        || (o4 == 0 && within_span(c, d, b))
}

/// 由两点构造直线方程，两点重合时返回 None
pub fn create_linear_function_by_two_points(a: &Point2, b: &Point2) -> Option<LinearFunction> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx.abs() < EPSILON {
        if dy.abs() < EPSILON {
            return None;
        }
        return Some(LinearFunction::Vertical { x: a.x });
    }
    let m = dy / dx;
    Some(LinearFunction::Sloped { m, b: a.y - m * a.x })
}

/// 两直线交点；平行（含重合）时返回 None
pub fn find_intersection_two_lines(
    first: &LinearFunction,
    second: &LinearFunction,
) -> Option<Point2> {
    match (*first, *second) {
        (LinearFunction::Sloped { m: m1, b: b1 }, LinearFunction::Sloped { m: m2, b: b2 }) => {
            if (m1 - m2).abs() < EPSILON {
                return None;
            }
            let x = (b2 - b1) / (m1 - m2);
            Some(Point2::new(x, m1 * x + b1))
        }
        (LinearFunction::Vertical { x }, LinearFunction::Sloped { m, b })
        | (LinearFunction::Sloped { m, b }, LinearFunction::Vertical { x }) => {
            Some(Point2::new(x, m * x + b))
        }
        (LinearFunction::Vertical { .. }, LinearFunction::Vertical { .. }) => None,
    }
}

/// 二次方程的实根（升序）；判别式在容差内视为一个切点
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let disc = b * b - 4.0 * a * c;
    let tol = EPSILON * (b * b).max(1.0);
    if disc < -tol {
        return Vec::new();
    }
    if disc.abs() <= tol {
        return vec![-b / (2.0 * a)];
    }
    let sqrt = disc.sqrt();
    vec![(-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a)]
}

/// 圆（圆心 `center`，半径 `radius`）与直线的交点：0、1 或 2 个
///
/// 斜线按 x 升序返回，竖直线按 y 升序返回。
pub fn find_circle_line_intersections(
    radius: f64,
    center: &Point2,
    line: &LinearFunction,
) -> Vec<Point2> {
    match *line {
        LinearFunction::Sloped { m, b } => {
            let k = b - center.y;
            let qa = 1.0 + m * m;
            let qb = 2.0 * (m * k - center.x);
            let qc = center.x * center.x + k * k - radius * radius;
            quadratic_roots(qa, qb, qc)
                .into_iter()
                .map(|x| Point2::new(x, m * x + b))
                .collect()
        }
        LinearFunction::Vertical { x } => {
            let dx = x - center.x;
            quadratic_roots(1.0, -2.0 * center.y, center.y * center.y + dx * dx - radius * radius)
                .into_iter()
                .map(|y| Point2::new(x, y))
                .collect()
        }
    }
}

/// 点 `p` 位于有向直线 `a → b` 的哪一侧
///
/// 返回 `(b - a) × (p - a)` 的符号：1、-1，共线（容差内）为 0。
/// 结果为 1 的一侧就是 [`find_unit_normals`] 第一个法向量指向的一侧。
pub fn get_side_of_line(a: &Point2, b: &Point2, p: &Point2) -> i8 {
    orientation(a, b, p)
}

/// 将线段两端分别向内收缩 `dist_from_a` 与 `dist_from_b`
///
/// `direction_check` 为真时，若收缩后线段反向或退化为零长度，返回 None。
/// 原线段长度为零且不做方向检查时原样返回。
pub fn shorten_line(
    a: &Point2,
    b: &Point2,
    dist_from_a: f64,
    dist_from_b: f64,
    direction_check: bool,
) -> Option<(Point2, Point2)> {
    let v = vector_from_line(a, b);
    if v.norm() < EPSILON {
        return if direction_check { None } else { Some((*a, *b)) };
    }
    let dir = normalize(&v);
    let new_a = a + dir * dist_from_a;
    let new_b = b - dir * dist_from_b;

    if direction_check && (new_b - new_a).dot(&v) <= EPSILON {
        return None;
    }
    Some((new_a, new_b))
}

/// 让虚线图案的一段实线居中于 `start-end` 的中点时所需的 dash offset
///
/// 图案周期为 `dash + gap`；返回值在 `[0, dash + gap)` 内，可直接用作
/// `stroke-dashoffset`。周期非正时返回 0。
pub fn get_base_dash_offset_by_midpoints(start: &Point2, end: &Point2, dash: f64, gap: f64) -> f64 {
    let period = dash + gap;
    if period <= EPSILON {
        return 0.0;
    }
    let half_len = (end - start).norm() / 2.0;
    let dash_start = half_len - dash / 2.0;
    (period - dash_start.rem_euclid(period)).rem_euclid(period)
}
