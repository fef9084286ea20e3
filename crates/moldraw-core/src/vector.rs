//! 2D向量运算
//!
//! 所有函数都是纯函数，返回新值，不修改输入。

use crate::math::{Point2, Vector2, EPSILON};

#[inline]
pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
    a + b
}

#[inline]
pub fn subtract(a: &Vector2, b: &Vector2) -> Vector2 {
    a - b
}

#[inline]
pub fn scale(v: &Vector2, factor: f64) -> Vector2 {
    v * factor
}

#[inline]
pub fn length(v: &Vector2) -> f64 {
    v.norm()
}

/// 两点间距离
#[inline]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// 单位化向量；长度为零时返回零向量而不是除以零
pub fn normalize(v: &Vector2) -> Vector2 {
    v.try_normalize(EPSILON).unwrap_or_else(Vector2::zeros)
}

/// 从 `a` 指向 `b` 的向量
#[inline]
pub fn vector_from_line(a: &Point2, b: &Point2) -> Vector2 {
    b - a
}

/// `target - origin` 中垂直于 `origin → through` 方向的分量
///
/// 方向退化（`origin == through`）时整个 `target - origin` 都视为垂直分量。
pub fn find_perpendicular_offset_vector(
    origin: &Point2,
    through: &Point2,
    target: &Point2,
) -> Vector2 {
    let dir = normalize(&vector_from_line(origin, through));
    let v = target - origin;
    v - dir * v.dot(&dir)
}

/// 平行于 `origin → through` 且偏移 `offset` 的直线上的两点
pub fn find_parallel_line(
    origin: &Point2,
    through: &Point2,
    offset: &Vector2,
) -> (Point2, Point2) {
    (origin + offset, through + offset)
}
