//! 多边形图元与碰撞检测
//!
//! 多边形是顶点的有序序列，不要求凸（只有重心计算要求凸）。
//! 1 个顶点的"多边形"视为点，2 个顶点视为线段，碰撞检测对两者单独处理。
//!
//! 边界上的点：环绕数对边界点的分类取决于边的方向和比较顺序
//! （起点用 `<=`，终点用 `>`），结果不保证一致，调用方不应依赖。

use crate::line::{
    check_point_on_line_segment, check_two_line_segments_interact, distance_point_to_segment,
    find_unit_normals,
};
use crate::math::{Point2, Vector2, EPSILON};
use crate::point::coords_almost_equal;
use crate::vector::normalize;
use serde::{Deserialize, Serialize};

/// 圆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// 凸多边形的重心与有向面积
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonCentroid {
    pub centroid: Point2,
    /// 鞋带公式的有向面积；y 向下的屏幕坐标中顺时针为正
    pub signed_area: f64,
}

/// 以线段 `a-b` 为中线、总宽 `2 × half_width` 的四边形
///
/// 顶点顺序：`a + n0·h`、`b + n0·h`、`b + n1·h`、`a + n1·h`，
/// 因此法向量顺序决定了顶点的绕向。
pub fn create_rect_from_line(
    a: &Point2,
    b: &Point2,
    normals: &[Vector2; 2],
    half_width: f64,
) -> Vec<Point2> {
    let [n0, n1] = normals;
    vec![
        a + n0 * half_width,
        b + n0 * half_width,
        b + n1 * half_width,
        a + n1 * half_width,
    ]
}

/// `p2` 相对于直线 `p0 → p1` 的左右：>0 在左，<0 在右，=0 共线
#[inline]
pub fn is_left(p0: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

/// 多边形的边（闭合）；2 个顶点时只有一条边
fn edges(vertices: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    let n = vertices.len();
    let count = match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    };
    (0..count).map(move |i| (&vertices[i], &vertices[(i + 1) % n]))
}

/// 点相对多边形的环绕数；为 0 表示在外部
pub fn calc_winding_number(point: &Point2, vertices: &[Point2]) -> i32 {
    let mut wn = 0;
    let n = vertices.len();
    for i in 0..n {
        let v0 = &vertices[i];
        let v1 = &vertices[(i + 1) % n];
        if v0.y <= point.y {
            // 向上穿越
            if v1.y > point.y && is_left(v0, v1, point) > 0.0 {
                wn += 1;
            }
        } else if v1.y <= point.y && is_left(v0, v1, point) < 0.0 {
            // 向下穿越
            wn -= 1;
        }
    }
    wn
}

/// 点是否与多边形碰撞
pub fn check_collision_polygon_point(vertices: &[Point2], point: &Point2) -> bool {
    match vertices {
        [] => false,
        [single] => coords_almost_equal(single, point, EPSILON),
        [a, b] => check_point_on_line_segment(a, b, point),
        _ => calc_winding_number(point, vertices) != 0,
    }
}

/// 圆是否与多边形碰撞（圆心在内部，或任一条边与圆相交）
pub fn check_collision_polygon_circle(vertices: &[Point2], circle: &Circle) -> bool {
    match vertices {
        [] => false,
        [single] => (single - circle.center).norm() <= circle.radius,
        _ => {
            (vertices.len() > 2 && calc_winding_number(&circle.center, vertices) != 0)
                || edges(vertices)
                    .any(|(a, b)| distance_point_to_segment(a, b, &circle.center) <= circle.radius)
        }
    }
}

/// 两个多边形是否碰撞
///
/// 任一对边相交，或一方的某个顶点位于另一方内部，即视为碰撞。
pub fn check_collision_two_polygons(first: &[Point2], second: &[Point2]) -> bool {
    if first.is_empty() || second.is_empty() {
        return false;
    }
    if let [single] = first {
        return check_collision_polygon_point(second, single);
    }
    if let [single] = second {
        return check_collision_polygon_point(first, single);
    }

    let edges_cross = edges(first).any(|(a, b)| {
        edges(second).any(|(c, d)| check_two_line_segments_interact(a, b, c, d))
    });
    if edges_cross {
        return true;
    }

    (second.len() > 2 && calc_winding_number(&first[0], second) != 0)
        || (first.len() > 2 && calc_winding_number(&second[0], first) != 0)
}

/// 点是否落在粗细为 `2 × half_width` 的折线上
pub fn check_collision_point_path(point: &Point2, path: &[Point2], half_width: f64) -> bool {
    match path {
        [] => false,
        [single] => (single - point).norm() <= half_width,
        _ => path
            .windows(2)
            .any(|w| distance_point_to_segment(&w[0], &w[1], point) <= half_width),
    }
}

/// 沿开放折线两侧各偏移 `half_width` 得到的带状多边形
///
/// 顶点处使用相邻两段法向量的平均方向；少于 2 个不重合的点时返回 None。
pub fn ribbon_polygon(points: &[Point2], half_width: f64) -> Option<Vec<Point2>> {
    let mut path: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if path.last().map_or(true, |last| !coords_almost_equal(last, p, EPSILON)) {
            path.push(*p);
        }
    }
    if path.len() < 2 {
        return None;
    }

    let segment_normals = path
        .windows(2)
        .map(|w| find_unit_normals(&w[0], &w[1]).map(|[n0, _]| n0))
        .collect::<Option<Vec<_>>>()?;

    let vertex_normals: Vec<Vector2> = (0..path.len())
        .map(|i| {
            let before = i.checked_sub(1).map(|j| segment_normals[j]);
            let after = segment_normals.get(i).copied();
            match (before, after) {
                (Some(n1), Some(n2)) => {
                    let avg = normalize(&(n1 + n2));
                    if avg.norm() < EPSILON {
                        n2
                    } else {
                        avg
                    }
                }
                (Some(n), None) | (None, Some(n)) => n,
                (None, None) => Vector2::zeros(),
            }
        })
        .collect();

    let mut ribbon: Vec<Point2> = path
        .iter()
        .zip(&vertex_normals)
        .map(|(p, n)| p + n * half_width)
        .collect();
    ribbon.extend(
        path.iter()
            .zip(&vertex_normals)
            .rev()
            .map(|(p, n)| p - n * half_width),
    );
    Some(ribbon)
}

/// 凸多边形的重心与有向面积（鞋带公式加权）
///
/// 非凸输入的结果没有定义；面积为零时返回 None。
pub fn find_center_of_convex_polygon(vertices: &[Point2]) -> Option<PolygonCentroid> {
    if vertices.len() < 3 {
        return None;
    }
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in edges(vertices) {
        let cross = a.x * b.y - b.x * a.y;
        area2 += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    if area2.abs() < EPSILON {
        return None;
    }
    let signed_area = area2 / 2.0;
    Some(PolygonCentroid {
        centroid: Point2::new(cx / (6.0 * signed_area), cy / (6.0 * signed_area)),
        signed_area,
    })
}
