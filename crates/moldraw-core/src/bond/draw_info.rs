//! 键的绘制信息
//!
//! 每种键形态对应 [`BondStrokes`] 的一个变体，渲染器按变体穷举匹配；
//! 需要"点列表的列表"形式时使用 [`BondStrokes::draw_points`]。

use super::side::BondSide;
use crate::math::Point2;
use crate::polygon::{check_collision_polygon_point, check_collision_two_polygons};
use serde::{Deserialize, Serialize};

/// 需要绘制的笔画
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BondStrokes {
    /// 单条线段
    Single { line: [Point2; 2] },
    /// 关于键轴对称的两条平行线
    Double { lines: [[Point2; 2]; 2] },
    /// 键轴上的主线加一侧的偏移线（偏移线可能为虚线）
    Offset {
        main: [Point2; 2],
        offset: [Point2; 2],
        side: BondSide,
        dashed: bool,
    },
    /// 三条平行线，中间一条在键轴上
    Triple { lines: [[Point2; 2]; 3] },
    /// 填充的楔形四边形，窄端在第一个端点
    Wedge { quad: [Point2; 4] },
    /// 虚楔形：一组逐渐变宽的短线
    Hashed { lines: Vec<[Point2; 2]> },
    /// 虚线，`dash_offset` 使一段实线居中
    Dashed { line: [Point2; 2], dash_offset: f64 },
    /// 经过控制点的折线
    Polyline { points: Vec<Point2> },
}

impl BondStrokes {
    /// 每个独立笔画/路径一个点列表
    pub fn draw_points(&self) -> Vec<Vec<Point2>> {
        match self {
            BondStrokes::Single { line } | BondStrokes::Dashed { line, .. } => vec![line.to_vec()],
            BondStrokes::Double { lines } => lines.iter().map(|l| l.to_vec()).collect(),
            BondStrokes::Offset { main, offset, .. } => vec![main.to_vec(), offset.to_vec()],
            BondStrokes::Triple { lines } => lines.iter().map(|l| l.to_vec()).collect(),
            BondStrokes::Wedge { quad } => vec![quad.to_vec()],
            BondStrokes::Hashed { lines } => lines.iter().map(|l| l.to_vec()).collect(),
            BondStrokes::Polyline { points } => vec![points.clone()],
        }
    }

    pub fn stroke_count(&self) -> usize {
        match self {
            BondStrokes::Single { .. }
            | BondStrokes::Dashed { .. }
            | BondStrokes::Wedge { .. }
            | BondStrokes::Polyline { .. } => 1,
            BondStrokes::Double { .. } | BondStrokes::Offset { .. } => 2,
            BondStrokes::Triple { .. } => 3,
            BondStrokes::Hashed { lines } => lines.len(),
        }
    }
}

/// 一条键的完整绘制信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondDrawInfo {
    pub strokes: BondStrokes,
    /// 缩短后的两个端点
    pub midpoints: [Point2; 2],
    /// 紧贴绘制形状的碰撞多边形
    pub edge_collision_points: Vec<Point2>,
    /// 更宽的选择多边形
    pub sel_collision_points: Vec<Point2>,
    pub sel_width: f64,
}

impl BondDrawInfo {
    /// 指针是否落在选择多边形上
    pub fn hit_test(&self, point: &Point2) -> bool {
        check_collision_polygon_point(&self.sel_collision_points, point)
    }

    /// 选择框/套索多边形是否与键的绘制形状相交
    pub fn intersects(&self, polygon: &[Point2]) -> bool {
        check_collision_two_polygons(&self.edge_collision_points, polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_points_shape() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let single = BondStrokes::Single { line: [a, b] };
        assert_eq!(single.draw_points(), vec![vec![a, b]]);

        let triple = BondStrokes::Triple {
            lines: [[a, b], [a, b], [a, b]],
        };
        assert_eq!(triple.draw_points().len(), 3);
        assert_eq!(triple.stroke_count(), 3);

        let wedge = BondStrokes::Wedge { quad: [a, b, b, a] };
        assert_eq!(wedge.draw_points()[0].len(), 4);
    }
}
