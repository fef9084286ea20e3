//! 偏移线画在键的哪一侧
//!
//! 两种依据：环内侧（用环顶点多边形的环绕数判断），或"较满一侧"
//! （键线两侧除键本身两个原子以外的邻居数量，数量相等时取默认侧）。

use super::endpoint::Neighbor;
use crate::line::{find_unit_normals, get_side_of_line};
use crate::math::{Point2, Vector2};
use crate::point::{coords_almost_equal, find_edge_midpoint};
use crate::polygon::calc_winding_number;
use serde::{Deserialize, Serialize};

/// 判断邻居与键原子重合时使用的容差
const SAME_ATOM_TOLERANCE: f64 = 1e-6;

/// 键的一侧，对应 [`find_unit_normals`] 返回的法向量下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondSide {
    /// 第一个法向量一侧（`get_side_of_line` 为 1）
    First,
    /// 第二个法向量一侧（`get_side_of_line` 为 -1）
    Second,
}

/// 邻居数量相等时使用的一侧
pub const DEFAULT_SIDE: BondSide = BondSide::First;

impl BondSide {
    pub fn normal(self, normals: &[Vector2; 2]) -> Vector2 {
        match self {
            BondSide::First => normals[0],
            BondSide::Second => normals[1],
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            BondSide::First => BondSide::Second,
            BondSide::Second => BondSide::First,
        }
    }
}

/// 统计 `a → b` 两侧的邻居数：`(First 侧, Second 侧)`
///
/// 与 `a`、`b` 重合的邻居以及恰在键线上的邻居不计入。
pub fn count_neighbors_per_side(
    a: &Point2,
    b: &Point2,
    neighbors: &[Neighbor],
    aromatic_only: bool,
) -> (usize, usize) {
    neighbors
        .iter()
        .filter(|n| !aromatic_only || n.aromatic)
        .filter(|n| {
            !coords_almost_equal(&n.position, a, SAME_ATOM_TOLERANCE)
                && !coords_almost_equal(&n.position, b, SAME_ATOM_TOLERANCE)
        })
        .fold((0, 0), |(first, second), n| match get_side_of_line(a, b, &n.position) {
            1 => (first + 1, second),
            -1 => (first, second + 1),
            _ => (first, second),
        })
}

/// 是否有任何可计数的邻居
pub fn has_substituents(
    a: &Point2,
    b: &Point2,
    neighbors: &[Neighbor],
    aromatic_only: bool,
) -> bool {
    let (first, second) = count_neighbors_per_side(a, b, neighbors, aromatic_only);
    first + second > 0
}

/// 较满的一侧；数量严格更多的一侧胜出，相等时为 [`DEFAULT_SIDE`]
pub fn find_fuller_side(
    a: &Point2,
    b: &Point2,
    neighbors: &[Neighbor],
    aromatic_only: bool,
) -> BondSide {
    let (first, second) = count_neighbors_per_side(a, b, neighbors, aromatic_only);
    if first > second {
        BondSide::First
    } else if second > first {
        BondSide::Second
    } else {
        DEFAULT_SIDE
    }
}

/// 环内侧：从键中点沿法向量偏移 `probe_distance` 后落在环多边形内的一侧
///
/// 环少于 3 个顶点或两侧探测点都不在环内时返回 None。
pub fn find_ring_interior_side(
    a: &Point2,
    b: &Point2,
    ring: &[Point2],
    probe_distance: f64,
) -> Option<BondSide> {
    if ring.len() < 3 {
        return None;
    }
    let normals = find_unit_normals(a, b)?;
    let mid = find_edge_midpoint(a, b);
    [BondSide::First, BondSide::Second]
        .into_iter()
        .find(|side| {
            let probe = mid + side.normal(&normals) * probe_distance;
            calc_winding_number(&probe, ring) != 0
        })
}
