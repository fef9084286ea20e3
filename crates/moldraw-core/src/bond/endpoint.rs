//! 键的端点与结构上下文

use super::config::DrawConfig;
use crate::math::Point2;
use serde::{Deserialize, Serialize};

/// 端点种类
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndpointKind {
    /// 原子；`labeled` 表示绘制了元素符号等文字
    Atom { labeled: bool },
    /// 文字注释
    Annotation,
    /// 折叠后的整个结构，以圆表示
    StructureCircle { radius: f64 },
}

/// 键或连接线的一个端点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub position: Point2,
    pub kind: EndpointKind,
}

impl Endpoint {
    pub fn atom(position: Point2) -> Self {
        Self {
            position,
            kind: EndpointKind::Atom { labeled: false },
        }
    }

    pub fn labeled_atom(position: Point2) -> Self {
        Self {
            position,
            kind: EndpointKind::Atom { labeled: true },
        }
    }

    pub fn annotation(position: Point2) -> Self {
        Self {
            position,
            kind: EndpointKind::Annotation,
        }
    }

    pub fn structure_circle(center: Point2, radius: f64) -> Self {
        Self {
            position: center,
            kind: EndpointKind::StructureCircle { radius },
        }
    }

    /// 线条在该端点处需要让出的距离
    pub fn clearance(&self, cfg: &DrawConfig) -> f64 {
        match self.kind {
            EndpointKind::Atom { labeled: false } => 0.0,
            EndpointKind::Atom { labeled: true } | EndpointKind::Annotation => cfg.label_clearance,
            EndpointKind::StructureCircle { radius } => radius + cfg.structure_circle_margin,
        }
    }
}

/// 键类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondKind {
    Single,
    Double,
    Triple,
    Aromatic,
    /// 实楔形（指向观察者）
    StereoFront,
    /// 虚楔形（背离观察者）
    StereoBack,
}

/// 邻接原子
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub position: Point2,
    #[serde(default)]
    pub aromatic: bool,
}

impl Neighbor {
    pub fn new(position: Point2, aromatic: bool) -> Self {
        Self { position, aromatic }
    }
}

/// 键所在的结构上下文
///
/// `neighbors` 可以包含键自身的两个原子，统计时会被排除。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BondContext {
    /// 键所属环的顶点（按环序）
    #[serde(default)]
    pub ring: Option<Vec<Point2>>,
    #[serde(default)]
    pub neighbors: Vec<Neighbor>,
}

impl BondContext {
    pub fn with_ring(ring: Vec<Point2>) -> Self {
        Self {
            ring: Some(ring),
            neighbors: Vec::new(),
        }
    }

    pub fn with_neighbors(neighbors: Vec<Neighbor>) -> Self {
        Self {
            ring: None,
            neighbors,
        }
    }
}
