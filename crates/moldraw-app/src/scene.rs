//! 场景描述与批量构建

use anyhow::{Context, Result};
use moldraw_core::bond::{
    build_hydrophobic_draw_info, build_interaction_draw_info, build_many, BondContext,
    BondDrawInfo, BondKind, BondRequest, DrawConfig, Endpoint, Neighbor,
};
use moldraw_core::math::Point2;
use moldraw_core::point::rotate_point_around_another;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 相互作用连接线（氢键、结构圆连接等）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub from: Endpoint,
    pub to: Endpoint,
}

/// 一张图中所有需要计算几何的元素
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub bonds: Vec<BondRequest>,
    #[serde(default)]
    pub interactions: Vec<Connector>,
    #[serde(default)]
    pub hydrophobic: Vec<Vec<Point2>>,
}

/// 与 `Scene` 一一对应的构建结果；`None` 表示本次不绘制
#[derive(Debug, Clone, Serialize)]
pub struct SceneDrawInfo {
    pub bonds: Vec<Option<BondDrawInfo>>,
    pub interactions: Vec<Option<BondDrawInfo>>,
    pub hydrophobic: Vec<Option<BondDrawInfo>>,
}

/// 命中的元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum Hit {
    Bond(usize),
    Interaction(usize),
    Hydrophobic(usize),
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid scene {}", path.display()))
    }

    pub fn build(&self, cfg: &DrawConfig) -> SceneDrawInfo {
        let result = SceneDrawInfo {
            bonds: build_many(&self.bonds, cfg),
            interactions: self
                .interactions
                .iter()
                .map(|c| build_interaction_draw_info(&c.from, &c.to, cfg))
                .collect(),
            hydrophobic: self
                .hydrophobic
                .iter()
                .map(|points| build_hydrophobic_draw_info(points, cfg))
                .collect(),
        };
        info!(
            bonds = self.bonds.len(),
            skipped = result.skipped(),
            "Built scene draw info"
        );
        result
    }

    /// 示例：带一个羰基取代基的苯环，以及一条到结构圆的相互作用线
    pub fn demo() -> Self {
        let center = Point2::new(100.0, 100.0);
        let first = Point2::new(130.0, 100.0);
        let ring: Vec<Point2> = (0..6)
            .map(|i| rotate_point_around_another(&first, &center, 60.0 * i as f64, false))
            .collect();
        let carbonyl_c = Point2::new(160.0, 100.0);
        let oxygen = Point2::new(175.0, 74.0);

        let mut bonds: Vec<BondRequest> = (0..6)
            .map(|i| {
                let a = ring[i];
                let b = ring[(i + 1) % 6];
                let kind = if i % 2 == 0 { BondKind::Double } else { BondKind::Single };
                BondRequest {
                    from: Endpoint::atom(a),
                    to: Endpoint::atom(b),
                    kind,
                    context: BondContext::with_ring(ring.clone()),
                }
            })
            .collect();
        bonds.push(BondRequest {
            from: Endpoint::atom(first),
            to: Endpoint::atom(carbonyl_c),
            kind: BondKind::Single,
            context: BondContext::default(),
        });
        bonds.push(BondRequest {
            from: Endpoint::atom(carbonyl_c),
            to: Endpoint::labeled_atom(oxygen),
            kind: BondKind::Double,
            context: BondContext::with_neighbors(vec![
                Neighbor::new(first, true),
                Neighbor::new(Point2::new(175.0, 126.0), false),
            ]),
        });
        bonds.push(BondRequest {
            from: Endpoint::atom(carbonyl_c),
            to: Endpoint::atom(Point2::new(175.0, 126.0)),
            kind: BondKind::StereoFront,
            context: BondContext::default(),
        });

        Self {
            bonds,
            interactions: vec![Connector {
                from: Endpoint::labeled_atom(oxygen),
                to: Endpoint::structure_circle(Point2::new(260.0, 40.0), 30.0),
            }],
            hydrophobic: vec![vec![
                Point2::new(60.0, 170.0),
                Point2::new(100.0, 185.0),
                Point2::new(140.0, 170.0),
            ]],
        }
    }
}

impl SceneDrawInfo {
    /// 因几何退化而跳过的元素数量
    pub fn skipped(&self) -> usize {
        self.bonds
            .iter()
            .chain(&self.interactions)
            .chain(&self.hydrophobic)
            .filter(|i| i.is_none())
            .count()
    }

    /// 选择多边形包含 `point` 的所有元素
    pub fn hits(&self, point: &Point2) -> Vec<Hit> {
        fn collect(
            infos: &[Option<BondDrawInfo>],
            point: &Point2,
            hit: fn(usize) -> Hit,
        ) -> Vec<Hit> {
            infos
                .iter()
                .enumerate()
                .filter(|(_, info)| info.as_ref().is_some_and(|i| i.hit_test(point)))
                .map(|(idx, _)| hit(idx))
                .collect()
        }
        let mut hits = collect(&self.bonds, point, Hit::Bond);
        hits.extend(collect(&self.interactions, point, Hit::Interaction));
        hits.extend(collect(&self.hydrophobic, point, Hit::Hydrophobic));
        hits
    }
}
