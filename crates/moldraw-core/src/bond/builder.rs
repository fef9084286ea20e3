//! 键绘制信息构建
//!
//! 流程：端点按避让距离缩短 → 按键类型构造笔画 → 生成紧贴与选择两层碰撞多边形。
//! 任何缩短失败或零长度都以 `None` 返回，由渲染器跳过本次绘制。

use super::config::DrawConfig;
use super::draw_info::{BondDrawInfo, BondStrokes};
use super::endpoint::{BondContext, BondKind, Endpoint};
use super::side::{find_fuller_side, find_ring_interior_side, has_substituents, BondSide};
use crate::line::{find_unit_normals, get_base_dash_offset_by_midpoints, shorten_line};
use crate::math::{Point2, Vector2, EPSILON};
use crate::point::create_movement_between_two_points;
use crate::polygon::{create_rect_from_line, ribbon_polygon};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// 批量构建的单个请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRequest {
    pub from: Endpoint,
    pub to: Endpoint,
    pub kind: BondKind,
    #[serde(default)]
    pub context: BondContext,
}

/// 单条虚楔形最多的短线数
pub const MAX_HASHES: usize = 4096;

/// 两层碰撞多边形
struct CollisionBand {
    edge: Vec<Point2>,
    sel: Vec<Point2>,
    sel_width: f64,
}

impl CollisionBand {
    /// 以 `a-b` 为中线、半宽 `half_width` 的矩形带，选择带再加上选择边距
    fn around(
        a: &Point2,
        b: &Point2,
        normals: &[Vector2; 2],
        half_width: f64,
        cfg: &DrawConfig,
    ) -> Self {
        let sel_half = half_width + cfg.selector_margin;
        Self {
            edge: create_rect_from_line(a, b, normals, half_width),
            sel: create_rect_from_line(a, b, normals, sel_half),
            sel_width: 2.0 * sel_half,
        }
    }

    fn into_info(self, strokes: BondStrokes, a: Point2, b: Point2) -> BondDrawInfo {
        BondDrawInfo {
            strokes,
            midpoints: [a, b],
            edge_collision_points: self.edge,
            sel_collision_points: self.sel,
            sel_width: self.sel_width,
        }
    }
}

#[inline]
fn shifted(a: &Point2, b: &Point2, offset: Vector2) -> [Point2; 2] {
    [a + offset, b + offset]
}

/// 窄端在 `a`、宽端在 `b` 的楔形轮廓
fn wedge_outline(
    a: &Point2,
    b: &Point2,
    normals: &[Vector2; 2],
    narrow: f64,
    wide: f64,
) -> [Point2; 4] {
    let [n0, n1] = normals;
    [a + n0 * narrow, b + n0 * wide, b + n1 * wide, a + n1 * narrow]
}

/// 缩短后的端点；端点间隙使线段反向或退化时返回 None
pub fn get_edge_mid_points(
    from: &Endpoint,
    to: &Endpoint,
    cfg: &DrawConfig,
) -> Option<(Point2, Point2)> {
    let mids = shorten_line(
        &from.position,
        &to.position,
        from.clearance(cfg),
        to.clearance(cfg),
        true,
    );
    if mids.is_none() {
        debug!(
            from = ?from.position,
            to = ?to.position,
            "edge endpoints overlap after clearance, skipping"
        );
    }
    mids
}

/// 构建一条化学键的绘制信息
pub fn build_bond_draw_info(
    from: &Endpoint,
    to: &Endpoint,
    kind: BondKind,
    context: &BondContext,
    cfg: &DrawConfig,
) -> Option<BondDrawInfo> {
    let (a, b) = get_edge_mid_points(from, to, cfg)?;
    let normals = find_unit_normals(&a, &b)?;

    let info = match kind {
        BondKind::Single => single(a, b, &normals, cfg),
        BondKind::Double => match double_bond_side(from, to, context, cfg) {
            Some(side) => offset_pair(a, b, &normals, side, false, cfg),
            None => double(a, b, &normals, cfg),
        },
        BondKind::Triple => triple(a, b, &normals, cfg),
        BondKind::Aromatic => {
            let side = aromatic_side(from, to, context, cfg);
            offset_pair(a, b, &normals, side, true, cfg)
        }
        BondKind::StereoFront => wedge(a, b, &normals, cfg),
        BondKind::StereoBack => hashed_wedge(a, b, &normals, cfg)?,
    };

    trace!(?kind, strokes = info.strokes.stroke_count(), "built bond draw info");
    Some(info)
}

/// 双键偏移线所在侧；返回 None 表示对称绘制
///
/// 环内的双键画在环内侧；不在环内且没有取代基时对称绘制；否则画在较满一侧。
fn double_bond_side(
    from: &Endpoint,
    to: &Endpoint,
    context: &BondContext,
    cfg: &DrawConfig,
) -> Option<BondSide> {
    let (a, b) = (&from.position, &to.position);
    if let Some(ring) = &context.ring {
        if let Some(side) = find_ring_interior_side(a, b, ring, offset_distance(cfg)) {
            trace!(?side, "double bond drawn toward ring interior");
            return Some(side);
        }
    }
    if !has_substituents(a, b, &context.neighbors, false) {
        return None;
    }
    let side = find_fuller_side(a, b, &context.neighbors, false);
    trace!(?side, "double bond drawn toward fuller side");
    Some(side)
}

/// 芳香键虚线所在侧：优先环内侧，否则较满一侧
fn aromatic_side(
    from: &Endpoint,
    to: &Endpoint,
    context: &BondContext,
    cfg: &DrawConfig,
) -> BondSide {
    let (a, b) = (&from.position, &to.position);
    context
        .ring
        .as_deref()
        .and_then(|ring| find_ring_interior_side(a, b, ring, offset_distance(cfg)))
        .unwrap_or_else(|| {
            find_fuller_side(a, b, &context.neighbors, cfg.filter_aromatic_neighbors)
        })
}

/// 主线与偏移线中心线之间的距离
#[inline]
fn offset_distance(cfg: &DrawConfig) -> f64 {
    cfg.line_width + cfg.double_bond_spacing
}

fn single(a: Point2, b: Point2, normals: &[Vector2; 2], cfg: &DrawConfig) -> BondDrawInfo {
    CollisionBand::around(&a, &b, normals, cfg.half_line_width(), cfg)
        .into_info(BondStrokes::Single { line: [a, b] }, a, b)
}

fn double(a: Point2, b: Point2, normals: &[Vector2; 2], cfg: &DrawConfig) -> BondDrawInfo {
    let offset = cfg.half_line_width() + cfg.double_bond_spacing / 2.0;
    let lines = [
        shifted(&a, &b, normals[0] * offset),
        shifted(&a, &b, normals[1] * offset),
    ];
    CollisionBand::around(&a, &b, normals, offset + cfg.half_line_width(), cfg)
        .into_info(BondStrokes::Double { lines }, a, b)
}

fn triple(a: Point2, b: Point2, normals: &[Vector2; 2], cfg: &DrawConfig) -> BondDrawInfo {
    let offset = offset_distance(cfg);
    let lines = [
        shifted(&a, &b, normals[0] * offset),
        [a, b],
        shifted(&a, &b, normals[1] * offset),
    ];
    CollisionBand::around(&a, &b, normals, offset + cfg.half_line_width(), cfg)
        .into_info(BondStrokes::Triple { lines }, a, b)
}

fn offset_pair(
    a: Point2,
    b: Point2,
    normals: &[Vector2; 2],
    side: BondSide,
    dashed: bool,
    cfg: &DrawConfig,
) -> BondDrawInfo {
    let n = side.normal(normals);
    let distance = offset_distance(cfg);
    let [oa, ob] = shifted(&a, &b, n * distance);
    // 偏移线太短无法再缩短时保持原长
    let (oa, ob) = shorten_line(
        &oa,
        &ob,
        cfg.inner_line_shortening,
        cfg.inner_line_shortening,
        true,
    )
    .unwrap_or((oa, ob));

    let [ca, cb] = shifted(&a, &b, n * (distance / 2.0));
    CollisionBand::around(&ca, &cb, normals, distance / 2.0 + cfg.half_line_width(), cfg).into_info(
        BondStrokes::Offset {
            main: [a, b],
            offset: [oa, ob],
            side,
            dashed,
        },
        a,
        b,
    )
}

fn wedge(a: Point2, b: Point2, normals: &[Vector2; 2], cfg: &DrawConfig) -> BondDrawInfo {
    let narrow = cfg.half_line_width();
    let wide = cfg.stereo_front_width / 2.0;
    let quad = wedge_outline(&a, &b, normals, narrow, wide);
    let margin = cfg.selector_margin;
    BondDrawInfo {
        strokes: BondStrokes::Wedge { quad },
        midpoints: [a, b],
        edge_collision_points: quad.to_vec(),
        sel_collision_points: wedge_outline(&a, &b, normals, narrow + margin, wide + margin)
            .to_vec(),
        sel_width: cfg.stereo_front_width + 2.0 * margin,
    }
}

/// 虚楔形：沿楔形轴从窄端开始按固定间距逐步前进，直到到达宽端
///
/// 长度不是间距整数倍时，宽端额外补一条，最后一段间距小于 `hash_spacing`。
/// 间距非正或条数超过 [`MAX_HASHES`] 时返回 None。
fn hashed_wedge(
    a: Point2,
    b: Point2,
    normals: &[Vector2; 2],
    cfg: &DrawConfig,
) -> Option<BondDrawInfo> {
    let length = (b - a).norm();
    let step = cfg.hash_spacing;
    if !step.is_finite() || step <= 0.0 || length / step > MAX_HASHES as f64 {
        debug!(length, step, "unusable hash spacing, skipping hashed wedge");
        return None;
    }
    let narrow = cfg.half_line_width();
    let wide = cfg.stereo_back_width / 2.0;
    let tolerance = EPSILON * length.max(1.0);

    let [n0, n1] = normals;
    let hash_at = |p: Point2, travelled: f64| {
        let w = narrow + (wide - narrow) * (travelled / length);
        [p + n0 * w, p + n1 * w]
    };

    let mut movement = create_movement_between_two_points(&a, &b);
    let mut lines = Vec::with_capacity((length / step) as usize + 2);
    lines.push(hash_at(a, 0.0));
    while movement.travelled() + step <= length + tolerance {
        let p = movement.forward(step);
        lines.push(hash_at(p, movement.travelled()));
    }
    if length - movement.travelled() > tolerance {
        lines.push(hash_at(b, length));
    }

    let margin = cfg.selector_margin;
    Some(BondDrawInfo {
        strokes: BondStrokes::Hashed { lines },
        midpoints: [a, b],
        edge_collision_points: wedge_outline(&a, &b, normals, narrow, wide).to_vec(),
        sel_collision_points: wedge_outline(&a, &b, normals, narrow + margin, wide + margin)
            .to_vec(),
        sel_width: cfg.stereo_back_width + 2.0 * margin,
    })
}

/// 相互作用/结构圆连接线：一条居中对齐的虚线
pub fn build_interaction_draw_info(
    from: &Endpoint,
    to: &Endpoint,
    cfg: &DrawConfig,
) -> Option<BondDrawInfo> {
    let (a, b) = get_edge_mid_points(from, to, cfg)?;
    let normals = find_unit_normals(&a, &b)?;
    let dash_offset = get_base_dash_offset_by_midpoints(
        &a,
        &b,
        cfg.interaction_dash_length,
        cfg.interaction_dash_gap,
    );
    Some(
        CollisionBand::around(&a, &b, &normals, cfg.half_line_width(), cfg).into_info(
            BondStrokes::Dashed {
                line: [a, b],
                dash_offset,
            },
            a,
            b,
        ),
    )
}

/// 疏水接触曲线：经过调用方给出的控制点的折线
///
/// 少于两个不重合的控制点时返回 None。
pub fn build_hydrophobic_draw_info(
    control_points: &[Point2],
    cfg: &DrawConfig,
) -> Option<BondDrawInfo> {
    let half = cfg.half_line_width();
    let edge = ribbon_polygon(control_points, half)?;
    let sel = ribbon_polygon(control_points, half + cfg.selector_margin)?;
    let first = *control_points.first()?;
    let last = *control_points.last()?;
    Some(BondDrawInfo {
        strokes: BondStrokes::Polyline {
            points: control_points.to_vec(),
        },
        midpoints: [first, last],
        edge_collision_points: edge,
        sel_collision_points: sel,
        sel_width: cfg.line_width + 2.0 * cfg.selector_margin,
    })
}

/// 并行构建一组键，结果与请求一一对应
pub fn build_many(requests: &[BondRequest], cfg: &DrawConfig) -> Vec<Option<BondDrawInfo>> {
    requests
        .par_iter()
        .map(|r| build_bond_draw_info(&r.from, &r.to, r.kind, &r.context, cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::endpoint::Neighbor;
    use crate::math::{approx_eq, points_approx_eq};
    use crate::polygon::check_collision_polygon_point;

    fn atoms() -> (Endpoint, Endpoint) {
        (
            Endpoint::atom(Point2::new(0.0, 0.0)),
            Endpoint::atom(Point2::new(10.0, 0.0)),
        )
    }

    fn build(kind: BondKind, context: &BondContext) -> BondDrawInfo {
        let (from, to) = atoms();
        build_bond_draw_info(&from, &to, kind, context, &DrawConfig::default()).unwrap()
    }

    #[test]
    fn test_single_bond() {
        let info = build(BondKind::Single, &BondContext::default());
        let BondStrokes::Single { line } = info.strokes else {
            panic!("expected single stroke");
        };
        assert!(points_approx_eq(&line[0], &Point2::new(0.0, 0.0)));
        assert!(points_approx_eq(&line[1], &Point2::new(10.0, 0.0)));

        // 线宽 1.5，选择边距 3
        let edge = &info.edge_collision_points;
        assert!(check_collision_polygon_point(edge, &Point2::new(5.0, 0.5)));
        assert!(!check_collision_polygon_point(edge, &Point2::new(5.0, 1.0)));
        assert!(info.hit_test(&Point2::new(5.0, 3.0)));
        assert!(!info.hit_test(&Point2::new(5.0, 4.0)));
        assert!(approx_eq(info.sel_width, 7.5));
    }

    #[test]
    fn test_labels_shorten_and_can_cancel() {
        let cfg = DrawConfig::default();
        let from = Endpoint::labeled_atom(Point2::new(0.0, 0.0));
        let to = Endpoint::atom(Point2::new(20.0, 0.0));
        let none = BondContext::default();
        let info = build_bond_draw_info(&from, &to, BondKind::Single, &none, &cfg).unwrap();
        assert!(points_approx_eq(&info.midpoints[0], &Point2::new(8.0, 0.0)));
        assert!(points_approx_eq(&info.midpoints[1], &Point2::new(20.0, 0.0)));

        // 两个标签的避让半径之和超过键长
        let from = Endpoint::labeled_atom(Point2::new(0.0, 0.0));
        let to = Endpoint::labeled_atom(Point2::new(10.0, 0.0));
        assert!(build_bond_draw_info(&from, &to, BondKind::Double, &none, &cfg).is_none());

        // 零长度
        let p = Endpoint::atom(Point2::new(3.0, 3.0));
        assert!(build_bond_draw_info(&p, &p, BondKind::Single, &none, &cfg).is_none());
    }

    #[test]
    fn test_double_bond_centered_without_substituents() {
        let info = build(BondKind::Double, &BondContext::default());
        let BondStrokes::Double { lines } = info.strokes else {
            panic!("expected centered double bond");
        };
        // 偏移 = 半线宽 + 半间隙 = 0.75 + 1.5
        assert!(approx_eq(lines[0][0].y, 2.25));
        assert!(approx_eq(lines[1][0].y, -2.25));
        assert!(approx_eq(info.sel_width, 2.0 * (2.25 + 0.75 + 3.0)));
    }

    #[test]
    fn test_double_bond_follows_fuller_side() {
        let three_above = BondContext::with_neighbors(vec![
            Neighbor::new(Point2::new(-5.0, 5.0), false),
            Neighbor::new(Point2::new(15.0, 5.0), false),
            Neighbor::new(Point2::new(5.0, 9.0), false),
            Neighbor::new(Point2::new(15.0, -5.0), false),
        ]);
        let info = build(BondKind::Double, &three_above);
        let BondStrokes::Offset { main, offset, side, dashed } = info.strokes else {
            panic!("expected offset double bond");
        };
        assert_eq!(side, BondSide::First);
        assert!(!dashed);
        assert!(approx_eq(main[0].y, 0.0));
        assert!(approx_eq(offset[0].y, 4.5));
        // 偏移线两端各缩短 4
        assert!(approx_eq(offset[0].x, 4.0));
        assert!(approx_eq(offset[1].x, 6.0));

        let one_above = BondContext::with_neighbors(vec![
            Neighbor::new(Point2::new(-5.0, 5.0), false),
            Neighbor::new(Point2::new(-5.0, -5.0), false),
            Neighbor::new(Point2::new(15.0, -5.0), false),
            Neighbor::new(Point2::new(5.0, -9.0), false),
        ]);
        let BondStrokes::Offset { offset, side, .. } = build(BondKind::Double, &one_above).strokes
        else {
            panic!("expected offset double bond");
        };
        assert_eq!(side, BondSide::Second);
        assert!(approx_eq(offset[0].y, -4.5));

        let tie = BondContext::with_neighbors(vec![
            Neighbor::new(Point2::new(-5.0, 5.0), false),
            Neighbor::new(Point2::new(15.0, 5.0), false),
            Neighbor::new(Point2::new(-5.0, -5.0), false),
            Neighbor::new(Point2::new(15.0, -5.0), false),
        ]);
        let BondStrokes::Offset { side, .. } = build(BondKind::Double, &tie).strokes else {
            panic!("expected offset double bond");
        };
        assert_eq!(side, super::super::side::DEFAULT_SIDE);
    }

    #[test]
    fn test_double_bond_in_ring_points_inward() {
        // 键下方（y 为负）的六元环
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(15.0, -8.66),
            Point2::new(10.0, -17.32),
            Point2::new(0.0, -17.32),
            Point2::new(-5.0, -8.66),
        ];
        let info = build(BondKind::Double, &BondContext::with_ring(ring));
        let BondStrokes::Offset { offset, side, .. } = &info.strokes else {
            panic!("expected offset double bond");
        };
        assert_eq!(*side, BondSide::Second);
        assert!(offset[0].y < 0.0);
        // 碰撞带覆盖主线与偏移线
        let edge = &info.edge_collision_points;
        assert!(check_collision_polygon_point(edge, &Point2::new(5.0, -4.5)));
        assert!(check_collision_polygon_point(edge, &Point2::new(5.0, 0.5)));
        assert!(!check_collision_polygon_point(edge, &Point2::new(5.0, 1.0)));
    }

    #[test]
    fn test_aromatic_bond_is_dashed_and_filters_neighbors() {
        let context = BondContext::with_neighbors(vec![
            Neighbor::new(Point2::new(-5.0, 5.0), false),
            Neighbor::new(Point2::new(15.0, 5.0), false),
            Neighbor::new(Point2::new(-5.0, -5.0), true),
        ]);
        let BondStrokes::Offset { side, dashed, .. } = build(BondKind::Aromatic, &context).strokes
        else {
            panic!("expected offset aromatic bond");
        };
        assert!(dashed);
        // 只统计芳香邻居时下方胜出
        assert_eq!(side, BondSide::Second);

        let cfg = DrawConfig {
            filter_aromatic_neighbors: false,
            ..Default::default()
        };
        let (from, to) = atoms();
        let info = build_bond_draw_info(&from, &to, BondKind::Aromatic, &context, &cfg).unwrap();
        let BondStrokes::Offset { side, .. } = info.strokes else {
            panic!("expected offset aromatic bond");
        };
        assert_eq!(side, BondSide::First);
    }

    #[test]
    fn test_triple_bond() {
        let info = build(BondKind::Triple, &BondContext::default());
        let BondStrokes::Triple { lines } = info.strokes else {
            panic!("expected triple bond");
        };
        assert!(approx_eq(lines[0][0].y, 4.5));
        assert!(approx_eq(lines[1][0].y, 0.0));
        assert!(approx_eq(lines[2][1].y, -4.5));
    }

    #[test]
    fn test_stereo_front_wedge_widens() {
        let info = build(BondKind::StereoFront, &BondContext::default());
        let BondStrokes::Wedge { quad } = info.strokes else {
            panic!("expected wedge");
        };
        assert!(approx_eq((quad[0] - quad[3]).norm(), 1.5));
        assert!(approx_eq((quad[1] - quad[2]).norm(), 7.0));
        assert_eq!(info.edge_collision_points, quad.to_vec());
        assert!(info.hit_test(&Point2::new(9.0, 5.0)));
        assert!(!info.hit_test(&Point2::new(1.0, 5.0)));
    }

    #[test]
    fn test_stereo_back_hashes_reach_far_edge() {
        let info = build(BondKind::StereoBack, &BondContext::default());
        let BondStrokes::Hashed { lines } = &info.strokes else {
            panic!("expected hashed wedge");
        };
        // 长度 10，间距 2.5 → 5 条
        assert_eq!(lines.len(), 5);
        assert!(approx_eq((lines[0][0] - lines[0][1]).norm(), 1.5));
        let last = lines.last().unwrap();
        assert!(((last[0] - last[1]).norm() - 7.0).abs() < 1e-9);
        assert!((last[0].x - 10.0).abs() < 1e-9);
        let widths: Vec<f64> = lines.iter().map(|l| (l[0] - l[1]).norm()).collect();
        assert!(widths.windows(2).all(|w| w[1] > w[0]));
    }

    fn hashes(length: f64, cfg: &DrawConfig) -> Option<Vec<[Point2; 2]>> {
        let from = Endpoint::atom(Point2::new(0.0, 0.0));
        let to = Endpoint::atom(Point2::new(length, 0.0));
        let info =
            build_bond_draw_info(&from, &to, BondKind::StereoBack, &BondContext::default(), cfg)?;
        match info.strokes {
            BondStrokes::Hashed { lines } => Some(lines),
            other => panic!("expected hashed wedge, got {other:?}"),
        }
    }

    #[test]
    fn test_stereo_back_uses_fixed_spacing() {
        let cfg = DrawConfig::default();
        // 9.9 = 3 × 2.5 + 2.4：前三段为固定间距，宽端补一条
        let lines = hashes(9.9, &cfg).unwrap();
        let xs: Vec<f64> = lines.iter().map(|l| l[0].x).collect();
        assert_eq!(xs.len(), 5);
        let gaps: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        for gap in &gaps[..3] {
            assert!((gap - cfg.hash_spacing).abs() < 1e-9);
        }
        assert!((gaps[3] - 2.4).abs() < 1e-9);
        let last = lines.last().unwrap();
        assert!(((last[0] - last[1]).norm() - cfg.stereo_back_width).abs() < 1e-9);

        // 比一个间距还短
        let lines = hashes(1.0, &cfg).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(approx_eq(lines[1][0].x, 1.0));
    }

    #[test]
    fn test_stereo_back_rejects_unusable_spacing() {
        for hash_spacing in [0.0, -1.0, f64::NAN, 1e-9] {
            let cfg = DrawConfig {
                hash_spacing,
                ..Default::default()
            };
            assert!(hashes(10.0, &cfg).is_none());
        }
    }

    #[test]
    fn test_aromatic_bond_prefers_ring_interior() {
        // 芳香邻居都在上方，环在下方
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(15.0, -8.66),
            Point2::new(10.0, -17.32),
            Point2::new(0.0, -17.32),
            Point2::new(-5.0, -8.66),
        ];
        let mut context = BondContext::with_ring(ring);
        context.neighbors = vec![
            Neighbor::new(Point2::new(-5.0, 5.0), true),
            Neighbor::new(Point2::new(15.0, 5.0), true),
        ];
        let BondStrokes::Offset { side, dashed, offset, .. } =
            build(BondKind::Aromatic, &context).strokes
        else {
            panic!("expected offset aromatic bond");
        };
        assert!(dashed);
        assert_eq!(side, BondSide::Second);
        assert!(offset[0].y < 0.0);

        let neighbors_only = BondContext::with_neighbors(context.neighbors.clone());
        let BondStrokes::Offset { side, .. } = build(BondKind::Aromatic, &neighbors_only).strokes
        else {
            panic!("expected offset aromatic bond");
        };
        assert_eq!(side, BondSide::First);
    }

    #[test]
    fn test_interaction_to_structure_circle() {
        let cfg = DrawConfig::default();
        let circle = Endpoint::structure_circle(Point2::new(0.0, 0.0), 20.0);
        let atom = Endpoint::atom(Point2::new(50.0, 0.0));
        let info = build_interaction_draw_info(&circle, &atom, &cfg).unwrap();
        assert!(points_approx_eq(&info.midpoints[0], &Point2::new(22.0, 0.0)));
        let BondStrokes::Dashed { dash_offset, .. } = info.strokes else {
            panic!("expected dashed connector");
        };
        let period = cfg.interaction_dash_length + cfg.interaction_dash_gap;
        assert!(dash_offset >= 0.0 && dash_offset < period);

        let inside = Endpoint::atom(Point2::new(15.0, 0.0));
        assert!(build_interaction_draw_info(&circle, &inside, &cfg).is_none());
    }

    #[test]
    fn test_hydrophobic_polyline() {
        let cfg = DrawConfig::default();
        let points = [Point2::new(0.0, 0.0), Point2::new(10.0, 5.0), Point2::new(20.0, 0.0)];
        let info = build_hydrophobic_draw_info(&points, &cfg).unwrap();
        assert_eq!(info.strokes.draw_points(), vec![points.to_vec()]);
        assert!(info.hit_test(&Point2::new(10.0, 5.5)));
        assert!(!info.hit_test(&Point2::new(10.0, -5.0)));
        assert!(build_hydrophobic_draw_info(&points[..1], &cfg).is_none());
    }

    #[test]
    fn test_build_many_preserves_order() {
        let (from, to) = atoms();
        let requests = vec![
            BondRequest {
                from,
                to,
                kind: BondKind::Single,
                context: BondContext::default(),
            },
            BondRequest {
                from: Endpoint::labeled_atom(Point2::new(0.0, 0.0)),
                to: Endpoint::labeled_atom(Point2::new(1.0, 0.0)),
                kind: BondKind::Double,
                context: BondContext::default(),
            },
            BondRequest {
                from,
                to,
                kind: BondKind::Triple,
                context: BondContext::default(),
            },
        ];
        let built = build_many(&requests, &DrawConfig::default());
        assert_eq!(built.len(), 3);
        assert!(matches!(built[0].as_ref().map(|i| &i.strokes), Some(BondStrokes::Single { .. })));
        assert!(built[1].is_none());
        assert!(matches!(built[2].as_ref().map(|i| &i.strokes), Some(BondStrokes::Triple { .. })));
    }
}
