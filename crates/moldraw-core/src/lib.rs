//! MolDraw 几何内核
//!
//! 分子结构及分子间相互作用二维图的几何布局与碰撞引擎：
//! 给定原子/注释坐标和键/连接线语义，确定性地计算每种键形态的绘制顶点、
//! 用于鼠标命中检测/选择的包围形状，以及点/线/圆/多边形的碰撞与放置查询。
//!
//! # 架构设计
//!
//! 数据单向流动：图元 → 键绘制信息构建 → （外部）渲染器/命中检测。
//! - 图元：`vector`、`line`、`point`、`polygon`、`rect`
//! - 构建：`bond`（以及放置附加标签的 `label`）
//!
//! 所有函数都是无状态的纯函数，退化的几何情形以 `None` 表示而不是报错。
//!
//! # 示例
//!
//! ```rust
//! use moldraw_core::prelude::*;
//!
//! let from = Endpoint::atom(Point2::new(0.0, 0.0));
//! let to = Endpoint::labeled_atom(Point2::new(30.0, 0.0));
//! let cfg = DrawConfig::default();
//!
//! let info = build_bond_draw_info(&from, &to, BondKind::Double, &BondContext::default(), &cfg)
//!     .expect("bond is long enough to draw");
//! assert_eq!(info.strokes.draw_points().len(), 2);
//! assert!(info.hit_test(&Point2::new(10.0, 0.0)));
//! ```

pub mod bond;
pub mod error;
pub mod label;
pub mod line;
pub mod math;
pub mod point;
pub mod polygon;
pub mod position;
pub mod rect;
pub mod vector;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::bond::{
        build_bond_draw_info, build_hydrophobic_draw_info, build_interaction_draw_info,
        build_many, BondContext, BondDrawInfo, BondKind, BondRequest, BondSide, BondStrokes,
        DrawConfig, Endpoint, EndpointKind, Neighbor,
    };
    pub use crate::error::GeometryError;
    pub use crate::label::AttachedLabel;
    pub use crate::line::LinearFunction;
    pub use crate::math::{BoundingBox2, Point2, Vector2};
    pub use crate::polygon::Circle;
    pub use crate::position::RelativePosition;
}
