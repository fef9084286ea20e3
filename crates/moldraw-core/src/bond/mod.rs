//! 键与连接线的绘制信息构建
//!
//! 输入端点坐标、键类型与结构上下文，输出每种键形态的笔画顶点、
//! 两个代表端点以及两层碰撞多边形（紧贴形状 / 选择用）。

mod builder;
mod config;
mod draw_info;
mod endpoint;
mod side;

pub use builder::{
    build_bond_draw_info, build_hydrophobic_draw_info, build_interaction_draw_info, build_many,
    get_edge_mid_points, BondRequest,
};
pub use config::DrawConfig;
pub use draw_info::{BondDrawInfo, BondStrokes};
pub use endpoint::{BondContext, BondKind, Endpoint, EndpointKind, Neighbor};
pub use side::{
    count_neighbors_per_side, find_fuller_side, find_ring_interior_side, has_substituents, BondSide,
    DEFAULT_SIDE,
};
