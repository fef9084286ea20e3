//! 绘制常量配置
//!
//! 一次性提供、在各次调用间只读复用的数值常量。

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// 线宽
    pub line_width: f64,
    /// 双键/三键平行线之间的空隙
    pub double_bond_spacing: f64,
    /// 偏移线（环内侧或较满一侧）两端各自缩短的距离
    pub inner_line_shortening: f64,
    /// 实楔形键远端宽度
    pub stereo_front_width: f64,
    /// 虚楔形键远端宽度
    pub stereo_back_width: f64,
    /// 虚楔形键相邻短线的间距
    pub hash_spacing: f64,
    /// 选择多边形在绘制形状外额外扩展的距离
    pub selector_margin: f64,
    /// 带文字标签的原子/注释的避让半径
    pub label_clearance: f64,
    /// 结构圆边界外的额外间隙
    pub structure_circle_margin: f64,
    /// 相互作用虚线的实线长度
    pub interaction_dash_length: f64,
    /// 相互作用虚线的空隙长度
    pub interaction_dash_gap: f64,
    /// 附加标签候选方向的角度步长（度）
    pub label_angle_step_deg: f64,
    /// 芳香键判断较满一侧时只统计芳香邻居
    pub filter_aromatic_neighbors: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            double_bond_spacing: 3.0,
            inner_line_shortening: 4.0,
            stereo_front_width: 7.0,
            stereo_back_width: 7.0,
            hash_spacing: 2.5,
            selector_margin: 3.0,
            label_clearance: 8.0,
            structure_circle_margin: 2.0,
            interaction_dash_length: 4.0,
            interaction_dash_gap: 3.0,
            label_angle_step_deg: 45.0,
            filter_aromatic_neighbors: true,
        }
    }
}

impl DrawConfig {
    /// 检查所有常量都是有限值且在合理范围内
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("line_width", self.line_width),
            ("double_bond_spacing", self.double_bond_spacing),
            ("inner_line_shortening", self.inner_line_shortening),
            ("stereo_front_width", self.stereo_front_width),
            ("stereo_back_width", self.stereo_back_width),
            ("hash_spacing", self.hash_spacing),
            ("selector_margin", self.selector_margin),
            ("label_clearance", self.label_clearance),
            ("structure_circle_margin", self.structure_circle_margin),
            ("interaction_dash_length", self.interaction_dash_length),
            ("interaction_dash_gap", self.interaction_dash_gap),
            ("label_angle_step_deg", self.label_angle_step_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("line_width", self.line_width),
            ("hash_spacing", self.hash_spacing),
        ] {
            if value <= 0.0 {
                return Err(GeometryError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("double_bond_spacing", self.double_bond_spacing),
            ("inner_line_shortening", self.inner_line_shortening),
            ("selector_margin", self.selector_margin),
            ("label_clearance", self.label_clearance),
            ("structure_circle_margin", self.structure_circle_margin),
            ("interaction_dash_length", self.interaction_dash_length),
            ("interaction_dash_gap", self.interaction_dash_gap),
        ] {
            if value < 0.0 {
                return Err(GeometryError::Negative { field, value });
            }
        }

        for width in [self.stereo_front_width, self.stereo_back_width] {
            if width < self.line_width {
                return Err(GeometryError::WedgeNarrowerThanLine {
                    width,
                    line_width: self.line_width,
                });
            }
        }

        if self.label_angle_step_deg <= 0.0 || self.label_angle_step_deg > 360.0 {
            return Err(GeometryError::InvalidAngleStep(self.label_angle_step_deg));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn half_line_width(&self) -> f64 {
        self.line_width / 2.0
    }
}
