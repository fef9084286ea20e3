//! 几何内核错误定义
//!
//! 几何函数本身从不返回错误：退化情形用 `None` 表示。
//! 这里只覆盖配置校验。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Value for {field} must be positive: {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Value for {field} must not be negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Stereo wedge width {width} is narrower than line width {line_width}")]
    WedgeNarrowerThanLine { width: f64, line_width: f64 },

    #[error("Label angle step must be in (0, 360]: {0}")]
    InvalidAngleStep(f64),
}
