//! 相对位置标志集
//!
//! 四个标志 {below, above, left, right} 的位集合。没有任何标志表示 inside。
//! 对立标志（below/above、left/right）互斥，组合起来共 8 个方向加 inside。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RelativePosition(u8);

impl RelativePosition {
    pub const INSIDE: Self = Self(0);
    pub const BELOW: Self = Self(0b0001);
    pub const ABOVE: Self = Self(0b0010);
    pub const LEFT: Self = Self(0b0100);
    pub const RIGHT: Self = Self(0b1000);

    pub const ABOVE_LEFT: Self = Self(Self::ABOVE.0 | Self::LEFT.0);
    pub const ABOVE_RIGHT: Self = Self(Self::ABOVE.0 | Self::RIGHT.0);
    pub const BELOW_LEFT: Self = Self(Self::BELOW.0 | Self::LEFT.0);
    pub const BELOW_RIGHT: Self = Self(Self::BELOW.0 | Self::RIGHT.0);

    /// 由水平与垂直分量组合；对立标志同时出现时互相抵消
    pub fn from_flags(below: bool, above: bool, left: bool, right: bool) -> Self {
        let mut pos = Self::INSIDE;
        if below != above {
            pos = pos | if below { Self::BELOW } else { Self::ABOVE };
        }
        if left != right {
            pos = pos | if left { Self::LEFT } else { Self::RIGHT };
        }
        pos
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn is_below(self) -> bool {
        self.contains(Self::BELOW)
    }

    pub fn is_above(self) -> bool {
        self.contains(Self::ABOVE)
    }

    pub fn is_left(self) -> bool {
        self.contains(Self::LEFT)
    }

    pub fn is_right(self) -> bool {
        self.contains(Self::RIGHT)
    }

    /// 恰好一个水平分量和一个垂直分量
    pub fn is_diagonal(self) -> bool {
        self.0.count_ones() == 2
    }

    /// 只有一个标志（正上/正下/正左/正右）
    pub fn is_axis(self) -> bool {
        self.0.count_ones() == 1
    }

    /// 对立方向：above↔below，left↔right
    pub fn invert(self) -> Self {
        Self::from_flags(self.is_above(), self.is_below(), self.is_right(), self.is_left())
    }

    /// 仅保留水平分量
    pub fn horizontal(self) -> Self {
        Self(self.0 & (Self::LEFT.0 | Self::RIGHT.0))
    }

    /// 仅保留垂直分量
    pub fn vertical(self) -> Self {
        Self(self.0 & (Self::ABOVE.0 | Self::BELOW.0))
    }

    /// 按屏幕坐标（y 向下）的方向符号：`(x, y)` 各为 -1、0 或 1
    pub fn direction_signs(self) -> (f64, f64) {
        let sx = if self.is_left() {
            -1.0
        } else if self.is_right() {
            1.0
        } else {
            0.0
        };
        let sy = if self.is_above() {
            -1.0
        } else if self.is_below() {
            1.0
        } else {
            0.0
        };
        (sx, sy)
    }

    /// 四个轴向位置
    pub const AXES: [Self; 4] = [Self::LEFT, Self::RIGHT, Self::ABOVE, Self::BELOW];
}

impl BitOr for RelativePosition {
    type Output = Self;

    /// 合并标志；结果若含对立标志则两者都被清除
    fn bitor(self, rhs: Self) -> Self {
        let raw = self.0 | rhs.0;
        let below = raw & Self::BELOW.0 != 0;
        let above = raw & Self::ABOVE.0 != 0;
        let left = raw & Self::LEFT.0 != 0;
        let right = raw & Self::RIGHT.0 != 0;
        let mut bits = 0;
        if below != above {
            bits |= if below { Self::BELOW.0 } else { Self::ABOVE.0 };
        }
        if left != right {
            bits |= if left { Self::LEFT.0 } else { Self::RIGHT.0 };
        }
        Self(bits)
    }
}

impl fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return write!(f, "inside");
        }
        let mut parts = Vec::with_capacity(2);
        if self.is_above() {
            parts.push("above");
        }
        if self.is_below() {
            parts.push("below");
        }
        if self.is_left() {
            parts.push("left");
        }
        if self.is_right() {
            parts.push("right");
        }
        write!(f, "{}", parts.join("-"))
    }
}

/// 返回对立方向
pub fn invert_relative_position(position: RelativePosition) -> RelativePosition {
    position.invert()
}
