//! 数学基础类型
//!
//! 基于 nalgebra 提供的点类型别名，以及坐标去重所需的精确坐标键。

use nalgebra as na;

/// 2D点类型（图纸单位下的平面坐标）
pub type Point2 = na::Point2<f64>;

/// 数值容差，仅用于测试中的浮点比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 精确坐标键
///
/// 按 (x, y) 的位模式比较，`-0.0` 折叠为 `0.0`，
/// 因此与浮点 `==` 对有限值的判定一致，可用作 `HashMap` 的键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    x: u64,
    y: u64,
}

impl CoordKey {
    pub fn new(point: &Point2) -> Self {
        Self {
            x: normalize_zero(point.x).to_bits(),
            y: normalize_zero(point.y).to_bits(),
        }
    }
}

impl From<&Point2> for CoordKey {
    fn from(point: &Point2) -> Self {
        Self::new(point)
    }
}

#[inline]
fn normalize_zero(v: f64) -> f64 {
    // -0.0 + 0.0 == +0.0
    v + 0.0
}

/// 2D包围盒
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    /// 创建空的包围盒（无效状态）
    fn empty() -> Self {
        Self {
            min: Point2::new(f64::MAX, f64::MAX),
            max: Point2::new(f64::MIN, f64::MIN),
        }
    }

    /// 从点集创建包围盒，点集为空时返回 `None`
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut bbox = Self::empty();
        let mut any = false;
        for p in points {
            bbox.expand_to_include(p);
            any = true;
        }
        any.then_some(bbox)
    }

    /// 扩展包围盒以包含指定点
    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}
