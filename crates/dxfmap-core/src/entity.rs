//! 图纸实体
//!
//! 由实体读取器（DXF 解析层）产出的带类型图元。
//! 只保留导出所需的平面几何属性，Z 坐标在读取时丢弃。

use crate::math::Point2;

/// 图纸实体
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEntity {
    /// 直线段 (LINE)
    Line { start: Point2, end: Point2 },
    /// 圆 (CIRCLE)，两种导出路径都会丢弃半径
    Circle { center: Point2, radius: f64 },
    /// 轻量多段线 (LWPOLYLINE)
    Polyline { points: Vec<Point2>, closed: bool },
}

impl DrawingEntity {
    /// 创建直线
    pub fn line(start: Point2, end: Point2) -> Self {
        Self::Line { start, end }
    }

    /// 创建圆
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// 从点集创建多段线
    pub fn polyline(points: impl IntoIterator<Item = Point2>, closed: bool) -> Self {
        Self::Polyline {
            points: points.into_iter().collect(),
            closed,
        }
    }
}
